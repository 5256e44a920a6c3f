// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core theming logic with ZERO external dependencies.
//!
//! This module contains pure domain types and the color math; it depends
//! only on `std` to keep the algorithms testable in isolation.
//!
//! # Modules
//!
//! - [`color`]: [`Rgb`](color::Rgb), luminance, saturation, and
//!   [`contrast_ratio`](color::contrast_ratio)
//! - [`palette`]: [`Palette`](palette::Palette),
//!   [`PaletteBuilder`](palette::PaletteBuilder), and the site fallback
//!   constants
//! - [`reveal`]: [`RevealPhase`](reveal::RevealPhase) and
//!   [`RevealCoverage`](reveal::RevealCoverage)
//! - [`source`]: [`SourceImage`](source::SourceImage) pixel buffer

pub mod color;
pub mod palette;
pub mod reveal;
pub mod source;
