// SPDX-License-Identifier: MPL-2.0
//! `pentimento` derives an accessible color theme from an artwork image and
//! drives the site's "uncover the painting" reveal effect.
//!
//! The pipeline: the [`sampler`] decodes a bitmap into a pixel buffer, the
//! [`classifier`] samples it into a contrast-checked
//! [`Palette`](domain::palette::Palette), the [`theme`] store publishes the
//! palette to every visual surface, and the [`reveal`] surface composites the same
//! image under a pointer-driven brush until coverage completes and the next
//! image rotates in. Every failure path degrades to the fixed fallback
//! theme; nothing here can leave a page without colors.

#![doc(html_root_url = "https://docs.rs/pentimento/0.2.0")]

pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod reveal;
pub mod sampler;
pub mod theme;

#[cfg(test)]
mod test_utils;
