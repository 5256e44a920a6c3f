// SPDX-License-Identifier: MPL-2.0
//! Theme state: the store every visual surface reads its colors from.
//!
//! The store is an explicit value handed to rendering code, not an ambient
//! global. It starts out holding the fallback palette so readers never see
//! an undefined theme, and it notifies subscribers on every publish.
//!
//! Image loads can race: the user navigates while a decode is in flight,
//! and the late classification must not overwrite the newer theme. Each
//! load cycle therefore takes a [`CycleToken`]; publishing with a token
//! from a superseded cycle is rejected.
//!
//! # Example
//!
//! ```
//! use pentimento::domain::palette::{FallbackColors, Palette};
//! use pentimento::theme::ThemeStore;
//!
//! let store = ThemeStore::new(Palette::fallback(&FallbackColors::default()));
//! let reader = store.subscribe();
//!
//! let cycle = store.begin_cycle();
//! assert!(store.publish(&cycle, Palette::fallback(&FallbackColors::default())));
//! assert_eq!(reader.palette(), store.current());
//! ```

use crate::domain::palette::Palette;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Proof that a publish belongs to a specific image-load cycle.
///
/// Obtained from [`ThemeStore::begin_cycle`]; invalidated by any later
/// `begin_cycle` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken {
    generation: u64,
}

/// Single-writer, many-reader store of the current [`Palette`].
///
/// Lifetime is one page session; nothing here persists.
#[derive(Debug)]
pub struct ThemeStore {
    tx: watch::Sender<Palette>,
    generation: AtomicU64,
}

impl ThemeStore {
    /// Creates a store holding `initial`, conventionally the fallback
    /// palette, so consumers have a complete theme before the first
    /// classification lands.
    #[must_use]
    pub fn new(initial: Palette) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Returns a new reader handle.
    #[must_use]
    pub fn subscribe(&self) -> ThemeReader {
        ThemeReader {
            rx: self.tx.subscribe(),
        }
    }

    /// Starts a new image-load cycle, superseding any cycle still in
    /// flight. The returned token authorizes exactly this cycle's publish.
    pub fn begin_cycle(&self) -> CycleToken {
        CycleToken {
            generation: self.generation.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Publishes `palette` if `token` still belongs to the active cycle.
    ///
    /// Returns false (and leaves the store untouched) when a newer cycle
    /// has started since the token was issued; this is the stale-decode
    /// guard.
    pub fn publish(&self, token: &CycleToken, palette: Palette) -> bool {
        if token.generation != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        self.tx.send_replace(palette);
        true
    }

    /// Returns a clone of the current palette.
    #[must_use]
    pub fn current(&self) -> Palette {
        self.tx.borrow().clone()
    }
}

/// Read handle onto a [`ThemeStore`].
#[derive(Debug, Clone)]
pub struct ThemeReader {
    rx: watch::Receiver<Palette>,
}

impl ThemeReader {
    /// Returns a clone of the palette as of the last publish.
    #[must_use]
    pub fn palette(&self) -> Palette {
        self.rx.borrow().clone()
    }

    /// Waits for the next publish. Returns false if the store was dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Returns a clone of the palette and marks it seen, so the next
    /// [`ThemeReader::changed`] waits for a genuinely newer publish.
    #[must_use]
    pub fn latest(&mut self) -> Palette {
        self.rx.borrow_and_update().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::color::Rgb;
    use crate::domain::palette::{FallbackColors, PaletteBuilder};
    use crate::domain::palette::BucketCaps;

    fn fallback() -> Palette {
        Palette::fallback(&FallbackColors::default())
    }

    fn palette_with_accent(accent: Rgb) -> Palette {
        let mut builder = PaletteBuilder::new(BucketCaps { bucket: 5, accent: 4 });
        builder.set_primary_accent(accent);
        builder.finish(&FallbackColors::default())
    }

    #[test]
    fn readers_see_initial_palette_before_any_publish() {
        let store = ThemeStore::new(fallback());
        let reader = store.subscribe();
        assert_eq!(reader.palette(), fallback());
    }

    #[test]
    fn publish_with_active_token_updates_all_readers() {
        let store = ThemeStore::new(fallback());
        let reader_a = store.subscribe();
        let reader_b = store.subscribe();

        let cycle = store.begin_cycle();
        let published = palette_with_accent(Rgb::new(1, 2, 3));
        assert!(store.publish(&cycle, published.clone()));

        assert_eq!(reader_a.palette(), published);
        assert_eq!(reader_b.palette(), published);
        assert_eq!(store.current(), published);
    }

    #[test]
    fn stale_token_publish_is_rejected() {
        let store = ThemeStore::new(fallback());
        let stale = store.begin_cycle();
        let active = store.begin_cycle();

        let newer = palette_with_accent(Rgb::new(9, 9, 9));
        assert!(store.publish(&active, newer.clone()));

        // The superseded cycle's decode arrives late and must not win.
        let late = palette_with_accent(Rgb::new(1, 1, 1));
        assert!(!store.publish(&stale, late));
        assert_eq!(store.current(), newer);
    }

    #[test]
    fn token_is_single_use_per_cycle_not_per_publish() {
        // A token stays valid until the next begin_cycle; re-publishing
        // within the same cycle is the writer's prerogative.
        let store = ThemeStore::new(fallback());
        let cycle = store.begin_cycle();
        assert!(store.publish(&cycle, fallback()));
        assert!(store.publish(&cycle, palette_with_accent(Rgb::new(4, 4, 4))));
    }

    #[tokio::test]
    async fn changed_wakes_on_publish() {
        let store = ThemeStore::new(fallback());
        let mut reader = store.subscribe();

        let cycle = store.begin_cycle();
        let published = palette_with_accent(Rgb::new(7, 7, 7));
        assert!(store.publish(&cycle, published.clone()));

        assert!(reader.changed().await);
        assert_eq!(reader.latest(), published);
    }
}
