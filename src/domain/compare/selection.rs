// SPDX-License-Identifier: MPL-2.0
//! The ordered pair of images being compared.

use std::path::{Path, PathBuf};

/// One of the two positions in the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Base image, drawn as the full background.
    First,
    /// Overlay image, drawn clipped on top of the base.
    Second,
}

impl Slot {
    /// Returns the other slot of the pair.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

/// A locally addressable image file. Only the location is kept, never pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    path: PathBuf,
}

impl SelectedImage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Pair of optional slots. Index 0 is the base image, index 1 the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedImages {
    slots: [Option<SelectedImage>; 2],
}

impl SelectedImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole pair from an ordered list. Entries past the second
    /// are ignored; a single entry clears the overlay slot.
    ///
    /// Returns `false` and leaves the pair untouched when `images` is empty.
    pub fn replace_all<I>(&mut self, images: I) -> bool
    where
        I: IntoIterator<Item = SelectedImage>,
    {
        let mut images = images.into_iter();
        let Some(first) = images.next() else {
            return false;
        };
        self.slots = [Some(first), images.next()];
        true
    }

    /// Replaces a single slot, leaving the other one as it was.
    pub fn set(&mut self, slot: Slot, image: SelectedImage) {
        self.slots[slot.index()] = Some(image);
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&SelectedImage> {
        self.slots[slot.index()].as_ref()
    }

    #[must_use]
    pub fn base(&self) -> Option<&SelectedImage> {
        self.get(Slot::First)
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&SelectedImage> {
        self.get(Slot::Second)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both the base and the overlay are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.base().is_some() && self.overlay().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(format!("/photos/{name}"))
    }

    #[test]
    fn replace_all_fills_slots_in_order() {
        let mut pair = SelectedImages::new();
        assert!(pair.replace_all(vec![image("a.jpg"), image("b.jpg")]));

        assert_eq!(pair.base(), Some(&image("a.jpg")));
        assert_eq!(pair.overlay(), Some(&image("b.jpg")));
        assert!(pair.is_complete());
    }

    #[test]
    fn replace_all_ignores_extra_entries() {
        let mut pair = SelectedImages::new();
        pair.replace_all(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")]);

        assert_eq!(pair.len(), 2);
        assert_eq!(pair.overlay(), Some(&image("b.jpg")));
    }

    #[test]
    fn replace_all_with_single_entry_clears_overlay() {
        let mut pair = SelectedImages::new();
        pair.replace_all(vec![image("a.jpg"), image("b.jpg")]);
        pair.replace_all(vec![image("c.jpg")]);

        assert_eq!(pair.base(), Some(&image("c.jpg")));
        assert_eq!(pair.overlay(), None);
    }

    #[test]
    fn replace_all_with_nothing_keeps_pair() {
        let mut pair = SelectedImages::new();
        pair.replace_all(vec![image("a.jpg"), image("b.jpg")]);
        let before = pair.clone();

        assert!(!pair.replace_all(Vec::new()));
        assert_eq!(pair, before);
    }

    #[test]
    fn set_second_preserves_first() {
        let mut pair = SelectedImages::new();
        pair.replace_all(vec![image("a.jpg"), image("b.jpg")]);
        pair.set(Slot::Second, image("new.png"));

        assert_eq!(pair.base(), Some(&image("a.jpg")));
        assert_eq!(pair.overlay(), Some(&image("new.png")));
    }

    #[test]
    fn set_second_on_empty_pair_leaves_base_empty() {
        let mut pair = SelectedImages::new();
        pair.set(Slot::Second, image("new.png"));

        assert_eq!(pair.base(), None);
        assert_eq!(pair.len(), 1);
        assert!(!pair.is_complete());
    }

    #[test]
    fn other_slot_is_symmetric() {
        assert_eq!(Slot::First.other(), Slot::Second);
        assert_eq!(Slot::Second.other(), Slot::First);
    }

    #[test]
    fn display_name_uses_file_name() {
        assert_eq!(image("holiday.jpg").display_name(), "holiday.jpg");
    }
}
