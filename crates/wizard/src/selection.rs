use std::collections::BTreeSet;

use shared::domain::{Relation, Theme};

/// Multi-select set of tags. Toggling a present tag removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet<T: Ord> {
    tags: BTreeSet<T>,
}

pub type ThemeSelection = TagSet<Theme>;
pub type RelationSelection = TagSet<Relation>;

impl<T: Ord> Default for TagSet<T> {
    fn default() -> Self {
        Self {
            tags: BTreeSet::new(),
        }
    }
}

impl<T: Ord + Copy> TagSet<T> {
    /// Returns whether the tag is selected after the toggle.
    pub fn toggle(&mut self, tag: T) -> bool {
        if self.tags.remove(&tag) {
            false
        } else {
            self.tags.insert(tag);
            true
        }
    }

    pub fn contains(&self, tag: T) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.tags.iter().copied()
    }
}

impl<T: Ord + Copy> FromIterator<T> for TagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        for tag in iter {
            set.tags.insert(tag);
        }
        set
    }
}
