//! Style pool for deduplication

use super::Style;
use ahash::AHashMap;

/// Per-sheet table of unique styles.
///
/// A budget sheet reuses a handful of looks (header, bordered money cell,
/// note text) across hundreds of cells; cells store an index into this pool.
/// Index 0 is always the default style.
#[derive(Debug)]
pub struct StylePool {
    styles: Vec<Style>,
    index_map: AHashMap<u64, Vec<u32>>,
}

fn style_hash(style: &Style) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = ahash::AHasher::default();
    style.hash(&mut hasher);
    hasher.finish()
}

impl StylePool {
    pub fn new() -> Self {
        let mut pool = Self {
            styles: Vec::with_capacity(32),
            index_map: AHashMap::with_capacity(32),
        };
        pool.get_or_insert(Style::default());
        pool
    }

    /// Index of an identical style, inserting it first if it is new
    pub fn get_or_insert(&mut self, style: Style) -> u32 {
        let bucket = self.index_map.entry(style_hash(&style)).or_default();
        if let Some(&idx) = bucket
            .iter()
            .find(|&&idx| self.styles[idx as usize] == style)
        {
            return idx;
        }

        let idx = self.styles.len() as u32;
        bucket.push(idx);
        self.styles.push(style);
        idx
    }

    pub fn get(&self, index: u32) -> Option<&Style> {
        self.styles.get(index as usize)
    }

    /// Style at `index`, or the default style for an unknown index
    pub fn resolve(&self, index: u32) -> &Style {
        self.styles
            .get(index as usize)
            .unwrap_or(&self.styles[0])
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True when only the default style is present
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Style)> {
        self.styles.iter().enumerate().map(|(i, s)| (i as u32, s))
    }
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}
