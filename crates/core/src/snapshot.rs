use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to an item owned by a bar.  Never reused after destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The displayed arrangement of a bar, suitable for save / restore.
///
/// - `order`: for each visual position, the creation index of the item there.
/// - `wrap_indices`: visual positions that begin a new row (never `0`).
/// - `sizes`: item sizes in visual order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemLayout {
    pub order:        Vec<usize>,
    pub wrap_indices: Vec<usize>,
    pub sizes:        Vec<Size>,
}

impl ItemLayout {
    /// Number of items the snapshot describes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
