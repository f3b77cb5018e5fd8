use crate::{bar::CoolBar, item::ItemStore};
use coolbar_core::{ItemId, Surface};

/// How a row came to start where it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBreak {
    /// Row 0.  Its first item's wrap flag is insignificant.
    First,
    /// The first item carries `wrap = true`.
    Explicit,
    /// The previous row ran out of width.  Recomputed on every partition.
    Derived,
}

/// A run of items sharing a y coordinate and a height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub(crate) items: Vec<ItemId>,
    pub(crate) start: RowBreak,
}

impl Row {
    pub(crate) fn new(items: Vec<ItemId>, start: RowBreak) -> Self {
        Self { items, start }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn start(&self) -> RowBreak {
        self.start
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split `visual` into rows.
///
/// A row ends before an item whose wrap flag is set (unless it is the very
/// first item) and before an item whose minimum width would push the row past
/// `max_width`.  An item that overflows an empty row gets a row of its own.
pub(crate) fn partition(
    visual: &[ItemId],
    items: &ItemStore,
    max_width: Option<i32>,
) -> Vec<Row> {
    let mut runs: Vec<Vec<ItemId>> = Vec::new();
    let mut current: Vec<ItemId> = Vec::new();
    let mut row_width = 0;

    for (i, &id) in visual.iter().enumerate() {
        let item = &items[id];
        let width = item.minimum_width;
        let explicit = i > 0 && item.wrap;
        let overflow = max_width.is_some_and(|max| row_width + width > max);

        if explicit || overflow {
            if current.is_empty() {
                runs.push(vec![id]);
                row_width = 0;
            } else {
                runs.push(std::mem::replace(&mut current, vec![id]));
                row_width = width;
            }
        } else {
            current.push(id);
            row_width += width;
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs.into_iter()
        .enumerate()
        .map(|(index, run)| {
            let start = if index == 0 {
                RowBreak::First
            } else if items[run[0]].wrap {
                RowBreak::Explicit
            } else {
                RowBreak::Derived
            };
            Row::new(run, start)
        })
        .collect()
}

impl<S: Surface> CoolBar<S> {
    /// Re-partition the current visual order into rows no wider than
    /// `max_width` (`None` = unconstrained).  Only wrap flags survive from
    /// the previous partition.
    pub fn wrap_items(&mut self, max_width: Option<i32>) {
        let visual = self.items();
        self.rows = partition(&visual, &self.items, max_width);
        tracing::trace!(
            "wrapped {} items into {} rows (max width {:?})",
            visual.len(),
            self.rows.len(),
            max_width
        );
    }
}
