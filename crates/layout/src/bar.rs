use crate::{
    drag::DragState,
    item::{Item, ItemSpec, ItemStore},
    wrap::{Row, RowBreak},
    DEFAULT_HEIGHT, DEFAULT_WIDTH, GRIP_WIDTH, ROW_SPACING,
};
use coolbar_config::BarConfig;
use coolbar_core::{CoolBarError, ItemId, Rect, Result, Size, Surface};
use tracing::debug;

/// A bar of cool items laid out on a [`Surface`].
///
/// Items are kept twice: `creation` lists ids in creation order (the order
/// external callers index by) and `rows` holds them in visual order.  Both
/// always hold the same set of ids.
#[derive(Debug)]
pub struct CoolBar<S> {
    pub(crate) surface:     S,
    pub(crate) items:       ItemStore,
    pub(crate) creation:    Vec<ItemId>,
    pub(crate) rows:        Vec<Row>,
    pub(crate) drag:        DragState,
    pub(crate) flat:        bool,
    pub(crate) locked:      bool,
    pub(crate) in_dispose:  bool,
    pub(crate) in_relayout: bool,
    next_id:                u64,
}

impl<S: Surface> CoolBar<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            items:       ItemStore::default(),
            creation:    Vec::new(),
            rows:        Vec::new(),
            drag:        DragState::Idle,
            flat:        false,
            locked:      false,
            in_dispose:  false,
            in_relayout: false,
            next_id:     0,
        }
    }

    /// Build a bar from the config file's `[bar]` and `[[items]]` sections
    /// and lay it out once.
    pub fn from_config(surface: S, config: &BarConfig) -> Result<Self> {
        let mut bar = Self::new(surface).with_flat(config.bar.flat);
        for (index, item) in config.items.iter().enumerate() {
            bar.create_item(ItemSpec::from(item), index)?;
        }
        bar.set_locked(config.bar.locked);
        bar.relayout();
        Ok(bar)
    }

    /// Flat bars have no row spacing and draw no separators.
    #[must_use]
    pub fn with_flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn is_flat(&self) -> bool {
        self.flat
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub(crate) fn row_spacing(&self) -> i32 {
        if self.flat { 0 } else { ROW_SPACING }
    }

    // ── Registry ──────────────────────────────────────────────────────────────

    /// Add an item at `creation_index` (`0..=item_count`).  Visually it is
    /// appended to the end of the last row.
    pub fn create_item(&mut self, spec: ItemSpec, creation_index: usize) -> Result<ItemId> {
        if self.in_dispose {
            return Err(CoolBarError::InvalidArgument("bar is disposed".into()));
        }
        let len = self.creation.len();
        if creation_index > len {
            return Err(CoolBarError::InvalidRange { index: creation_index, len });
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;
        let item = Item::new(spec);
        debug!("create item {id} '{}' at creation index {creation_index}", item.label);
        self.items.insert(id, item);

        match self.rows.last_mut() {
            None => self.rows.push(Row::new(vec![id], RowBreak::First)),
            Some(row) => {
                // An ideal item giving up the last slot snaps back to its
                // preferred size.
                if let Some(&last) = row.items.last() {
                    let last = &mut self.items[last];
                    if last.ideal {
                        last.bounds.width = last.preferred.width;
                        last.bounds.height = last.preferred.height;
                        last.height = last.preferred.height;
                        last.requested_width = last.preferred.width;
                    }
                }
                row.items.push(id);
            }
        }
        self.creation.insert(creation_index, id);
        self.layout_items();
        Ok(id)
    }

    /// Remove an item.  Its width goes to its row neighbour and empty rows
    /// disappear.  Unknown items and calls during teardown are no-ops.
    pub fn destroy_item(&mut self, id: ItemId) -> Result<()> {
        if self.in_dispose {
            return Ok(());
        }
        let Some((row, _)) = self.find_item(id) else {
            return Ok(());
        };
        debug!("destroy item {id}");

        let bounds = self.items[id].bounds;
        self.remove_item_from_row(id, row);
        self.creation.retain(|&other| other != id);
        self.items.remove(id);
        if self.drag.item() == Some(id) {
            self.drag = DragState::Idle;
        }

        self.surface.redraw(Rect::new(bounds.x, bounds.y, GRIP_WIDTH, bounds.height));
        self.relayout();
        Ok(())
    }

    /// Drop every item without repairing rows; the bar is unusable afterwards.
    pub fn dispose(&mut self) {
        self.in_dispose = true;
        debug!("dispose bar with {} items", self.creation.len());
        self.drag = DragState::Idle;
        self.rows.clear();
        self.creation.clear();
        self.items.clear();
        self.surface.set_cursor(None);
    }

    pub fn is_disposed(&self) -> bool {
        self.in_dispose
    }

    pub fn item_count(&self) -> usize {
        self.creation.len()
    }

    /// The item created at `creation_index`.
    pub fn item(&self, creation_index: usize) -> Result<ItemId> {
        self.creation
            .get(creation_index)
            .copied()
            .ok_or(CoolBarError::InvalidRange { index: creation_index, len: self.creation.len() })
    }

    /// All items in their current visual order.
    pub fn items(&self) -> Vec<ItemId> {
        self.rows.iter().flat_map(|row| row.items.iter().copied()).collect()
    }

    /// The item currently displayed at visual position `index`.
    pub fn item_at_visual(&self, index: usize) -> Result<ItemId> {
        self.rows
            .iter()
            .flat_map(|row| row.items.iter().copied())
            .nth(index)
            .ok_or(CoolBarError::InvalidRange { index, len: self.creation.len() })
    }

    /// Visual position of `id`.
    pub fn visual_index_of(&self, id: ItemId) -> Result<usize> {
        self.get(id)?;
        self.rows
            .iter()
            .flat_map(|row| row.items.iter())
            .position(|&other| other == id)
            .ok_or(CoolBarError::Disposed(id))
    }

    pub fn get(&self, id: ItemId) -> Result<&Item> {
        self.items.get(id).ok_or(CoolBarError::Disposed(id))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// `(row, index in row)` of `id`.
    pub(crate) fn find_item(&self, id: ItemId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.items.iter().position(|&other| other == id).map(|i| (r, i))
        })
    }

    /// Take `id` out of row `row_index`, handing its width to a neighbour.
    ///
    /// The left neighbour grows over the gap; if `id` was first in the row
    /// the new first item grows leftwards to x = 0.  An emptied row is pruned.
    pub(crate) fn remove_item_from_row(&mut self, id: ItemId, row_index: usize) {
        let Some(index) = self.rows[row_index].items.iter().position(|&other| other == id) else {
            return;
        };
        let removed = self.items[id].bounds;
        self.items[id].wrap = false;

        let row = &mut self.rows[row_index];
        row.items.remove(index);
        if row.items.is_empty() {
            self.rows.remove(row_index);
            return;
        }

        let first = row.items[0];
        self.items[first].wrap = true;
        if index == 0 {
            let first = &mut self.items[first];
            let bounds = first.bounds;
            first.set_width(0, bounds.right());
            self.surface.redraw(Rect::new(bounds.x, bounds.y, GRIP_WIDTH, bounds.height));
        } else {
            let previous = &mut self.items[row.items[index - 1]];
            let bounds = previous.bounds;
            previous.set_width(bounds.x, bounds.width + removed.width);
        }
    }

    // ── Item properties ───────────────────────────────────────────────────────

    /// Set an item's size (width clamped to its minimum) and relayout.
    pub fn set_size(&mut self, id: ItemId, size: Size) -> Result<()> {
        self.get(id)?;
        self.items[id].apply_size(size);
        self.relayout();
        Ok(())
    }

    /// Set the size the item wants when it has room.  Marks the item ideal.
    pub fn set_preferred_size(&mut self, id: ItemId, size: Size) -> Result<()> {
        self.get(id)?;
        let item = &mut self.items[id];
        item.ideal = true;
        item.preferred = Size::new(size.width.max(item.minimum_width), size.height.max(0));
        Ok(())
    }

    /// Change an item's minimum width (raised to the grip width) and relayout.
    pub fn set_minimum_width(&mut self, id: ItemId, width: i32) -> Result<()> {
        self.get(id)?;
        let item = &mut self.items[id];
        item.minimum_width = width.max(GRIP_WIDTH);
        item.requested_width = item.requested_width.max(item.minimum_width);
        item.preferred.width = item.preferred.width.max(item.minimum_width);
        self.relayout();
        Ok(())
    }

    // ── Lock ──────────────────────────────────────────────────────────────────

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// A locked bar ignores drag and double-click gestures and hides its
    /// grippers.  Programmatic layout keeps working.
    pub fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            self.surface.redraw_all();
        }
        self.locked = locked;
        if locked {
            self.drag = DragState::Idle;
        }
    }

    // ── Size negotiation ──────────────────────────────────────────────────────

    /// Size the bar wants when laid out within `width_hint` (`None` =
    /// unconstrained) using preferred sizes.  Hints override the result.
    pub fn compute_size(&mut self, width_hint: Option<i32>, height_hint: Option<i32>) -> Size {
        self.wrap_items(width_hint);
        let spacing = self.row_spacing();
        let (mut width, mut height) = (0, 0);
        for (index, row) in self.rows.iter().enumerate() {
            let row_width: i32 = row.items.iter().map(|&id| self.items[id].preferred.width).sum();
            let row_height = row.items.iter().map(|&id| self.items[id].preferred.height).max().unwrap_or(0);
            height += row_height;
            if index > 0 {
                height += spacing;
            }
            width = width.max(row_width);
        }
        let current = self.surface.client_width();
        self.wrap_items(Some(current));

        if width == 0 {
            width = DEFAULT_WIDTH;
        }
        if height == 0 {
            height = DEFAULT_HEIGHT;
        }
        Size::new(width_hint.unwrap_or(width), height_hint.unwrap_or(height))
    }
}
