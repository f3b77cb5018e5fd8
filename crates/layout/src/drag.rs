use crate::{bar::CoolBar, wrap::{Row, RowBreak}, GRIP_WIDTH, MARGIN_WIDTH};
use coolbar_core::{Cursor, Event, ItemId, Rect, Result, Surface, PRIMARY_BUTTON};
use tracing::debug;

/// Pointer interaction state.  Offsets only exist while a drag is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        item: ItemId,
        /// Pointer x at the previous event.
        mouse_x: i32,
        /// Pointer x relative to the item's left edge when the drag began.
        item_x_offset: i32,
    },
}

impl DragState {
    /// The item being dragged, if any.
    pub fn item(&self) -> Option<ItemId> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging { item, .. } => Some(item),
        }
    }
}

impl<S: Surface> CoolBar<S> {
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Feed one input event to the bar.
    ///
    /// For [`Event::Resize`] the surface must already report the new width.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Press { button, x, y } => self.on_press(button, x, y),
            Event::Move { x, y } => self.on_move(x, y),
            Event::Release { .. } => self.on_release(),
            Event::DoubleClick { x, y } => self.on_double_click(x, y),
            Event::Exit => self.on_exit(),
            Event::Resize { .. } => self.on_resize(),
        }
    }

    /// The item whose grip contains `(x, y)`.
    pub fn grabbed_item(&self, x: i32, y: i32) -> Option<ItemId> {
        for row in &self.rows {
            for &id in &row.items {
                let grip = self.items[id].grip();
                if grip.x > x {
                    break;
                }
                if grip.y > y {
                    return None;
                }
                if grip.contains(x, y) {
                    return Some(id);
                }
            }
        }
        None
    }

    fn on_press(&mut self, button: u8, x: i32, y: i32) {
        if self.locked || button != PRIMARY_BUTTON {
            return;
        }
        if let Some(item) = self.grabbed_item(x, y) {
            let item_x_offset = x - self.items[item].bounds.x;
            debug!("start dragging item {item}");
            self.drag = DragState::Dragging { item, mouse_x: x, item_x_offset };
            self.surface.set_cursor(Some(Cursor::Move));
        }
    }

    fn on_move(&mut self, x: i32, y: i32) {
        if self.locked {
            return;
        }
        let DragState::Dragging { item, mouse_x, item_x_offset } = self.drag else {
            let cursor = self.grabbed_item(x, y).map(|_| Cursor::ResizeHorizontal);
            self.surface.set_cursor(cursor);
            return;
        };

        let left_x = x - item_x_offset;
        let bounds = self.items[item].bounds;
        if y < bounds.y {
            self.shift_up(item, left_x);
        } else if y > bounds.bottom() {
            self.shift_down(item, left_x);
        } else if x < mouse_x {
            let distance = mouse_x.min(bounds.x + item_x_offset) - x;
            if distance > 0 {
                self.shift_left(item, distance);
            }
        } else if x > mouse_x {
            let distance = x - mouse_x.max(bounds.x + item_x_offset);
            if distance > 0 {
                self.shift_right(item, distance);
            }
        }

        if let DragState::Dragging { mouse_x, .. } = &mut self.drag {
            *mouse_x = x;
        }
    }

    fn on_release(&mut self) {
        if let Some(item) = self.drag.item() {
            debug!("stop dragging item {item}");
        }
        self.drag = DragState::Idle;
        self.surface.set_cursor(None);
    }

    fn on_exit(&mut self) {
        if self.drag == DragState::Idle {
            self.surface.set_cursor(None);
        }
    }

    /// Toggle an item between its minimum width, its preferred width and the
    /// widest it can get in its row.
    fn on_double_click(&mut self, x: i32, y: i32) {
        if self.locked {
            return;
        }
        self.drag = DragState::Idle;
        let Some(target) = self.grabbed_item(x, y) else {
            self.surface.set_cursor(None);
            return;
        };
        let Some((row, index)) = self.find_item(target) else {
            return;
        };
        let count = self.rows[row].items.len();
        if count < 2 {
            return;
        }

        let width = self.items[target].bounds.width;
        let others_minimum: i32 = self.rows[row]
            .items
            .iter()
            .filter(|&&id| id != target)
            .map(|&id| self.items[id].minimum_width)
            .sum();
        let max_width = self.surface.client_width() - others_minimum;
        let preferred = self.items[target].preferred.width;

        if width == max_width {
            debug!("double click collapses item {target}");
            let distance = width - self.items[target].minimum_width;
            if index + 1 < count {
                let right = self.rows[row].items[index + 1];
                self.shift_left(right, distance);
            } else {
                self.shift_right(target, distance);
            }
        } else if width < preferred {
            debug!("double click grows item {target} to its preferred width");
            let mut distance = preferred - width;
            if index + 1 < count {
                let right = self.rows[row].items[index + 1];
                self.shift_right(right, distance);
                distance = preferred - self.items[target].bounds.width;
            }
            if distance > 0 {
                self.shift_left(target, distance);
            }
        } else {
            debug!("double click maximizes item {target}");
            for i in 0..count {
                let id = self.rows[row].items[i];
                let item = &mut self.items[id];
                item.requested_width = if id == target { max_width } else { item.minimum_width };
            }
            self.layout_items();
        }
        self.surface.set_cursor(Some(Cursor::ResizeHorizontal));
    }

    // ── Structural moves ──────────────────────────────────────────────────────

    /// Drag `id`'s left edge left by up to `pixels`.  See [`Self::handle_event`]
    /// for the pointer-driven form.
    pub fn move_left(&mut self, id: ItemId, pixels: i32) -> Result<()> {
        self.get(id)?;
        self.shift_left(id, pixels);
        Ok(())
    }

    /// Drag `id`'s left edge right by up to `pixels`.
    pub fn move_right(&mut self, id: ItemId, pixels: i32) -> Result<()> {
        self.get(id)?;
        self.shift_right(id, pixels);
        Ok(())
    }

    /// Move `id` into the row above at `x`.
    pub fn move_up(&mut self, id: ItemId, x: i32) -> Result<()> {
        self.get(id)?;
        self.shift_up(id, x);
        Ok(())
    }

    /// Move `id` into the row below at `x`.
    pub fn move_down(&mut self, id: ItemId, x: i32) -> Result<()> {
        self.get(id)?;
        self.shift_down(id, x);
        Ok(())
    }

    /// Shift `id`'s left edge left by up to `pixels`, growing it and shrinking
    /// the items to its left, never below their minimums.
    pub(crate) fn shift_left(&mut self, id: ItemId, pixels: i32) {
        let Some((row, index)) = self.find_item(id) else {
            return;
        };
        if index == 0 || pixels <= 0 {
            return;
        }
        let bounds = self.items[id].bounds;
        let min_space_on_left: i32 = self.rows[row].items[..index]
            .iter()
            .map(|&other| self.items[other].minimum_width)
            .sum();
        let x = min_space_on_left.max(bounds.x - pixels);
        if x >= bounds.x {
            return;
        }

        let left = self.rows[row].items[index - 1];
        let left_bounds = self.items[left].bounds;
        let left_min = self.items[left].minimum_width;
        if left_bounds.x + left_min > x {
            self.shift_left(left, left_bounds.x + left_min - x);
        }
        let left_bounds = self.items[left].bounds;
        let left_width = (x - left_bounds.x).max(left_min);
        self.items[left].set_width(left_bounds.x, left_width);

        let x = left_bounds.x + left_width;
        self.items[id].set_width(x, bounds.right() - x);

        let damaged_width = bounds.x - x + GRIP_WIDTH;
        if damaged_width > GRIP_WIDTH {
            self.surface.redraw(Rect::new(x, bounds.y, damaged_width, bounds.height));
        }
    }

    /// Shift `id`'s left edge right by up to `pixels`, shrinking it and
    /// pushing the items to its right, never past the client width.
    pub(crate) fn shift_right(&mut self, id: ItemId, pixels: i32) {
        let Some((row, index)) = self.find_item(id) else {
            return;
        };
        if index == 0 || pixels <= 0 {
            return;
        }
        let bar_width = self.surface.client_width();
        let bounds = self.items[id].bounds;
        let min_space_on_right: i32 = self.rows[row].items[index..]
            .iter()
            .map(|&other| self.items[other].minimum_width)
            .sum();
        let x = (bar_width - min_space_on_right).min(bounds.x + pixels);
        if x <= bounds.x {
            return;
        }

        let width = if index + 1 == self.rows[row].items.len() {
            bar_width - x
        } else {
            let right = self.rows[row].items[index + 1];
            let right_x = self.items[right].bounds.x;
            let min = self.items[id].minimum_width;
            if x + min > right_x {
                self.shift_right(right, x + min - right_x);
            }
            self.items[right].bounds.x - x
        };
        self.items[id].set_width(x, width);

        let left = self.rows[row].items[index - 1];
        let left_x = self.items[left].bounds.x;
        self.items[left].set_width(left_x, x - left_x);

        self.surface.redraw(Rect::new(
            bounds.x - MARGIN_WIDTH,
            bounds.y,
            x - bounds.x + GRIP_WIDTH + MARGIN_WIDTH,
            bounds.height,
        ));
    }

    /// Move `id` into the row above, entering it at `x`.  Leaving a shared
    /// top row opens a new top row; the sole item of the top row stays put.
    pub(crate) fn shift_up(&mut self, id: ItemId, x: i32) {
        let Some((old_row, _)) = self.find_item(id) else {
            return;
        };
        let alone = self.rows[old_row].items.len() == 1;
        if alone && old_row == 0 {
            return;
        }
        debug!("move item {id} up from row {old_row}");

        self.remove_item_from_row(id, old_row);
        let old = self.items[id].bounds;
        self.surface.redraw(Rect::new(old.x, old.y, GRIP_WIDTH, old.height));

        let mut resize = alone;
        if old_row == 0 {
            self.items[id].wrap = true;
            self.rows.insert(0, Row::new(vec![id], RowBreak::First));
            resize = true;
        } else {
            self.insert_item_into_row(id, old_row - 1, x);
        }
        if resize {
            self.relayout();
        } else {
            self.layout_items();
        }
    }

    /// Move `id` into the row below, entering it at `x`.  Leaving a shared
    /// bottom row opens a new bottom row; the sole item of the bottom row
    /// stays put.
    pub(crate) fn shift_down(&mut self, id: ItemId, x: i32) {
        let Some((old_row, _)) = self.find_item(id) else {
            return;
        };
        let alone = self.rows[old_row].items.len() == 1;
        if alone && old_row + 1 == self.rows.len() {
            return;
        }
        debug!("move item {id} down from row {old_row}");

        // An emptied row is pruned, so the next row slides into its index.
        let new_row = if alone { old_row } else { old_row + 1 };
        self.remove_item_from_row(id, old_row);
        let old = self.items[id].bounds;
        self.surface.redraw(Rect::new(old.x, old.y, GRIP_WIDTH, old.height));

        let mut resize = alone;
        if new_row == self.rows.len() {
            self.items[id].wrap = true;
            self.rows.push(Row::new(vec![id], RowBreak::Explicit));
            resize = true;
        } else {
            self.insert_item_into_row(id, new_row, x);
        }
        if resize {
            self.relayout();
        } else {
            self.layout_items();
        }
    }

    /// Insert `id` into row `row_index` at pointer `x`, carving its width out
    /// of the neighbours.
    pub(crate) fn insert_item_into_row(&mut self, id: ItemId, row_index: usize, x: i32) {
        let bar_width = self.surface.client_width();
        let first = self.rows[row_index].items[0];
        let row_y = self.items[first].bounds.y;
        let mut x = x.max(0);

        let index = self.rows[row_index]
            .items
            .iter()
            .position(|&other| x < self.items[other].bounds.x)
            .unwrap_or(self.rows[row_index].items.len());
        if index == 0 {
            self.items[id].wrap = true;
            self.items[first].wrap = false;
        }
        self.rows[row_index].items.insert(index, id);

        if index > 0 {
            let left = self.rows[row_index].items[index - 1];
            let left_bounds = self.items[left].bounds;
            let left_min = self.items[left].minimum_width;
            let mut left_width = x - left_bounds.x;
            if left_width < left_min {
                x += left_min - left_width;
                left_width = left_min;
            }
            self.items[left].set_width(left_bounds.x, left_width);
        }

        let min = self.items[id].minimum_width;
        let height = self.items[id].bounds.height;
        if index + 1 < self.rows[row_index].items.len() {
            let right = self.rows[row_index].items[index + 1];
            let mut width = self.items[right].bounds.x - x;
            if width < min {
                self.shift_right(right, min - width);
                width = self.items[right].bounds.x - x;
            }
            self.items[id].bounds = Rect::new(x, row_y, width, height);
            if width < min {
                self.shift_left(id, min - width);
            }
        } else {
            let width = min.max(bar_width - x);
            self.items[id].bounds = Rect::new(x, row_y, width, height);
            if x + width > bar_width {
                self.shift_left(id, x + width - bar_width);
            }
        }

        // A full row cannot make room; the item keeps its minimum and the row
        // overflows until the next layout re-wraps it.
        let item = &mut self.items[id];
        item.bounds.width = item.bounds.width.max(item.minimum_width);
        item.requested_width = item.bounds.width;
        let bounds = item.bounds;
        self.surface.redraw(Rect::new(bounds.x, bounds.y, GRIP_WIDTH, bounds.height));
    }
}
