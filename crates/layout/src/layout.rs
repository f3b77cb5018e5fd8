use crate::{bar::CoolBar, GRIPPER_INSET, GRIP_WIDTH, MARGIN_WIDTH};
use coolbar_core::{Rect, Surface};
use tracing::trace;

/// The smallest region to repaint after an item moved from `old` to `new`.
///
/// Cases run from the largest area to the smallest: a row change repaints
/// both positions plus the row separators, a height change repaints below
/// the shorter gripper, an x change repaints the strip between the two grips.
/// A width-only change needs nothing.
pub(crate) fn damage_for(old: Rect, new: Rect, row_spacing: i32) -> Option<Rect> {
    if old == new {
        return None;
    }
    if old.y != new.y {
        let mut damage = new.union(&old);
        damage.y -= row_spacing;
        damage.height += 2 * row_spacing;
        Some(damage)
    } else if old.height != new.height {
        let y = new.y + old.height.min(new.height) - GRIPPER_INSET;
        let bottom = new.bottom() + row_spacing;
        Some(Rect::new(
            old.x - MARGIN_WIDTH,
            y,
            old.width + MARGIN_WIDTH,
            bottom - y,
        ))
    } else if old.x != new.x {
        Some(Rect::new(
            old.x.min(new.x),
            old.y,
            (old.x - new.x).abs() + GRIP_WIDTH,
            old.height,
        ))
    } else {
        None
    }
}

impl<S: Surface> CoolBar<S> {
    /// Partition for the client width and give every item its bounds.
    ///
    /// Every item but the last in a row gets its requested width, clamped
    /// between its minimum and what the items to its right still leave over;
    /// the last item takes the rest.  Changed items are reported to the
    /// surface as damage.  Returns the height of the row stack.
    pub fn layout_items(&mut self) -> i32 {
        let width = self.surface.client_width();
        self.wrap_items(Some(width));
        let spacing = self.row_spacing();

        let mut y = 0;
        for (row_index, row) in self.rows.iter().enumerate() {
            let count = row.items.len();
            let row_height = row
                .items
                .iter()
                .map(|&id| self.items[id].height)
                .max()
                .unwrap_or(0);
            let mut available =
                width - row.items.iter().map(|&id| self.items[id].minimum_width).sum::<i32>();
            if row_index > 0 {
                y += spacing;
            }

            let mut x = 0;
            for (i, &id) in row.items.iter().enumerate() {
                let item = &mut self.items[id];
                let min = item.minimum_width;
                let mut new_width = available + min;
                if i + 1 < count {
                    new_width = new_width.min(item.requested_width).max(min);
                    available -= new_width - min;
                } else {
                    new_width = new_width.max(min);
                }

                let old = item.bounds;
                let new = Rect::new(x, y, new_width, row_height);
                if let Some(damage) = damage_for(old, new, spacing) {
                    trace!("item {id} {old:?} -> {new:?}, damage {damage:?}");
                    self.surface.redraw(damage);
                }
                item.bounds = new;
                x += new_width;
            }
            y += row_height;
        }
        y
    }

    /// Lay out and resize the surface to the resulting height.
    pub fn relayout(&mut self) {
        let height = self.layout_items();
        if height == self.surface.size().height {
            return;
        }
        trace!("relayout resizes surface to height {height}");
        self.in_relayout = true;
        if self.surface.set_height(height) {
            self.on_resize();
        }
        self.in_relayout = false;
    }

    /// The container changed size.  Resizes caused by our own relayout are
    /// ignored; that pass already laid the items out.
    pub fn on_resize(&mut self) {
        if self.in_relayout {
            trace!("ignoring resize raised by relayout");
            return;
        }
        self.layout_items();
    }
}
