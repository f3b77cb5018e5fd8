use crate::{bar::CoolBar, MARGIN_WIDTH};
use coolbar_core::{Point, Rect, Surface};

/// Vertical trim between an item's edges and its gripper.
const GRABBER_TRIM: i32 = 2;

/// Which of the two system bevel colours a line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Shadow,
    Highlight,
}

/// One primitive of the bar's decoration.  Renderers draw these in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOp {
    /// Outline of a grabber, drawn in the shadow colour.
    Gripper { area: Rect },
    Line { from: Point, to: Point, shade: Shade },
}

impl PaintOp {
    fn line(from: (i32, i32), to: (i32, i32), shade: Shade) -> Self {
        PaintOp::Line {
            from: Point::new(from.0, from.1),
            to:   Point::new(to.0, to.1),
            shade,
        }
    }
}

impl<S: Surface> CoolBar<S> {
    /// Decoration for the part of the bar inside `clip`.
    ///
    /// Items outside the clip are skipped.  Row separators are always
    /// emitted since they span the whole width.
    pub fn paint_plan(&self, clip: Rect) -> Vec<PaintOp> {
        let mut ops = Vec::new();
        let stop_x = self.surface.client_width();

        for (row_index, row) in self.rows.iter().enumerate() {
            let mut bounds = Rect::default();
            for (i, &id) in row.items.iter().enumerate() {
                bounds = self.items[id].bounds;
                if !clip.intersects(&bounds) {
                    continue;
                }

                if !self.locked {
                    let x = bounds.x + MARGIN_WIDTH;
                    let top = bounds.y + GRABBER_TRIM;
                    let height = bounds.height - 2 * GRABBER_TRIM - 1;
                    ops.push(PaintOp::Gripper { area: Rect::new(x, top, 2, height) });
                    ops.push(PaintOp::line((x, top + 1), (x, top + height - 1), Shade::Highlight));
                    ops.push(PaintOp::line((x, top), (x + 1, top), Shade::Highlight));
                }

                if !self.flat && i != 0 {
                    let bottom = bounds.bottom() - 1;
                    ops.push(PaintOp::line((bounds.x, bounds.y), (bounds.x, bottom), Shade::Shadow));
                    ops.push(PaintOp::line((bounds.x + 1, bounds.y), (bounds.x + 1, bottom), Shade::Highlight));
                }
            }

            if !self.flat && row_index + 1 < self.rows.len() {
                let y = bounds.bottom();
                ops.push(PaintOp::line((0, y), (stop_x, y), Shade::Shadow));
                ops.push(PaintOp::line((0, y + 1), (stop_x, y + 1), Shade::Highlight));
            }
        }
        ops
    }
}
