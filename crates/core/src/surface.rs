use crate::geometry::{Rect, Size};

/// Pointer shapes a bar asks its surface to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Hovering over a grip: horizontal resize arrows.
    ResizeHorizontal,
    /// Dragging an item: four-way move arrows.
    Move,
}

/// The container a bar is laid out in.
///
/// A bar never touches a windowing system directly: it reads its available
/// width from here and reports everything it wants repainted.  All calls are
/// fire-and-forget.
pub trait Surface {
    /// Width of the area items may occupy.
    fn client_width(&self) -> i32;

    /// Current outer size of the container.
    fn size(&self) -> Size;

    /// Resize the container to `height`, keeping its width.
    ///
    /// Returns `true` when the resize synchronously produced a resize
    /// notification that would otherwise be delivered back to the bar.
    fn set_height(&mut self, height: i32) -> bool;

    /// Request a repaint of `area`.
    fn redraw(&mut self, area: Rect);

    /// Request a repaint of the whole container.
    fn redraw_all(&mut self) {
        let size = self.size();
        self.redraw(Rect::new(0, 0, size.width, size.height));
    }

    /// Show `cursor`, or the container's default cursor for `None`.
    fn set_cursor(&mut self, _cursor: Option<Cursor>) {}
}
