use coolbar_core::{Cursor, Rect, Size, Surface};

/// In-memory [`Surface`] that records everything a bar asks of it.
///
/// Used by the demo binary and by tests; a real embedding forwards the same
/// calls to its windowing system.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size:         Size,
    damage:       Vec<Rect>,
    cursor:       Option<Cursor>,
    resize_count: usize,
    /// Report every height change as a synchronous resize notification.
    notify:       bool,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Make `set_height` report a synchronous resize notification, the way
    /// toolkits that deliver resize events inline behave.
    #[must_use]
    pub fn notifying(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    /// Change the client width.  The bar must be told with `on_resize`.
    pub fn set_width(&mut self, width: i32) {
        self.size.width = width;
    }

    /// Damage recorded since the last `take_damage`, in request order.
    pub fn damage(&self) -> &[Rect] {
        &self.damage
    }

    pub fn take_damage(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.damage)
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Number of height changes requested so far.
    pub fn resize_count(&self) -> usize {
        self.resize_count
    }
}

impl Surface for RecordingSurface {
    fn client_width(&self) -> i32 {
        self.size.width
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_height(&mut self, height: i32) -> bool {
        if self.size.height == height {
            return false;
        }
        self.size.height = height;
        self.resize_count += 1;
        self.notify
    }

    fn redraw(&mut self, area: Rect) {
        if !area.is_empty() {
            self.damage.push(area);
        }
    }

    fn set_cursor(&mut self, cursor: Option<Cursor>) {
        self.cursor = cursor;
    }
}
