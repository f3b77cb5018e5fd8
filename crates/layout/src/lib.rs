//! Layout and drag engine for a cool bar.
//!
//! A cool bar arranges resizable, reorderable items into rows inside a fixed
//! width container.  This crate owns all of the geometry:
//! - item registry (creation order vs visual order)
//! - row partitioning (`wrap_items`) and row layout (`layout_items`)
//! - the pointer-driven drag / resize controller
//! - save / restore of the arrangement
//! - the paint plan a renderer draws grippers and separators from
//!
//! The container is abstracted behind [`coolbar_core::Surface`]; nothing here
//! talks to a windowing system.

pub mod bar;
pub mod drag;
pub mod item;
pub mod layout;
pub mod paint;
pub mod persist;
pub mod surface;
pub mod wrap;

pub use bar::CoolBar;
pub use drag::DragState;
pub use item::{Item, ItemSpec};
pub use paint::{PaintOp, Shade};
pub use surface::RecordingSurface;
pub use wrap::{Row, RowBreak};

/// Space on each side of the grabber.
pub const MARGIN_WIDTH: i32 = 4;
/// Width of the grabber line pair itself.
pub const GRABBER_WIDTH: i32 = 2;
/// Width of the grip region at the left edge of every item.  Also the
/// smallest minimum width an item can have.
pub const GRIP_WIDTH: i32 = 2 * MARGIN_WIDTH + GRABBER_WIDTH;
/// Vertical gap between rows (not used by flat bars).
pub const ROW_SPACING: i32 = 2;
/// Size reported by `compute_size` for an empty bar.
pub const DEFAULT_WIDTH: i32 = 64;
pub const DEFAULT_HEIGHT: i32 = 64;
/// Distance from the bottom of an item to the bottom of its gripper.
pub const GRIPPER_INSET: i32 = 3;
