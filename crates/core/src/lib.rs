pub mod error;
pub mod event;
pub mod geometry;
pub mod snapshot;
pub mod surface;

pub use error::{CoolBarError, Result};
pub use event::{Event, PRIMARY_BUTTON};
pub use geometry::{Point, Rect, Size};
pub use snapshot::{ItemId, ItemLayout};
pub use surface::{Cursor, Surface};
