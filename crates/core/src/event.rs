use serde::{Deserialize, Serialize};

/// Button number of the primary (usually left) pointer button.
pub const PRIMARY_BUTTON: u8 = 1;

/// Input delivered to a bar by its embedding container.
///
/// Coordinates are relative to the container's client area.  The same enum
/// doubles as the scripted gesture format of the config file:
///
/// ```toml
/// [[script]]
/// kind   = "press"
/// button = 1
/// x      = 3
/// y      = 4
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    // ── Pointer ───────────────────────────────────────────────────────────────
    /// A pointer button went down.
    Press { button: u8, x: i32, y: i32 },
    /// The pointer moved (with or without a button held).
    Move { x: i32, y: i32 },
    /// A pointer button went up.  Always ends a drag.
    Release { button: u8, x: i32, y: i32 },
    /// Second click of a double click.
    DoubleClick { x: i32, y: i32 },
    /// The pointer left the container.
    Exit,

    // ── Container ─────────────────────────────────────────────────────────────
    /// The container's client width changed.
    Resize { width: i32 },
}
