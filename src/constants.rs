//! Constants for the controls and the demo shell
//!
//! Centralizes magic numbers so the layout and timing behavior is
//! self-documenting.

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the demo title bar
pub const TITLE_BAR_HEIGHT: u16 = 2;

/// Height of the demo status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the select field's bordered value box
pub const FIELD_BOX_HEIGHT: u16 = 3;

/// Maximum number of dropdown entries visible at once
pub const DROPDOWN_MAX_VISIBLE: usize = 8;

/// Page size for PageUp/PageDown navigation in the table
pub const PAGE_SIZE: usize = 10;

/// Minimum rendered width of a table column
pub const MIN_COLUMN_WIDTH: u16 = 5;
