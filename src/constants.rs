//! Application-wide constants

/// Classic table cell size at scale 1.0 (logical pixels)
pub const CELL_SIZE: f32 = 56.0;

/// Classic table dimensions in cells (18 groups, 7 periods + 2 f-block rows + spacer)
pub const TABLE_COLS: u16 = 18;
pub const TABLE_ROWS: u16 = 10;

/// Classic view scale bounds
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 5.0;

/// Zoom step applied by the toolbar buttons and the `+`/`-` keys
pub const ZOOM_STEP: f32 = 1.25;

/// Pan step applied by the arrow keys (logical pixels)
pub const PAN_STEP: f32 = 48.0;

/// Classic view margins; the end and bottom margins reserve room for the
/// category legend and footer
pub const MARGIN_START: f32 = 16.0;
pub const MARGIN_END: f32 = 250.0;
pub const MARGIN_TOP: f32 = 16.0;
pub const MARGIN_BOTTOM: f32 = 250.0;

/// Element tile size in the scrolling grid view
pub const TILE_SIZE: u16 = 96;

/// Maximum width for responsive grid layout
pub const MAX_GRID_WIDTH: f32 = 1600.0;

/// Maximum number of search results to display
pub const MAX_RESULTS: usize = 100;
