//! Layout geometry and palette shared by the scene builder and renderers.

// ── Canvas geometry ──────────────────────────────────────────────────────────

/// Total document width in pixels.
pub const WIDTH_PX: f32 = 1400.0;
/// Left margin reserved for lane labels.
pub const LEFT_MARGIN: f32 = 200.0;
/// Right overflow margin.
pub const RIGHT_MARGIN: f32 = 40.0;
/// Horizontal span available to task bars.
pub const DRAWABLE_WIDTH: f32 = WIDTH_PX - LEFT_MARGIN - RIGHT_MARGIN;

pub const ROW_HEIGHT: f32 = 20.0;
pub const ROW_PADDING: f32 = 6.0;
/// Vertical distance between consecutive row tops.
pub const ROW_PITCH: f32 = ROW_HEIGHT + ROW_PADDING;
/// Extra gap inserted between lane blocks.
pub const TRACK_SPACING: f32 = 12.0;
/// Height of the time ruler band at the top.
pub const HEADER_HEIGHT: f32 = 40.0;
pub const BOTTOM_MARGIN: f32 = 100.0;

/// Floor for rendered bar widths so instant tasks stay hoverable.
pub const MIN_BAR_WIDTH: f32 = 2.0;
/// Bars narrower than this get no inline text label.
pub const LABEL_MIN_BAR_PX: f32 = 40.0;
/// Inline bar labels are truncated to this many characters.
pub const LABEL_MAX_CHARS: usize = 30;

/// Number of intervals on the time ruler (ticks = intervals + 1).
pub const RULER_TICKS: usize = 8;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const LANE_HEADER_FILL: &str = "#f8f8f8";
pub const RULER_LINE: &str = "#eee";
