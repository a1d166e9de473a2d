/// A single timed task parsed from the event log.
///
/// Records are immutable after ingestion; row and color assignment happen
/// in the layout pass and live in the scene, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    /// Start timestamp, in the input's time unit (microseconds by convention).
    pub start: f64,
    /// End timestamp, same unit as `start`. May equal or precede `start`;
    /// such tasks render as minimum-width bars rather than being rejected.
    pub end: f64,
    /// Opaque lane identifier (thread name, worker id, ...). Lanes are
    /// discovered from the input, never predeclared.
    pub lane: String,
    /// Display label with printf-style placeholders already substituted.
    pub label: String,
    /// Raw auxiliary argument columns, kept for the JSON export.
    pub args: Vec<String>,
    /// Optional overhead duration in the same unit as `start`/`end`.
    pub overhead: Option<f64>,
    /// Explicit display color, when the record carried one.
    pub explicit_color: Option<u32>,
    /// Original ingestion order. Stable sort tie-break and the fallback
    /// color key for records with an empty label.
    pub index: usize,
}

impl TaskRecord {
    pub fn new(
        start: f64,
        end: f64,
        lane: impl Into<String>,
        label: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            start,
            end,
            lane: lane.into(),
            label: label.into(),
            args: Vec::new(),
            overhead: None,
            explicit_color: None,
            index,
        }
    }

    /// Duration of the task; negative for degenerate records.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
