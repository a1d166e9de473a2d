use crate::model::TaskRecord;

/// Widening applied to a zero-width global range so the time→pixel mapping
/// never divides by zero (all tasks sharing one instant).
pub const RANGE_EPSILON: f64 = 1.0;

/// Affine mapping from the global time range to horizontal pixel positions.
///
/// The drawable span sits between a left margin reserved for lane labels
/// and a right overflow margin; `x` is monotonic in `t` and pins the range
/// endpoints to the margins exactly.
#[derive(Debug, Clone, Copy)]
pub struct TimeAxis {
    /// Global range start: minimum `start` over all records.
    pub start: f64,
    /// Global range end: maximum `end` over all records, widened by
    /// [`RANGE_EPSILON`] when it coincides with `start`.
    pub end: f64,
    left_margin: f32,
    drawable_width: f32,
}

impl TimeAxis {
    pub fn new(start: f64, end: f64, left_margin: f32, drawable_width: f32) -> Self {
        let end = if end > start { end } else { start + RANGE_EPSILON };
        Self {
            start,
            end,
            left_margin,
            drawable_width,
        }
    }

    /// Derive the axis from the full record set. `None` when there are no
    /// records (no meaningful range exists).
    pub fn from_records(
        records: &[TaskRecord],
        left_margin: f32,
        drawable_width: f32,
    ) -> Option<Self> {
        let first = records.first()?;
        let mut min_start = first.start;
        let mut max_end = first.end;
        for t in records {
            min_start = min_start.min(t.start);
            max_end = max_end.max(t.end);
        }
        Some(Self::new(min_start, max_end, left_margin, drawable_width))
    }

    /// Convert a timestamp to an x-pixel position.
    pub fn x(&self, t: f64) -> f32 {
        let rel = (t - self.start) / (self.end - self.start);
        self.left_margin + rel as f32 * self.drawable_width
    }

    /// Width of a bar spanning `[start, end]`, floored at `min_width` so
    /// zero and negative-duration tasks stay visible and hoverable.
    pub fn span_width(&self, start: f64, end: f64, min_width: f32) -> f32 {
        (self.x(end) - self.x(start)).max(min_width)
    }

    /// Evenly spaced tick timestamps across the range, `count + 1` values
    /// including both endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        (0..=count)
            .map(|i| self.start + (self.end - self.start) * i as f64 / count as f64)
            .collect()
    }
}
