//! Per-lane row packing.
//!
//! Greedy interval partitioning: tasks sorted by start time go into the
//! first row whose previous occupant has already finished, opening a new
//! row only when every existing one is still busy. For non-overlapping
//! placement this uses the minimum possible number of rows.

use crate::model::TaskRecord;

/// A task with its assigned row inside one lane.
#[derive(Debug, Clone, Copy)]
pub struct PackedTask<'a> {
    pub record: &'a TaskRecord,
    /// Row index within the lane, contiguous from 0.
    pub row: usize,
}

/// Packing result for a single lane.
#[derive(Debug, Clone)]
pub struct LaneLayout<'a> {
    /// Tasks in placement order: `(start, end, index)` ascending.
    pub tasks: Vec<PackedTask<'a>>,
    /// Number of rows the lane occupies.
    pub rows: usize,
}

/// Assign every task in one lane a row such that no two tasks sharing a
/// row overlap in time.
///
/// Deterministic: ties on `(start, end)` break on the record's ingestion
/// index, so reordered input produces identical assignments. Zero and
/// negative-duration tasks need no special casing; an interval with
/// `end <= start` immediately frees its row again.
pub fn pack_lane<'a>(records: &[&'a TaskRecord]) -> LaneLayout<'a> {
    let mut sorted: Vec<&TaskRecord> = records.to_vec();
    sorted.sort_by(|a, b| {
        a.start
            .total_cmp(&b.start)
            .then(a.end.total_cmp(&b.end))
            .then(a.index.cmp(&b.index))
    });

    // End time of the last task placed in each row.
    let mut row_ends: Vec<f64> = Vec::new();
    let mut tasks = Vec::with_capacity(sorted.len());

    for record in sorted {
        let row = match row_ends.iter().position(|&end| end <= record.start) {
            Some(r) => {
                row_ends[r] = record.end;
                r
            }
            None => {
                row_ends.push(record.end);
                row_ends.len() - 1
            }
        };
        tasks.push(PackedTask { record, row });
    }

    LaneLayout {
        tasks,
        rows: row_ends.len(),
    }
}
