//! Scene composition.
//!
//! Groups records by lane, packs each lane into rows, and lays everything
//! out on one canvas: lane headers first, then that lane's task boxes,
//! with lanes stacked in lexicographic order so output never depends on
//! map iteration order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::{self, Hsl};
use crate::layout::pack::pack_lane;
use crate::model::{TaskRecord, TimeAxis};
use crate::render::theme;

/// A positioned, colored task box.
#[derive(Debug, Clone)]
pub struct TaskBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub fill: Hsl,
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub lane: String,
    /// Row within the owning lane.
    pub row: usize,
    /// Row counted across all lanes above this one.
    pub row_global: usize,
}

/// Full-width band introducing a lane.
#[derive(Debug, Clone)]
pub struct LaneHeader {
    pub lane: String,
    pub y: f32,
    pub h: f32,
}

/// One drawable element, in paint order.
#[derive(Debug, Clone)]
pub enum Item {
    LaneHeader(LaneHeader),
    Task(TaskBox),
}

/// The lane→row-range index carried into the rendered document.
///
/// The viewer script drives collapse/expand from this data instead of
/// re-deriving lane membership by scanning the markup.
#[derive(Debug, Clone, Serialize)]
pub struct LaneBlock {
    pub lane: String,
    /// y of the lane's header band.
    pub top: f32,
    /// y where the next lane (or the bottom margin) begins.
    pub bottom: f32,
    /// Rows the lane occupies.
    pub rows: usize,
    /// Cumulative row count of all lanes above this one.
    pub start_row: usize,
}

/// The composed drawable scene.
#[derive(Debug, Clone)]
pub struct Scene {
    pub axis: TimeAxis,
    pub items: Vec<Item>,
    pub blocks: Vec<LaneBlock>,
    pub width: f32,
    pub height: f32,
}

impl Scene {
    /// Compose the scene for a set of records. `None` when there are no
    /// records: an empty input produces no artifact, not an empty canvas.
    pub fn build(records: &[TaskRecord]) -> Option<Scene> {
        let axis = TimeAxis::from_records(records, theme::LEFT_MARGIN, theme::DRAWABLE_WIDTH)?;

        // BTreeMap gives the lexicographic lane order for free.
        let mut lanes: BTreeMap<&str, Vec<&TaskRecord>> = BTreeMap::new();
        for t in records {
            lanes.entry(t.lane.as_str()).or_default().push(t);
        }

        let mut items = Vec::with_capacity(records.len() + lanes.len());
        let mut blocks = Vec::with_capacity(lanes.len());
        let mut row_offset = 0usize;

        for (lane_idx, (lane, lane_records)) in lanes.iter().enumerate() {
            let layout = pack_lane(lane_records);
            let header_y = lane_y(row_offset, 0, lane_idx);

            items.push(Item::LaneHeader(LaneHeader {
                lane: (*lane).to_string(),
                y: header_y,
                h: theme::ROW_PITCH,
            }));

            for packed in &layout.tasks {
                let t = packed.record;
                let x = axis.x(t.start);
                let w = axis.span_width(t.start, t.end, theme::MIN_BAR_WIDTH);
                items.push(Item::Task(TaskBox {
                    x,
                    y: lane_y(row_offset, packed.row, lane_idx),
                    w,
                    h: theme::ROW_HEIGHT,
                    fill: color::resolve(t),
                    label: t.label.clone(),
                    start: t.start,
                    end: t.end,
                    lane: (*lane).to_string(),
                    row: packed.row,
                    row_global: row_offset + packed.row,
                }));
            }

            blocks.push(LaneBlock {
                lane: (*lane).to_string(),
                top: header_y,
                bottom: 0.0, // patched below once the next lane's top is known
                rows: layout.rows,
                start_row: row_offset,
            });
            row_offset += layout.rows;
        }

        let total_rows = row_offset;
        let height = theme::HEADER_HEIGHT
            + total_rows as f32 * theme::ROW_PITCH
            + blocks.len() as f32 * theme::TRACK_SPACING
            + theme::BOTTOM_MARGIN;

        for i in 0..blocks.len() {
            blocks[i].bottom = if i + 1 < blocks.len() {
                blocks[i + 1].top
            } else {
                height
            };
        }

        Some(Scene {
            axis,
            items,
            blocks,
            width: theme::WIDTH_PX,
            height,
        })
    }
}

/// Vertical position of row `row` in the lane whose rows start at global
/// row `row_offset`, with `lane_idx` lanes stacked above it. The lane's
/// header band shares the y of its row 0; headers are emitted before their
/// tasks so the tasks paint over the band.
fn lane_y(row_offset: usize, row: usize, lane_idx: usize) -> f32 {
    theme::HEADER_HEIGHT
        + (row_offset + row) as f32 * theme::ROW_PITCH
        + lane_idx as f32 * theme::TRACK_SPACING
}
