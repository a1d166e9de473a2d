//! Structured-document export.
//!
//! A data-only view of the parsed records: the global time range and each
//! lane's tasks in ingestion order. Deliberately layout-free; rows and
//! pixel coordinates belong to the visual document.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color;
use crate::model::TaskRecord;

#[derive(Debug, Serialize)]
pub struct TraceDoc {
    pub global_start: f64,
    pub global_end: f64,
    pub lanes: Vec<LaneDoc>,
}

#[derive(Debug, Serialize)]
pub struct LaneDoc {
    pub id: String,
    pub tasks: Vec<TaskDoc>,
}

#[derive(Debug, Serialize)]
pub struct TaskDoc {
    pub start: f64,
    pub end: f64,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub overhead_duration_us: Option<f64>,
    /// The explicit color integer, when the record carried one.
    pub color: Option<u32>,
    /// The resolved display color as a CSS string.
    pub fill: String,
}

/// Build the export document. `None` when there are no records.
pub fn document(records: &[TaskRecord]) -> Option<TraceDoc> {
    let first = records.first()?;
    let mut global_start = first.start;
    let mut global_end = first.end;

    let mut lanes: BTreeMap<&str, Vec<&TaskRecord>> = BTreeMap::new();
    for t in records {
        global_start = global_start.min(t.start);
        global_end = global_end.max(t.end);
        lanes.entry(t.lane.as_str()).or_default().push(t);
    }

    let lanes = lanes
        .into_iter()
        .map(|(id, tasks)| LaneDoc {
            id: id.to_string(),
            tasks: tasks
                .into_iter()
                .map(|t| TaskDoc {
                    start: t.start,
                    end: t.end,
                    label: t.label.clone(),
                    args: t.args.clone(),
                    overhead_duration_us: t.overhead,
                    color: t.explicit_color,
                    fill: color::resolve(t).css(),
                })
                .collect(),
        })
        .collect();

    Some(TraceDoc {
        global_start,
        global_end,
        lanes,
    })
}

/// Render the document as pretty-printed JSON.
pub fn render(records: &[TaskRecord]) -> Option<serde_json::Result<String>> {
    document(records).map(|doc| serde_json::to_string_pretty(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_document() {
        assert!(document(&[]).is_none());
    }

    #[test]
    fn range_and_lane_grouping() {
        let records = vec![
            TaskRecord::new(5.0, 20.0, "T2", "b", 0),
            TaskRecord::new(1.0, 4.0, "T1", "a", 1),
            TaskRecord::new(8.0, 30.0, "T2", "c", 2),
        ];
        let doc = document(&records).unwrap();
        assert_eq!(doc.global_start, 1.0);
        assert_eq!(doc.global_end, 30.0);
        assert_eq!(doc.lanes.len(), 2);
        assert_eq!(doc.lanes[0].id, "T1");
        assert_eq!(doc.lanes[1].id, "T2");
        // Tasks keep ingestion order within their lane.
        let labels: Vec<&str> = doc.lanes[1].tasks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["b", "c"]);
    }

    #[test]
    fn no_layout_fields_in_export() {
        let records = vec![TaskRecord::new(0.0, 1.0, "T1", "a", 0)];
        let json = render(&records).unwrap().unwrap();
        assert!(json.contains("\"global_start\""));
        assert!(!json.contains("\"row\""));
        assert!(!json.contains("\"x\""));
    }

    #[test]
    fn optional_fields_serialize_predictably() {
        let mut t = TaskRecord::new(0.0, 1.0, "T1", "a", 0);
        t.overhead = Some(3.5);
        t.explicit_color = Some(255);
        t.args = vec!["7".into()];
        let json = render(&[t]).unwrap().unwrap();
        assert!(json.contains("\"overhead_duration_us\": 3.5"));
        assert!(json.contains("\"color\": 255"));
        assert!(json.contains("\"args\""));

        let bare = TaskRecord::new(0.0, 1.0, "T1", "a", 0);
        let json = render(&[bare]).unwrap().unwrap();
        assert!(json.contains("\"overhead_duration_us\": null"));
        assert!(!json.contains("\"args\""));
    }

    #[test]
    fn fill_matches_color_resolver() {
        let records = vec![TaskRecord::new(0.0, 1.0, "T1", "work", 0)];
        let doc = document(&records).unwrap();
        assert_eq!(
            doc.lanes[0].tasks[0].fill,
            crate::color::color_from_key("work").css()
        );
    }
}
