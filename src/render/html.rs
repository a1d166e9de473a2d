//! Visual-document rendering.
//!
//! Emits one self-contained HTML file: inline CSS, an SVG scene, and a
//! small viewer script. The script is handed the lane index computed by
//! the scene builder (`LANE_BLOCKS`) and drives collapse/expand from the
//! `data-lane` tags stamped on every drawable item, so view-time behavior
//! never re-derives lane membership from the markup.

use std::fmt::Write as _;

use crate::layout::{Item, Scene};
use crate::render::theme;

/// Render the scene as a standalone HTML document. `source` names the
/// input in the page header.
pub fn render(scene: &Scene, source: &str) -> String {
    let mut page = String::with_capacity(64 * 1024);

    let _ = write!(
        page,
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>Timeline</title>
<style>
{css}
</style>
</head>
<body>
<div class="header">
  <div class="controls">
    <button onclick="collapseAll(true)">Collapse all</button>
    <button onclick="collapseAll(false)">Expand all</button>
    &nbsp;|&nbsp;
    <span class="legend">Time range: {start} &mdash; {end} &mu;s</span>
  </div>
  <div>File: {source}</div>
</div>

<div id="svgwrap" style="position:relative;">
<svg id="timeline" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">
"#,
        css = PAGE_CSS,
        start = scene.axis.start,
        end = scene.axis.end,
        source = escape(source),
        width = scene.width,
        height = scene.height,
    );

    render_ruler(&mut page, scene);
    for item in &scene.items {
        match item {
            Item::LaneHeader(h) => render_lane_header(&mut page, scene, h),
            Item::Task(t) => render_task(&mut page, t),
        }
    }

    // JSON embedded in a <script> element must not contain a literal '<':
    // the HTML parser would end the script at the first "</script>" even
    // inside a JS string. The u003c escape decodes to the same character
    // on the JS side.
    let blocks_json = serde_json::to_string(&scene.blocks)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c");
    let _ = write!(
        page,
        r#"</svg>
<div id="tooltip" class="tooltip" style="display:none;"></div>
</div>

<script>
const LANE_BLOCKS = {blocks_json};
{js}
</script>
</body>
</html>
"#,
        js = VIEWER_JS,
    );

    page
}

/// Evenly spaced, labeled ticks across the global range.
fn render_ruler(page: &mut String, scene: &Scene) {
    for t in scene.axis.ticks(theme::RULER_TICKS) {
        let x = scene.axis.x(t);
        let _ = writeln!(
            page,
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{y2}" stroke="{stroke}" />"#,
            y2 = theme::HEADER_HEIGHT - 6.0,
            stroke = theme::RULER_LINE,
        );
        let _ = writeln!(
            page,
            r#"<text x="{tx}" y="{ty}" class="time-label">{t} &mu;s</text>"#,
            tx = x + 3.0,
            ty = theme::HEADER_HEIGHT - 10.0,
        );
    }
}

fn render_lane_header(page: &mut String, scene: &Scene, header: &crate::layout::LaneHeader) {
    let lane = escape(&header.lane);
    let _ = writeln!(page, r#"<g class="lane-block">"#);
    let _ = writeln!(
        page,
        r#"<rect x="0" y="{y}" width="{w}" height="{h}" fill="{fill}" />"#,
        y = header.y,
        w = scene.width,
        h = header.h,
        fill = theme::LANE_HEADER_FILL,
    );
    let _ = writeln!(
        page,
        r#"<text x="8" y="{y}" class="lane-label" data-lane="{lane}">&#9660; {lane}</text>"#,
        y = header.y + header.h / 1.8,
    );
    let _ = writeln!(page, "</g>");
}

fn render_task(page: &mut String, task: &crate::layout::TaskBox) {
    let lane = escape(&task.lane);
    let label = escape(&task.label);
    let _ = writeln!(
        page,
        r#"<rect class="task" x="{x}" y="{y}" width="{w}" height="{h}" fill="{fill}" data-lane="{lane}" data-start="{start}" data-end="{end}" data-label="{label}" />"#,
        x = task.x,
        y = task.y,
        w = task.w,
        h = task.h,
        fill = task.fill.css(),
        start = task.start,
        end = task.end,
    );

    // Inline label only when the bar is wide enough to hold something.
    if task.w > theme::LABEL_MIN_BAR_PX {
        let short = escape(&truncate(&task.label, theme::LABEL_MAX_CHARS));
        let _ = writeln!(
            page,
            r#"<text class="task-label" x="{x}" y="{y}" data-lane="{lane}">{short}</text>"#,
            x = task.x + 4.0,
            y = task.y + task.h * 0.7,
        );
    }
}

/// HTML/attribute escaping for interpolated user strings.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Truncate with an ellipsis on character boundaries.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        format!(
            "{}…",
            s.chars().take(max.saturating_sub(1)).collect::<String>()
        )
    }
}

const PAGE_CSS: &str = r#"body { font-family: Arial, Helvetica, sans-serif; margin: 8px; }
.header { margin-bottom: 8px; }
.legend { font-size: 12px; color: #444; }
svg { border: 1px solid #ddd; background: #fff; }
.task { stroke: rgba(0,0,0,0.08); stroke-width: 1; rx: 3; ry: 3; }
.task-label { font-size: 11px; }
.time-label { font-size: 11px; fill: #666; }
.lane-label { font-size: 12px; fill: #111; font-weight: bold; cursor: pointer; user-select: none; }
.controls { margin-bottom: 8px; }
.tooltip {
  position: absolute;
  pointer-events: none;
  background: rgba(0,0,0,0.8);
  color: white; padding: 6px; border-radius: 4px; font-size: 12px;
  white-space: pre;
}"#;

/// Viewer script. Collapse state lives in a per-lane map seeded from
/// `LANE_BLOCKS`; every lane starts expanded, `toggle` flips one lane and
/// `collapseAll` is the bulk transition over the same code path.
const VIEWER_JS: &str = r#"(function(){
  const svg = document.getElementById('timeline');
  const tooltip = document.getElementById('tooltip');

  // Group drawable items by the lane tag stamped on them at generation
  // time; LANE_BLOCKS is the authoritative lane list.
  const itemsByLane = new Map();
  for (const el of svg.querySelectorAll('.task, .task-label')) {
    const lane = el.getAttribute('data-lane');
    if (!itemsByLane.has(lane)) itemsByLane.set(lane, []);
    itemsByLane.get(lane).push(el);
  }

  const labels = new Map();
  for (const el of svg.querySelectorAll('.lane-label')) {
    const lane = el.getAttribute('data-lane');
    labels.set(lane, el);
    el.addEventListener('click', () => toggleLane(lane));
  }

  const collapsed = new Map(LANE_BLOCKS.map(b => [b.lane, false]));

  function setLane(lane, hide) {
    collapsed.set(lane, hide);
    for (const el of (itemsByLane.get(lane) || [])) {
      el.style.display = hide ? 'none' : '';
    }
    const label = labels.get(lane);
    if (label) {
      label.textContent = (hide ? '▶ ' : '▼ ') + lane;
    }
  }

  function toggleLane(lane) {
    setLane(lane, !collapsed.get(lane));
  }

  window.collapseAll = function(hide) {
    for (const b of LANE_BLOCKS) setLane(b.lane, hide);
  };

  svg.addEventListener('mousemove', function(ev) {
    const t = ev.target;
    if (t && t.classList && t.classList.contains('task')) {
      tooltip.style.display = 'block';
      tooltip.textContent = t.getAttribute('data-label') + '\n'
        + t.getAttribute('data-start') + ' - ' + t.getAttribute('data-end') + ' μs';
      tooltip.style.left = (ev.pageX + 12) + 'px';
      tooltip.style.top = (ev.pageY + 12) + 'px';
    } else {
      tooltip.style.display = 'none';
    }
  });
  svg.addEventListener('mouseleave', function() { tooltip.style.display = 'none'; });
})();"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskRecord;

    fn scene() -> Scene {
        let records = vec![
            TaskRecord::new(0.0, 10.0, "T1", "alpha", 0),
            TaskRecord::new(5.0, 15.0, "T1", "beta", 1),
            TaskRecord::new(20.0, 30.0, "T2", "gamma", 2),
        ];
        Scene::build(&records).unwrap()
    }

    #[test]
    fn produces_a_self_contained_document() {
        let html = render(&scene(), "input.csv");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<svg"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
        assert!(html.contains("input.csv"));
    }

    #[test]
    fn carries_the_lane_block_index_as_data() {
        let html = render(&scene(), "input.csv");
        assert!(html.contains("const LANE_BLOCKS = ["));
        assert!(html.contains(r#""lane":"T1""#));
        assert!(html.contains(r#""lane":"T2""#));
        assert!(html.contains(r#""start_row":"#));
    }

    #[test]
    fn tags_every_task_with_its_lane() {
        let html = render(&scene(), "input.csv");
        assert_eq!(html.matches(r#"class="task" "#).count(), 3);
        assert!(html.matches(r#"data-lane="T1""#).count() >= 2);
        assert!(html.contains(r#"data-start="0""#));
        assert!(html.contains(r#"data-end="15""#));
    }

    #[test]
    fn interaction_contract_is_present() {
        let html = render(&scene(), "input.csv");
        assert!(html.contains("collapseAll(true)"));
        assert!(html.contains("collapseAll(false)"));
        assert!(html.contains("toggleLane"));
        assert!(html.contains("tooltip"));
        // Disclosure glyph: lanes start expanded.
        assert!(html.contains("&#9660;"));
    }

    #[test]
    fn ruler_has_fixed_tick_count() {
        let html = render(&scene(), "input.csv");
        assert_eq!(
            html.matches(r#"class="time-label""#).count(),
            theme::RULER_TICKS + 1
        );
    }

    #[test]
    fn user_strings_are_escaped() {
        let records = vec![TaskRecord::new(
            0.0,
            10.0,
            "a<b>&\"lane",
            "x < y & z",
            0,
        )];
        let s = Scene::build(&records).unwrap();
        let html = render(&s, "weird & <file>.csv");
        assert!(!html.contains("a<b>&\"lane"));
        assert!(html.contains("a&lt;b&gt;&amp;&quot;lane"));
        assert!(html.contains("x &lt; y &amp; z"));
        assert!(html.contains("weird &amp; &lt;file&gt;.csv"));
    }

    #[test]
    fn lane_names_cannot_terminate_the_script_block() {
        let records = vec![TaskRecord::new(
            0.0,
            10.0,
            "</script><script>alert(1)//",
            "x",
            0,
        )];
        let s = Scene::build(&records).unwrap();
        let html = render(&s, "input.csv");
        let line = html
            .lines()
            .find(|l| l.contains("const LANE_BLOCKS"))
            .unwrap();
        assert!(!line.contains("</script>"));
        assert!(line.contains("\\u003c/script>"));
    }

    #[test]
    fn narrow_bars_get_no_inline_label() {
        let records = vec![
            TaskRecord::new(0.0, 0.0, "T1", "instant", 0),
            TaskRecord::new(0.0, 1000.0, "T1", "wide", 1),
        ];
        let s = Scene::build(&records).unwrap();
        let html = render(&s, "input.csv");
        assert_eq!(html.matches(r#"class="task-label""#).count(), 1);
        assert!(html.contains(">wide</text>"));
    }

    #[test]
    fn long_labels_are_truncated() {
        let long = "x".repeat(80);
        let records = vec![TaskRecord::new(0.0, 1000.0, "T1", long.as_str(), 0)];
        let s = Scene::build(&records).unwrap();
        let html = render(&s, "input.csv");
        assert!(!html.contains(&long));
        assert!(html.contains('…'));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 30), "short");
        let t = truncate("ααααααααααα", 5);
        assert_eq!(t.chars().count(), 5);
        assert!(t.ends_with('…'));
    }
}
