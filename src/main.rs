use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tracelane::io::{csv_import, file};
use tracelane::layout::Scene;
use tracelane::render::{html, json, RenderFormat};

#[derive(Parser)]
#[command(name = "tracelane")]
#[command(about = "Render a flat trace event log as an interactive HTML timeline")]
#[command(version)]
struct Cli {
    /// Input event log (CSV: start, end, lane, label, [overhead], [color], [args...])
    input: PathBuf,

    /// Output file (HTML mode) or directory (JSON mode).
    /// Defaults: timeline.html / static/
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
    format: RenderFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (records, skipped) = csv_import::import_csv(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    if skipped > 0 {
        eprintln!("Skipped {} invalid record(s)", skipped);
    }
    if records.is_empty() {
        eprintln!("No tasks found in {}; nothing to render", cli.input.display());
        return Ok(());
    }

    match cli.format {
        RenderFormat::Html => {
            let scene = Scene::build(&records)
                .context("scene construction requires at least one record")?;
            let source = cli.input.display().to_string();
            let page = html::render(&scene, &source);

            let out = cli
                .output
                .unwrap_or_else(|| PathBuf::from("timeline.html"));
            file::write_text(&out, &page)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
        RenderFormat::Json => {
            let doc = json::render(&records)
                .context("export requires at least one record")?
                .context("failed to serialize trace document")?;

            let out =
                file::json_artifact_path(&cli.output.unwrap_or_else(|| PathBuf::from("static")));
            file::write_text(&out, &doc)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote {}", out.display());
        }
    }

    Ok(())
}
