pub mod html;
pub mod json;
pub mod theme;

/// Output artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderFormat {
    /// Interactive HTML timeline with embedded SVG.
    Html,
    /// Structured JSON export, layout-free.
    Json,
}
