//! HTML report container rendered with maud.
use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

enum Block {
    Content(Markup),
    Plot(Plot),
}

/// One titled section of a report, holding content blocks and plots in
/// insertion order.
pub struct ReportSection {
    title: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(plot));
    }
}

/// A self-contained HTML report: header, sections, timestamped footer.
pub struct Report {
    tool: String,
    version: String,
    logo_url: Option<String>,
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(tool: &str, version: &str, logo_url: Option<&str>, title: &str) -> Self {
        Self {
            tool: tool.to_string(),
            version: version.to_string(),
            logo_url: logo_url.map(|url| url.to_string()),
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    /// Render the full document as an HTML string.
    pub fn render(&self) -> String {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src="https://cdn.plot.ly/plotly-2.27.0.min.js" {}
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    header {
                        @if let Some(logo) = &self.logo_url {
                            img class="logo" src=(logo) alt=(self.tool);
                        }
                        span class="tool" { (self.tool) " " (self.version) }
                    }
                    h1 { (self.title) }
                    @for (section_idx, section) in self.sections.iter().enumerate() {
                        section {
                            h2 { (section.title) }
                            @for (block_idx, block) in section.blocks.iter().enumerate() {
                                @match block {
                                    Block::Content(content) => {
                                        div class="content" { (content) }
                                    },
                                    Block::Plot(plot) => {
                                        (PreEscaped(plot.to_inline_html(Some(&format!(
                                            "plot-{}-{}",
                                            section_idx, block_idx
                                        )))))
                                    },
                                }
                            }
                        }
                    }
                    footer {
                        "Generated by " (self.tool) " " (self.version) " on " (generated)
                    }
                }
            }
        };
        markup.into_string()
    }

    /// Render and write the report to an HTML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.render())
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
        Ok(())
    }
}

const STYLE: &str = "
body {
    font-family: 'Segoe UI', Helvetica, Arial, sans-serif;
    margin: 0 auto;
    max-width: 1100px;
    padding: 0 24px 48px;
    color: #222;
}
header {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px 0;
    border-bottom: 1px solid #ddd;
}
header .logo { height: 40px; }
header .tool { font-weight: bold; color: #555; }
section { margin-top: 32px; }
h2 { border-bottom: 1px solid #eee; padding-bottom: 4px; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ddd; padding: 6px 10px; text-align: left; }
th { background-color: #f5f5f5; }
tr:nth-child(even) { background-color: #fafafa; }
.content { margin: 12px 0; }
footer { margin-top: 48px; font-size: 0.85em; color: #888; }
";
