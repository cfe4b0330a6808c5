use super::{escape_html, wrap_ltr_runs, Renderer};
use crate::model::ast::{Block, ReportAst, TableBlock};
use crate::Result;

/// Options for HTML output.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML page with the report stylesheet.
    pub standalone: bool,
    /// CSS font-family used by the standalone page.
    pub font_family: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            font_family: "Vazirmatn, Tahoma, sans-serif".to_string(),
        }
    }
}

const STYLESHEET: &str = "\
.report { direction: rtl; text-align: right; line-height: 1.9; }
.report p { margin: 0; }
.report .report-heading { font-size: 1.15em; margin-top: 0.4em; }
.report table.report-table { border-collapse: collapse; width: 100%; margin: 0.5em 0; }
.report table.report-table th, .report table.report-table td { border: 1px solid #999; padding: 4px 8px; }
.report table.report-table th { background: #f2f2f2; }
.report span[dir=\"ltr\"] { unicode-bidi: isolate; }
";

/// Blank-line spacer. The height is inline so embedded fragments keep it
/// without the page stylesheet.
const SPACER: &str = "<div class=\"report-spacer\" style=\"height:0.6em\"></div>\n";

#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Fragment, or the full page when `standalone` is set.
    pub fn render_string(&self, report: &ReportAst) -> String {
        let fragment = self.render_fragment(report);
        if self.options.standalone {
            self.wrap_page(&fragment)
        } else {
            fragment
        }
    }

    fn render_fragment(&self, report: &ReportAst) -> String {
        let mut out = String::from("<div class=\"report\" dir=\"rtl\">\n");
        for block in &report.blocks {
            match block {
                Block::Heading { text } => {
                    out.push_str("<p class=\"report-heading\"><strong>");
                    out.push_str(&html_text(text));
                    out.push_str("</strong></p>\n");
                }
                Block::MetaLine { text } => {
                    out.push_str("<p class=\"report-meta\"><strong>");
                    out.push_str(&html_text(text));
                    out.push_str("</strong></p>\n");
                }
                Block::BodyLine { text } => {
                    out.push_str("<p>");
                    out.push_str(&html_text(text));
                    out.push_str("</p>\n");
                }
                Block::BlankLine => out.push_str(SPACER),
                Block::Table(table) => render_table(&mut out, table),
            }
        }
        out.push_str("</div>");
        out
    }

    fn wrap_page(&self, fragment: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"fa\" dir=\"rtl\">\n<head>\n<meta charset=\"utf-8\">\n<style>\nbody {{ font-family: {}; }}\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
            escape_html(&self.options.font_family),
            STYLESHEET,
            fragment
        )
    }
}

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&self, report: &ReportAst) -> Result<String> {
        Ok(self.render_string(report))
    }
}

/// Escapes, then isolates LTR runs. The order matters: the span markup must
/// not be escaped and user text must never reach the output unescaped.
fn html_text(text: &str) -> String {
    wrap_ltr_runs(&escape_html(text))
}

fn render_table(out: &mut String, table: &TableBlock) {
    out.push_str("<table class=\"report-table\">\n<thead>\n<tr>");
    for header in table.headers() {
        out.push_str("<th>");
        out.push_str(&html_text(header));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in table.rows() {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&html_text(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

/// Renders report blocks to an HTML fragment.
pub fn render_html(report: &ReportAst) -> String {
    HtmlRenderer::default().render_fragment(report)
}
