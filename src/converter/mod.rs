//! Report conversion: parse once, render to every target.

use crate::adapters::report::{AstExtractor, ReportExtractor};
use crate::model::ast::ReportAst;
use crate::render::{DocxRenderer, HtmlRenderer, Renderer};
use crate::{ReportOptions, Result};
use std::path::Path;

/// Both renderings of one report.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// HTML fragment (or full page when standalone output is enabled).
    pub html: String,
    /// Serialized DOCX document.
    pub docx: Vec<u8>,
}

/// Main converter struct that orchestrates report text to HTML/DOCX conversion.
#[derive(Debug, Clone)]
pub struct ReportConverter {
    extractor: ReportExtractor,
    html: HtmlRenderer,
    docx: DocxRenderer,
}

impl ReportConverter {
    /// Creates a new converter with the given options.
    pub fn new(options: ReportOptions) -> Self {
        let ReportOptions {
            template,
            html,
            docx,
        } = options;
        Self {
            extractor: ReportExtractor::new(template.clone()),
            html: HtmlRenderer::new(html),
            docx: DocxRenderer::new(template, docx),
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ReportOptions::default())
    }

    pub fn parse(&self, text: &str) -> ReportAst {
        self.extractor.extract(text)
    }

    /// Renders an already parsed report to HTML.
    pub fn render_html(&self, report: &ReportAst) -> String {
        self.html.render_string(report)
    }

    /// Renders an already parsed report to DOCX bytes.
    pub fn render_docx(&self, report: &ReportAst) -> Result<Vec<u8>> {
        self.docx.render(report)
    }

    pub fn to_html(&self, text: &str) -> String {
        self.render_html(&self.parse(text))
    }

    pub fn to_docx(&self, text: &str) -> Result<Vec<u8>> {
        self.render_docx(&self.parse(text))
    }

    /// Converts report text to HTML and DOCX from a single parse.
    pub fn convert(&self, text: &str) -> Result<RenderedReport> {
        let report = self.parse(text);
        log::debug!(
            "parsed report: {} blocks, {} headings, {} tables",
            report.len(),
            report.headings().count(),
            report.tables().count()
        );
        Ok(RenderedReport {
            html: self.render_html(&report),
            docx: self.render_docx(&report)?,
        })
    }

    /// Reads a UTF-8 report file and converts it.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderedReport> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.convert(&text)
    }
}

impl Default for ReportConverter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::{ConfiguredTemplate, TemplateConfig};
    use crate::HtmlOptions;
    use std::sync::Arc;

    #[test]
    fn test_convert_shares_one_parse() {
        let rendered = ReportConverter::with_defaults()
            .convert("1) جمع‌بندی مدیریتی\nFit Score: 85/100\n")
            .expect("convert");
        assert!(rendered.html.contains("<span dir=\"ltr\">85/100</span>"));
        assert!(rendered.docx.starts_with(b"PK"));
    }

    #[test]
    fn test_custom_template_changes_classification() {
        let template = ConfiguredTemplate::new(TemplateConfig {
            section_marker: ".".to_string(),
            ..Default::default()
        })
        .expect("template");
        let converter = ReportConverter::new(ReportOptions {
            template: Arc::new(template),
            html: HtmlOptions::default(),
            ..Default::default()
        });
        let report = converter.parse("1. خلاصه\n1) خلاصه");
        assert_eq!(report.headings().collect::<Vec<_>>(), vec!["1. خلاصه"]);
    }

    #[test]
    fn test_render_html_honours_standalone() {
        let converter = ReportConverter::new(ReportOptions::default().with_standalone_html(true));
        let report = converter.parse("1) جمع‌بندی\n\nمتن");
        let page = converter.render_html(&report);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("style=\"height:0.6em\""));
        assert_eq!(converter.to_html("1) جمع‌بندی\n\nمتن"), page);
    }

    #[test]
    fn test_convert_file_missing() {
        let err = ReportConverter::with_defaults()
            .convert_file("/nonexistent/evalreport/report.txt")
            .expect_err("missing file");
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
