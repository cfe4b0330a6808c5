//! # evalreport
//!
//! Renders generated candidate-evaluation reports to right-to-left HTML and DOCX.
//!
//! Report text is parsed once into a [`ReportAst`] of headings, metadata lines,
//! body lines, blank lines and pipe tables; every renderer reads that same block
//! sequence, so the HTML view and the Word export never disagree on structure.
//!
//! ## Example
//!
//! ```no_run
//! use evalreport::{ReportConverter, ReportOptions};
//!
//! let converter = ReportConverter::new(ReportOptions::default());
//! let rendered = converter.convert("1) جمع‌بندی مدیریتی\nFit Score: 85/100\n").unwrap();
//! std::fs::write("report.docx", &rendered.docx).unwrap();
//! println!("{}", rendered.html);
//! ```

pub mod adapters;
pub mod converter;
pub mod error;
pub mod localization;
pub mod model;
pub mod prompt;
pub mod render;

pub use adapters::report::{parse, AstExtractor, ReportExtractor};
pub use adapters::source::extract_plain_text;
pub use converter::{RenderedReport, ReportConverter};
pub use error::{Error, Result};
pub use localization::{ConfiguredTemplate, PersianReportTemplate, ReportTemplate, TemplateConfig};
pub use model::ast::{Block, ReportAst, TableBlock};
pub use prompt::EvaluationPrompt;
pub use render::{
    render_document, render_html, render_to_text, to_json, DocxOptions, HtmlOptions, JsonFormat,
    Renderer,
};

use std::sync::Arc;

/// Options for report conversion.
#[derive(Clone)]
pub struct ReportOptions {
    /// Which lines are headings and metadata, and the document title.
    pub template: Arc<dyn ReportTemplate>,
    /// HTML output settings.
    pub html: HtmlOptions,
    /// DOCX font sizes.
    pub docx: DocxOptions,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            template: Arc::new(PersianReportTemplate),
            html: HtmlOptions::default(),
            docx: DocxOptions::default(),
        }
    }
}

impl std::fmt::Debug for ReportOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportOptions")
            .field("title", &self.template.title())
            .field("html", &self.html)
            .field("docx", &self.docx)
            .finish()
    }
}

impl ReportOptions {
    pub fn with_template(mut self, template: impl ReportTemplate + 'static) -> Self {
        self.template = Arc::new(template);
        self
    }

    pub fn with_standalone_html(mut self, standalone: bool) -> Self {
        self.html.standalone = standalone;
        self
    }

    pub fn with_docx_options(mut self, docx: DocxOptions) -> Self {
        self.docx = docx;
        self
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;
    use std::borrow::Cow;

    /// Renders report text to an HTML fragment.
    #[pyfunction]
    #[pyo3(signature = (text, standalone = false))]
    fn render_report_html(text: &str, standalone: bool) -> String {
        let options = ReportOptions::default().with_standalone_html(standalone);
        ReportConverter::new(options).to_html(text)
    }

    /// Renders report text to DOCX bytes.
    #[pyfunction]
    fn render_report_docx(text: &str) -> PyResult<Cow<'static, [u8]>> {
        ReportConverter::with_defaults()
            .to_docx(text)
            .map(Cow::Owned)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn evalreport(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(render_report_html, m)?)?;
        m.add_function(wrap_pyfunction!(render_report_docx, m)?)?;
        Ok(())
    }
}
