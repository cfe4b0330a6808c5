mod bidi;
mod docx;
mod escape;
mod html;
mod json;
mod text;

use crate::model::ast::ReportAst;
use crate::Result;

pub use bidi::wrap_ltr_runs;
pub use docx::{render_document, DocxOptions, DocxRenderer};
pub use escape::escape_html;
pub use html::{render_html, HtmlOptions, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use text::{render_to_text, TextRenderer};

/// A presentation target for parsed reports. Renderers only read the blocks.
pub trait Renderer {
    type Output;

    fn render(&self, report: &ReportAst) -> Result<Self::Output>;
}
