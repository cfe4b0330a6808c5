mod extractor;
mod table;

use crate::model::ast::ReportAst;

/// Turns generator output into the block model.
///
/// Extraction is total: malformed input degrades to body text instead of failing.
pub trait AstExtractor {
    fn extract(&self, text: &str) -> ReportAst;
}

pub use extractor::{parse, ReportExtractor};
pub use table::{is_separator_line, is_table_row, split_cells};
