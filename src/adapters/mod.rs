//! Input adapters: report text to [`crate::model::ReportAst`], and source
//! documents to plain text.

pub mod report;
pub mod source;
