//! Core document model shared by the parser and renderers.

pub mod ast;

pub use ast::{Block, ReportAst, TableBlock};
