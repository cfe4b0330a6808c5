use crate::model::ast::{Block, ReportAst, TableBlock};
use crate::render::Renderer;
use crate::Result;

/// Writes blocks back to report text, one line per block, with tables as
/// pipe tables.
///
/// Re-parsing the output restores the same blocks unless a table is directly
/// followed by another table or by a pipe-bounded body line; those lines would
/// be read as extra data rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, report: &ReportAst) -> Result<String> {
        Ok(render_to_text(report))
    }
}

pub fn render_to_text(report: &ReportAst) -> String {
    let mut out = String::new();
    for block in &report.blocks {
        match block {
            Block::Heading { text } | Block::MetaLine { text } | Block::BodyLine { text } => {
                out.push_str(text);
                out.push('\n');
            }
            Block::BlankLine => out.push('\n'),
            Block::Table(table) => write_table(&mut out, table),
        }
    }
    out
}

fn write_table(out: &mut String, table: &TableBlock) {
    write_row(out, table.headers());
    out.push('|');
    for _ in 0..table.column_count() {
        out.push_str("---|");
    }
    out.push('\n');
    for row in table.rows() {
        write_row(out, row);
    }
}

fn write_row(out: &mut String, cells: &[String]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out.push('\n');
}
