//! DOCX export built on `rs_docx`.

use super::Renderer;
use crate::error::Error;
use crate::localization::{PersianReportTemplate, ReportTemplate};
use crate::model::ast::{Block, ReportAst, TableBlock};
use crate::Result;
use hard_xml::XmlRead;
use rs_docx::document::{
    BodyContent, Paragraph, ParagraphContent, Run, RunContent, Table, TableCell, TableRow, Text,
};
use rs_docx::formatting::{
    Bold, CharacterProperty, Justification, JustificationVal, ParagraphProperty, Size,
    TableProperty,
};
use rs_docx::Docx;
use std::io::Cursor;
use std::sync::Arc;

/// Font sizes, in points, used by the DOCX export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocxOptions {
    pub title_size: u32,
    pub heading_size: u32,
    pub meta_size: u32,
    pub body_size: u32,
    pub table_size: u32,
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            title_size: 14,
            heading_size: 12,
            meta_size: 11,
            body_size: 11,
            table_size: 10,
        }
    }
}

/// Grid table: single-line borders on every edge and between all cells.
const GRID_TABLE_PROPERTY: &str = concat!(
    r#"<w:tblPr>"#,
    r#"<w:tblStyle w:val="TableGrid"/>"#,
    r#"<w:bidiVisual/>"#,
    r#"<w:tblBorders>"#,
    r#"<w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"<w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
    r#"</w:tblBorders>"#,
    r#"</w:tblPr>"#
);

/// Renders report blocks to a serialized DOCX document.
///
/// Every paragraph and table cell is right-justified; bidirectional shaping
/// inside a paragraph is left to the word processor.
#[derive(Clone)]
pub struct DocxRenderer {
    template: Arc<dyn ReportTemplate>,
    options: DocxOptions,
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new(Arc::new(PersianReportTemplate), DocxOptions::default())
    }
}

impl std::fmt::Debug for DocxRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocxRenderer")
            .field("title", &self.template.title())
            .field("options", &self.options)
            .finish()
    }
}

impl DocxRenderer {
    pub fn new(template: Arc<dyn ReportTemplate>, options: DocxOptions) -> Self {
        Self { template, options }
    }

    fn table<'a>(&self, block: &TableBlock) -> Table<'a> {
        let size = self.options.table_size;
        let header = block
            .headers()
            .iter()
            .fold(TableRow::default(), |row, text| {
                row.push_cell(TableCell::paragraph(styled_paragraph(text, true, size)))
            });

        let mut table = Table::default().property(grid_table_property()).push_row(header);
        for cells in block.rows() {
            let row = cells.iter().fold(TableRow::default(), |row, text| {
                row.push_cell(TableCell::paragraph(styled_paragraph(text, false, size)))
            });
            table = table.push_row(row);
        }
        table
    }
}

impl Renderer for DocxRenderer {
    type Output = Vec<u8>;

    fn render(&self, report: &ReportAst) -> Result<Vec<u8>> {
        let opts = &self.options;
        let mut docx = Docx::default();

        docx.document
            .push(styled_paragraph(self.template.title(), true, opts.title_size));
        docx.document.push(Paragraph::default());

        for block in &report.blocks {
            match block {
                Block::Heading { text } => {
                    docx.document
                        .push(styled_paragraph(text, true, opts.heading_size));
                }
                Block::MetaLine { text } => {
                    docx.document
                        .push(styled_paragraph(text, true, opts.meta_size));
                }
                Block::BodyLine { text } => {
                    docx.document
                        .push(styled_paragraph(text, false, opts.body_size));
                }
                Block::BlankLine => {
                    docx.document
                        .push(styled_paragraph("", false, opts.body_size));
                }
                Block::Table(table) => {
                    docx.document.push(BodyContent::Table(self.table(table)));
                }
            }
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.write(&mut buffer)
            .map_err(|e| Error::DocxWrite(format!("{:?}", e)))?;
        let bytes = buffer.into_inner();
        log::debug!(
            "rendered {} blocks to {} DOCX bytes",
            report.blocks.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Right-justified paragraph holding a single run. Empty text yields an empty
/// paragraph, which keeps the vertical spacing of blank lines.
fn styled_paragraph<'a>(text: &str, bold: bool, size_pt: u32) -> Paragraph<'a> {
    let mut para = Paragraph::default();
    para.property = Some(ParagraphProperty {
        justification: Some(Justification {
            value: JustificationVal::Right,
        }),
        ..Default::default()
    });
    if text.is_empty() {
        return para;
    }

    let mut props = CharacterProperty {
        // w:sz is measured in half-points.
        size: Some(Size {
            value: (size_pt * 2) as _,
        }),
        ..Default::default()
    };
    if bold {
        props.bold = Some(Bold { value: Some(true) });
    }

    let mut run = Run::default();
    run.property = Some(props);
    run.content.push(RunContent::Text(Text {
        text: text.to_string().into(),
        ..Default::default()
    }));
    para.content.push(ParagraphContent::Run(run));
    para
}

fn grid_table_property<'a>() -> TableProperty<'a> {
    match TableProperty::from_str(GRID_TABLE_PROPERTY) {
        Ok(property) => property,
        Err(e) => {
            log::warn!("grid table properties rejected ({:?}); using defaults", e);
            TableProperty::default()
        }
    }
}

/// Renders report blocks to DOCX bytes with the default template and sizes.
pub fn render_document(report: &ReportAst) -> Result<Vec<u8>> {
    DocxRenderer::default().render(report)
}
