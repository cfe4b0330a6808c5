//! Plain-text extraction from résumé and job-description uploads.

use crate::error::Error;
use crate::Result;
use rs_docx::document::{BodyContent, Table, TableCellContent, TableRowContent};
use lopdf::Document as LopdfDocument;
use rs_docx::DocxFile;
use std::path::Path;

/// Extracts plain text from a `.txt`, `.docx` or `.pdf` file.
///
/// Text files are decoded as UTF-8, replacing invalid sequences. DOCX body
/// paragraphs are joined with newlines; table cells are read row by row.
/// PDF pages are joined with newlines in page order.
pub fn extract_plain_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "txt" => {
            let bytes = std::fs::read(path)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        "docx" => extract_docx_text(path),
        "pdf" => extract_pdf_text(path),
        _ => Err(Error::UnsupportedFormat(if ext.is_empty() {
            path.display().to_string()
        } else {
            ext
        })),
    }
}

fn extract_docx_text(path: &Path) -> Result<String> {
    let docx_file = DocxFile::from_file(path).map_err(|e| Error::DocxParse(format!("{:?}", e)))?;
    let docx = docx_file
        .parse()
        .map_err(|e| Error::DocxParse(format!("{:?}", e)))?;

    let mut lines = Vec::new();
    for content in &docx.document.body.content {
        collect_body_text(content, &mut lines);
    }
    log::debug!("extracted {} lines from {}", lines.len(), path.display());
    Ok(lines.join("\n"))
}

fn extract_pdf_text(path: &Path) -> Result<String> {
    let doc = LopdfDocument::load(path).map_err(|e| Error::PdfParse(e.to_string()))?;

    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|&page_num| match doc.extract_text(&[page_num]) {
            Ok(text) => text.trim_end().to_string(),
            Err(e) => {
                log::warn!("no text extracted from page {}: {}", page_num, e);
                String::new()
            }
        })
        .collect();
    log::debug!("extracted {} pages from {}", pages.len(), path.display());
    Ok(pages.join("\n"))
}

fn collect_body_text(content: &BodyContent<'_>, lines: &mut Vec<String>) {
    match content {
        BodyContent::Paragraph(para) => lines.push(para.text().to_string()),
        BodyContent::Table(table) => collect_table_text(table, lines),
        BodyContent::Sdt(sdt) => {
            if let Some(sdt_content) = &sdt.content {
                for child in &sdt_content.content {
                    collect_body_text(child, lines);
                }
            }
        }
        _ => {}
    }
}

fn collect_table_text(table: &Table<'_>, lines: &mut Vec<String>) {
    for row in &table.rows {
        for cell in &row.cells {
            if let TableRowContent::TableCell(cell) = cell {
                for item in &cell.content {
                    match item {
                        TableCellContent::Paragraph(para) => lines.push(para.text().to_string()),
                        TableCellContent::Table(inner) => collect_table_text(inner, lines),
                    }
                }
            }
        }
    }
}
