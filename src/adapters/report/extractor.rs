use super::table::read_table;
use super::AstExtractor;
use crate::localization::{PersianReportTemplate, ReportTemplate};
use crate::model::ast::{Block, ReportAst};
use std::sync::Arc;

/// Line classifier for generated evaluation reports.
#[derive(Clone)]
pub struct ReportExtractor {
    template: Arc<dyn ReportTemplate>,
}

impl Default for ReportExtractor {
    fn default() -> Self {
        Self::new(Arc::new(PersianReportTemplate))
    }
}

impl std::fmt::Debug for ReportExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportExtractor")
            .field("title", &self.template.title())
            .finish()
    }
}

impl ReportExtractor {
    pub fn new(template: Arc<dyn ReportTemplate>) -> Self {
        Self { template }
    }

    fn classify(&self, line: &str) -> Block {
        if line.trim().is_empty() {
            return Block::BlankLine;
        }
        let text = line.to_string();
        if self.template.section_number(line).is_some() {
            Block::Heading { text }
        } else if self.template.is_metadata(line) {
            Block::MetaLine { text }
        } else {
            Block::BodyLine { text }
        }
    }
}

impl AstExtractor for ReportExtractor {
    fn extract(&self, text: &str) -> ReportAst {
        // Only trailing whitespace is dropped; a leading mark can matter in RTL text.
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let mut blocks = Vec::with_capacity(lines.len());

        let mut idx = 0;
        while idx < lines.len() {
            if let Some((table, consumed)) = read_table(&lines, idx) {
                log::debug!(
                    "table at line {}: {} columns, {} rows",
                    idx + 1,
                    table.column_count(),
                    table.rows().len()
                );
                blocks.push(Block::Table(table));
                idx += consumed;
                continue;
            }

            let block = self.classify(lines[idx]);
            log::trace!("line {}: {:?}", idx + 1, block);
            blocks.push(block);
            idx += 1;
        }

        ReportAst::new(blocks)
    }
}

/// Parses report text with the default Persian template.
pub fn parse(text: &str) -> ReportAst {
    ReportExtractor::default().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ast::TableBlock;
    use pretty_assertions::assert_eq;

    fn body(text: &str) -> Block {
        Block::BodyLine {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_heading_then_body() {
        let ast = parse("1) جمع‌بندی مدیریتی\nFit Score: 85/100\n");
        assert_eq!(
            ast.blocks,
            vec![
                Block::Heading {
                    text: "1) جمع‌بندی مدیریتی".to_string()
                },
                body("Fit Score: 85/100"),
            ]
        );
    }

    #[test]
    fn test_metadata_and_blank_lines() {
        let ast = parse("نام کاندیدا: نامشخص\n   \n\nعنوان شغل: مدیر محصول");
        assert_eq!(ast.len(), 4);
        assert!(matches!(ast.blocks[0], Block::MetaLine { .. }));
        assert_eq!(ast.blocks[1], Block::BlankLine);
        assert_eq!(ast.blocks[2], Block::BlankLine);
        assert!(matches!(ast.blocks[3], Block::MetaLine { .. }));
    }

    #[test]
    fn test_leading_whitespace_preserved() {
        let ast = parse("  - «نقل قول»   \r\n");
        assert_eq!(ast.blocks, vec![body("  - «نقل قول»")]);
    }

    #[test]
    fn test_table_between_text() {
        let text = "4) تحلیل تناسب\n| نیاز شغلی | شواهد | تطابق |\n|---|---|---|\n| مدیریت | نمونه | بالا |\n- شکاف‌ها";
        let ast = parse(text);
        assert_eq!(ast.len(), 3);
        assert_eq!(
            ast.blocks[1],
            Block::Table(TableBlock::new(
                vec!["نیاز شغلی".into(), "شواهد".into(), "تطابق".into()],
                vec![vec!["مدیریت".into(), "نمونه".into(), "بالا".into()]],
            ))
        );
        assert_eq!(ast.blocks[2], body("- شکاف‌ها"));
    }

    #[test]
    fn test_table_rows_without_separator_are_body() {
        let ast = parse("| a | b | c |\n| d | e | f |");
        assert_eq!(ast.blocks, vec![body("| a | b | c |"), body("| d | e | f |")]);
    }

    #[test]
    fn test_header_only_table() {
        let ast = parse("| a | b | c |\n|---|---|---|");
        let table = ast.tables().next().expect("table");
        assert!(table.rows().is_empty());
        assert_eq!(ast.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }
}
