use serde::Serialize;

/// Parsed report: the ordered blocks shared by every renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportAst {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { text: String },
    MetaLine { text: String },
    BodyLine { text: String },
    BlankLine,
    Table(TableBlock),
}

/// A pipe table. Every row holds exactly `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportAst {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }
}

impl Block {
    /// Text of a line block; `None` for blank lines and tables.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text } | Block::MetaLine { text } | Block::BodyLine { text } => {
                Some(text)
            }
            Block::BlankLine | Block::Table(_) => None,
        }
    }
}

impl TableBlock {
    /// Builds a table, padding short rows with empty cells and truncating
    /// long rows so that each matches the header count.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() > width {
                    log::warn!(
                        "table row has {} cells but header has {}; truncating",
                        row.len(),
                        width
                    );
                }
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
