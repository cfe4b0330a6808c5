use evalreport::{parse, render_document, render_html, render_to_text, Block, ReportAst};

/// Deterministic LCG so failures reproduce from the seed alone.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next() as usize) % items.len()]
    }
}

const FRAGMENTS: &[&str] = &[
    "1) جمع‌بندی مدیریتی",
    "8) نتیجه نهایی",
    "9) خارج از قالب",
    "نام کاندیدا: سارا",
    "تاریخ گزارش: 2026-01-31",
    "- امتیاز تناسب کلی (Fit Score): 78/100",
    "<script>alert(1)</script>",
    "A & B <b>bold</b>",
    "   ",
    "",
    "| a | b |",
    "---",
    "«نقل قول» SQL + Python",
];

fn random_table(rng: &mut Lcg) -> Vec<String> {
    let columns = 3 + (rng.next() % 3) as usize;
    let mut lines = vec![
        format!("|{}|", vec![" h "; columns].join("|")),
        format!("|{}|", vec!["---"; columns].join("|")),
    ];
    for _ in 0..(rng.next() % 4) {
        let cells = 3 + (rng.next() % 4) as usize;
        let row: Vec<&str> = (0..cells).map(|_| rng.pick(&["x", "۵", "<i>", "Q&A"])).collect();
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines
}

fn random_report(seed: u64) -> String {
    let mut rng = Lcg(seed);
    let mut lines = Vec::new();
    for _ in 0..(5 + rng.next() % 20) {
        if rng.next() % 6 == 0 {
            lines.extend(random_table(&mut rng));
        } else {
            lines.push(rng.pick(FRAGMENTS).to_string());
        }
    }
    lines.join("\n")
}

fn covered_lines(report: &ReportAst) -> usize {
    report
        .blocks
        .iter()
        .map(|block| match block {
            Block::Table(table) => 2 + table.rows().len(),
            _ => 1,
        })
        .sum()
}

#[test]
fn invariant_every_line_lands_in_one_block() {
    for seed in 0..200 {
        let text = random_report(seed);
        let report = parse(&text);
        assert_eq!(covered_lines(&report), text.lines().count(), "seed {}", seed);
    }
}

#[test]
fn invariant_table_rows_match_header_width() {
    for seed in 0..200 {
        let report = parse(&random_report(seed));
        for table in report.tables() {
            assert!(table.column_count() >= 3, "seed {}", seed);
            for row in table.rows() {
                assert_eq!(row.len(), table.column_count(), "seed {}", seed);
            }
        }
    }
}

#[test]
fn invariant_html_never_contains_raw_input_markup() {
    for seed in 0..200 {
        let html = render_html(&parse(&random_report(seed)));
        assert!(!html.contains("<script"), "seed {}", seed);
        assert!(!html.contains("<b>"), "seed {}", seed);
        assert!(!html.contains("<i>"), "seed {}", seed);
        assert!(!html.contains("&amp;amp;"), "seed {}", seed);
    }
}

#[test]
fn invariant_text_rendering_preserves_table_shape() {
    for seed in 0..100 {
        let report = parse(&random_report(seed));
        let reparsed = parse(&render_to_text(&report));
        let shape = |r: &ReportAst| -> Vec<(usize, usize)> {
            r.tables()
                .map(|t| (t.column_count(), t.rows().len()))
                .collect()
        };
        assert_eq!(shape(&reparsed), shape(&report), "seed {}", seed);
    }
}

#[test]
fn invariant_docx_renders_for_any_input() {
    for seed in 0..20 {
        let bytes = render_document(&parse(&random_report(seed))).expect("render");
        assert!(bytes.starts_with(b"PK"), "seed {}", seed);
    }
}
