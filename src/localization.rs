//! Report templates: which lines of a generated report are section headings
//! and which are metadata.

use crate::{Error, Result};
use regex::Regex;
use serde::Deserialize;

/// Strategy for recognizing the fixed structure of a generated report.
pub trait ReportTemplate: Send + Sync {
    /// Returns the section number if `line` opens a numbered section (e.g. "3) ...").
    fn section_number(&self, line: &str) -> Option<u32>;

    /// Determines if `line` is one of the header metadata lines.
    fn is_metadata(&self, line: &str) -> bool;

    /// Title placed at the top of exported documents.
    fn title(&self) -> &str;
}

pub const DEFAULT_TITLE: &str = "گزارش ارزیابی کاندیدا — نسخه یک‌صفحه‌ای";
pub const DEFAULT_SECTION_COUNT: u32 = 8;
pub const DEFAULT_SECTION_MARKER: &str = ")";

/// Candidate name, job title, report date, sources reviewed.
pub const DEFAULT_METADATA_LABELS: [&str; 4] =
    ["نام کاندیدا", "عنوان شغل", "تاریخ گزارش", "منابع بررسی"];

/// The Persian one-page evaluation report: eight sections numbered `1)`..`8)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PersianReportTemplate;

impl ReportTemplate for PersianReportTemplate {
    fn section_number(&self, line: &str) -> Option<u32> {
        let line = line.trim();
        let digits_end = line
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(line.len());
        let digits = &line[..digits_end];
        if digits.is_empty() || digits.starts_with('0') {
            return None;
        }
        if !line[digits_end..].starts_with(DEFAULT_SECTION_MARKER) {
            return None;
        }
        digits
            .parse::<u32>()
            .ok()
            .filter(|n| (1..=DEFAULT_SECTION_COUNT).contains(n))
    }

    fn is_metadata(&self, line: &str) -> bool {
        let line = line.trim();
        DEFAULT_METADATA_LABELS
            .iter()
            .any(|label| line.starts_with(label))
    }

    fn title(&self) -> &str {
        DEFAULT_TITLE
    }
}

/// Serializable description of a report template, usually loaded from JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub title: String,
    pub section_count: u32,
    pub section_marker: String,
    pub metadata_labels: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            section_count: DEFAULT_SECTION_COUNT,
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            metadata_labels: DEFAULT_METADATA_LABELS
                .iter()
                .map(|l| l.to_string())
                .collect(),
        }
    }
}

impl TemplateConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Json(e.to_string()))
    }
}

/// Template built from a [`TemplateConfig`].
#[derive(Debug, Clone)]
pub struct ConfiguredTemplate {
    config: TemplateConfig,
    heading: Regex,
}

impl ConfiguredTemplate {
    pub fn new(config: TemplateConfig) -> Result<Self> {
        if config.section_count == 0 {
            return Err(Error::Template("section_count must be at least 1".into()));
        }
        if config.section_marker.is_empty() {
            return Err(Error::Template("section_marker must not be empty".into()));
        }
        if config.metadata_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(Error::Template("metadata labels must not be blank".into()));
        }

        let pattern = format!(r"^([1-9][0-9]*){}", regex::escape(&config.section_marker));
        let heading = Regex::new(&pattern).map_err(|e| Error::Template(e.to_string()))?;
        Ok(Self { config, heading })
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }
}

impl ReportTemplate for ConfiguredTemplate {
    fn section_number(&self, line: &str) -> Option<u32> {
        let caps = self.heading.captures(line.trim())?;
        caps.get(1)?
            .as_str()
            .parse::<u32>()
            .ok()
            .filter(|n| (1..=self.config.section_count).contains(n))
    }

    fn is_metadata(&self, line: &str) -> bool {
        let line = line.trim();
        self.config
            .metadata_labels
            .iter()
            .any(|label| line.starts_with(label.as_str()))
    }

    fn title(&self) -> &str {
        &self.config.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_sections() {
        let t = PersianReportTemplate;
        assert_eq!(t.section_number("1) جمع‌بندی مدیریتی"), Some(1));
        assert_eq!(t.section_number("  8) نتیجه نهایی"), Some(8));
        assert_eq!(t.section_number("9) extra"), None);
        assert_eq!(t.section_number("10) extra"), None);
        assert_eq!(t.section_number("0) zero"), None);
        assert_eq!(t.section_number("1. dotted"), None);
        assert_eq!(t.section_number("Fit Score: 85/100"), None);
    }

    #[test]
    fn test_persian_metadata() {
        let t = PersianReportTemplate;
        assert!(t.is_metadata("نام کاندیدا: نامشخص"));
        assert!(t.is_metadata("منابع بررسی: رزومه + فایل صوتی"));
        assert!(!t.is_metadata("- نام کاندیدا در متن"));
    }

    #[test]
    fn test_configured_template_matches_default() {
        let t = ConfiguredTemplate::new(TemplateConfig::default()).expect("valid config");
        for line in ["1) a", "8) b", "9) c", "12) d", "x) e", "3)"] {
            assert_eq!(
                t.section_number(line),
                PersianReportTemplate.section_number(line),
                "{line}"
            );
        }
        assert_eq!(t.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_configured_template_from_json() {
        let config = TemplateConfig::from_json(
            r#"{"title":"Report","section_count":12,"section_marker":".","metadata_labels":["Candidate"]}"#,
        )
        .expect("parse config");
        let t = ConfiguredTemplate::new(config).expect("valid config");
        assert_eq!(t.section_number("12. Summary"), Some(12));
        assert_eq!(t.section_number("1) Summary"), None);
        assert!(t.is_metadata("Candidate: Jane"));
        assert_eq!(t.title(), "Report");
    }

    #[test]
    fn test_configured_template_rejects_empty_marker() {
        let config = TemplateConfig {
            section_marker: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            ConfiguredTemplate::new(config),
            Err(Error::Template(_))
        ));
    }
}
