//! Chat prompt for the evaluation report.
//!
//! The user message pins the report layout that [`crate::localization::PersianReportTemplate`]
//! recognizes: four metadata lines, eight numbered sections and a three-column
//! skill-match table.

use crate::localization::DEFAULT_METADATA_LABELS;
use chrono::{Local, NaiveDate};

pub const SYSTEM_MESSAGE: &str =
    "You are a strict, evidence-based HR & business strategy interviewer. Be concise and avoid fluff.";

const ASR_NOTE: &str = "\
متن مصاحبه زیر خروجی خام تبدیل گفتار به متن (ASR) است و ممکن است شامل غلط املایی،
شکست کلمات، تکرار، یا خطاهای نگارشی باشد که ناشی از سیستم ASR است نه فرد مصاحبه‌شونده.
کیفیت زبان/املا را معیار قضاوت قرار نده. خطاهای متنی را نویز فرض کن.";

const SECTIONS: &str = "\
1) جمع‌بندی مدیریتی
- امتیاز تناسب کلی (Fit Score): XX/100 | سطح اطمینان: کم/متوسط/بالا
- پیشنهاد: Yes / No / Maybe (مشروط/غیرمشروط)
- چرا مثبت؟ (۲-۳ جمله)
- ریسک اصلی: (۱-۲ جمله)

2) نقاط قوت کلیدی (Strengths)

3) نقاط ضعف / ریسک‌ها (Weaknesses & Risks)

4) تحلیل تناسب مهارتی (Resume vs JD)
- Must-have ها (کلیدی): یک جدول Markdown سه ستونه با سرفصل‌های:
  | نیاز شغلی | شواهد از رزومه/مصاحبه | میزان تطابق (پایین/متوسط/بالا) |
- شکاف‌ها (Gaps): 2 تا 4 مورد با Impact: Low/Medium/High

5) تحلیل مصاحبه (نشانه‌های سبک کاری از لحن و پاسخ‌ها)
- ساختار پاسخ‌گویی/شفافیت/مالکیت/ریسک‌های ارتباطی + دلیل کوتاه
- نمونه شواهد: دو Quote کوتاه

6) سازگاری ادعاها (Resume vs Interview)
7) پیشنهاد برای دور بعد (سوالات هدفمند)
8) نتیجه نهایی

مبنای Fit Score را صریح و ساده توضیح بده:
- چهار معیار: درک استراتژیک، تحلیل و تصمیم‌گیری، نگاه اجرایی، نشانه‌های رفتاری
- شواهد هر معیار را ذکر کن و بگو چرا امتیاز بالا/پایین شده.";

const RULES: &str = "\
- فقط بر اساس این سه ورودی قضاوت کن: JD، رزومه، متن مصاحبه
- از شعار دوری کن؛ شواهد کوتاه بده.
- اگر چیزی در داده‌ها نیست، \"نامشخص/یافت نشد\" بنویس.";

/// Inputs for one evaluation request.
#[derive(Debug, Clone)]
pub struct EvaluationPrompt {
    resume: String,
    job_description: String,
    transcript: String,
    report_date: NaiveDate,
}

impl EvaluationPrompt {
    pub fn new(
        resume: impl Into<String>,
        job_description: impl Into<String>,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            resume: resume.into(),
            job_description: job_description.into(),
            transcript: transcript.into(),
            report_date: Local::now().date_naive(),
        }
    }

    pub fn report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = date;
        self
    }

    pub fn system_message(&self) -> &'static str {
        SYSTEM_MESSAGE
    }

    /// Report format block: title, metadata lines and the section outline.
    pub fn format_spec(&self) -> String {
        let [name, job, date, sources] = DEFAULT_METADATA_LABELS;
        format!(
            "گزارش ارزیابی کاندیدا — نسخه یک‌صفحه‌ای (فارسی)\n\n\
             قالب خروجی باید دقیقاً بخش‌های زیر را داشته باشد و شماره‌گذاری حفظ شود:\n\n\
             {name}: (از رزومه استخراج کن؛ اگر نبود بنویس \"نامشخص\")\n\
             {job}: (از JD استخراج کن)\n\
             {date}: {}\n\
             {sources}: رزومه + فایل صوتی مصاحبه (خروجی ASR)\n\n\
             {SECTIONS}\n",
            self.report_date.format("%Y-%m-%d"),
        )
    }

    pub fn user_message(&self) -> String {
        format!(
            "{}\nقوانین حیاتی:\n{RULES}\n- متن مصاحبه ASR خام است:\n{ASR_NOTE}\n\n[JD]\n{}\n\n[RESUME]\n{}\n\n[INTERVIEW_ASR]\n{}\n",
            self.format_spec(),
            self.job_description.trim(),
            self.resume.trim(),
            self.transcript.trim(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::report::parse;

    fn prompt() -> EvaluationPrompt {
        EvaluationPrompt::new("رزومه علی", "  مدیر محصول  ", "سلام، من ...")
            .report_date(NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date"))
    }

    #[test]
    fn test_report_date_formatted() {
        assert!(prompt().format_spec().contains("تاریخ گزارش: 2026-03-09"));
    }

    #[test]
    fn test_inputs_in_order() {
        let msg = prompt().user_message();
        let jd = msg.find("[JD]\nمدیر محصول\n").expect("jd block");
        let resume = msg.find("[RESUME]\nرزومه علی").expect("resume block");
        let asr = msg.find("[INTERVIEW_ASR]\nسلام").expect("asr block");
        assert!(jd < resume && resume < asr);
    }

    #[test]
    fn test_outline_matches_template() {
        let report = parse(&prompt().format_spec());
        let headings: Vec<_> = report.headings().collect();
        assert_eq!(headings.len(), 8);
        assert!(headings[0].starts_with("1) "));
        assert!(headings[7].starts_with("8) "));
        let meta = report
            .blocks
            .iter()
            .filter(|b| matches!(b, crate::model::Block::MetaLine { .. }))
            .count();
        assert_eq!(meta, 4);
    }
}
