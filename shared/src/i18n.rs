//! Localization: language selection, text direction and the translation table.
//!
//! The locale is an explicit value passed to every presentation function.
//! Nothing in this crate reads an ambient "current language".

use chrono::{Datelike, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    /// BCP-47 code, used for the document `lang` attribute
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Parse a language tag such as `ar`, `ar-EG` or `en-US`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::English),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// Pick the startup language: an explicit `?lang=` tag wins, then the
    /// browser's preferred language, then English. Unsupported tags are skipped.
    pub fn resolve(query: Option<&str>, browser: Option<&str>) -> Self {
        query
            .and_then(Language::from_tag)
            .or_else(|| browser.and_then(Language::from_tag))
            .unwrap_or_default()
    }

    /// CLDR plural category of `count`, used as a translation key suffix
    pub fn plural_category(&self, count: u32) -> &'static str {
        match self {
            Language::English => match count {
                1 => "one",
                _ => "other",
            },
            Language::Arabic => match count {
                0 => "zero",
                1 => "one",
                2 => "two",
                n if (3..=10).contains(&(n % 100)) => "few",
                n if (11..=99).contains(&(n % 100)) => "many",
                _ => "other",
            },
        }
    }

    pub fn direction(&self) -> TextDirection {
        match self {
            Language::English => TextDirection::Ltr,
            Language::Arabic => TextDirection::Rtl,
        }
    }

    /// The other supported language, for the toggle button
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute
    pub fn as_attr(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }

    /// Arrow pointing in the reading direction; mirrored for RTL
    pub fn forward_arrow(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "→",
            TextDirection::Rtl => "←",
        }
    }
}

/// Current language and its resolved text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language: Language,
}

impl LocaleConfig {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }

    /// Translate `key`. Falls back to English, then to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Translate `key` and substitute `{name}` placeholders from `params`
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = resolve_template(self.language, table(self.language), key) else {
            return key.to_string();
        };

        let mut text = template.to_string();
        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// Translate a count-dependent key, choosing `key.<plural category>` and
    /// substituting `{count}`
    pub fn t_count(&self, key: &str, count: u32) -> String {
        let category = self.language.plural_category(count);
        let count = count.to_string();
        self.t_with(&format!("{}.{}", key, category), &[("count", &count)])
    }

    /// Format a calendar date for display, e.g. "March 5, 2025"
    pub fn format_date(&self, date: NaiveDate) -> String {
        let month = self.t(&format!("months.{}", date.month()));
        match self.language {
            Language::English => format!("{} {}, {}", month, date.day(), date.year()),
            Language::Arabic => format!("{} {} {}", date.day(), month, date.year()),
        }
    }

    /// Format a money amount with two decimals and the localized currency
    pub fn format_amount(&self, amount: f64) -> String {
        let value = format!("{:.2}", amount);
        self.t_with("currency.amount", &[("value", &value)])
    }
}

type Table = &'static [(&'static str, &'static str)];

fn table(language: Language) -> Table {
    match language {
        Language::English => EN,
        Language::Arabic => AR,
    }
}

fn lookup(table: Table, key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look `key` up in `primary`, falling back to the English table
fn resolve_template(language: Language, primary: Table, key: &str) -> Option<&'static str> {
    if let Some(text) = lookup(primary, key) {
        return Some(text);
    }
    match lookup(EN, key) {
        Some(text) => {
            warn!("missing {} translation for key {:?}", language.code(), key);
            Some(text)
        }
        None => {
            warn!("unknown translation key {:?}", key);
            None
        }
    }
}

const EN: &[(&str, &str)] = &[
    ("app.title", "My Assignments"),
    ("hero.title", "Welcome back"),
    ("hero.subtitle", "Here are your substitute teaching assignments"),
    ("language.switch", "العربية"),
    ("stats.total", "Total Assignments"),
    ("stats.upcoming", "Upcoming"),
    ("stats.completed", "Completed"),
    ("stats.earned", "Total Earned"),
    ("assignments.heading", "Assignments"),
    ("assignments.empty", "No assignments yet"),
    ("assignments.load_error", "Assignments could not be loaded"),
    ("assignment.view_details", "View details"),
    ("assignment.location", "Location"),
    ("assignment.teacher", "Teacher"),
    ("assignment.notes", "Notes"),
    ("assignment.subject", "Subject"),
    ("assignment.date", "Date"),
    ("assignment.payment", "Payment"),
    ("assignment.details", "Assignment Details"),
    ("actions.close", "Close"),
    ("actions.cancel", "Cancel"),
    ("status.pending", "Pending"),
    ("status.completed", "Completed"),
    ("status.cancelled", "Cancelled"),
    ("payment.pending", "Payment pending"),
    ("payment.paid", "Paid"),
    ("payment.cancelled", "Payment cancelled"),
    ("time.today", "Today"),
    ("time.tomorrow", "Tomorrow"),
    ("time.days_left.one", "{count} day left"),
    ("time.days_left.other", "{count} days left"),
    ("currency.amount", "${value}"),
    ("subjects.mathematics", "Mathematics"),
    ("subjects.science", "Science"),
    ("subjects.english", "English"),
    ("subjects.arabic", "Arabic"),
    ("subjects.history", "History"),
    ("subjects.physics", "Physics"),
    ("months.1", "January"),
    ("months.2", "February"),
    ("months.3", "March"),
    ("months.4", "April"),
    ("months.5", "May"),
    ("months.6", "June"),
    ("months.7", "July"),
    ("months.8", "August"),
    ("months.9", "September"),
    ("months.10", "October"),
    ("months.11", "November"),
    ("months.12", "December"),
];

const AR: &[(&str, &str)] = &[
    ("app.title", "مهامي"),
    ("hero.title", "مرحباً بعودتك"),
    ("hero.subtitle", "إليك مهام التدريس البديل الخاصة بك"),
    ("language.switch", "English"),
    ("stats.total", "إجمالي المهام"),
    ("stats.upcoming", "القادمة"),
    ("stats.completed", "المكتملة"),
    ("stats.earned", "إجمالي الأرباح"),
    ("assignments.heading", "المهام"),
    ("assignments.empty", "لا توجد مهام بعد"),
    ("assignments.load_error", "تعذر تحميل المهام"),
    ("assignment.view_details", "عرض التفاصيل"),
    ("assignment.location", "الموقع"),
    ("assignment.teacher", "المعلم"),
    ("assignment.notes", "ملاحظات"),
    ("assignment.subject", "المادة"),
    ("assignment.date", "التاريخ"),
    ("assignment.payment", "الدفع"),
    ("assignment.details", "تفاصيل المهمة"),
    ("actions.close", "إغلاق"),
    ("actions.cancel", "إلغاء"),
    ("status.pending", "قيد الانتظار"),
    ("status.completed", "مكتملة"),
    ("status.cancelled", "ملغاة"),
    ("payment.pending", "الدفع قيد الانتظار"),
    ("payment.paid", "مدفوع"),
    ("payment.cancelled", "الدفع ملغى"),
    ("time.today", "اليوم"),
    ("time.tomorrow", "غداً"),
    ("time.days_left.zero", "لم يتبق أي يوم"),
    ("time.days_left.one", "متبقي يوم واحد"),
    ("time.days_left.two", "متبقي يومان"),
    ("time.days_left.few", "متبقي {count} أيام"),
    ("time.days_left.many", "متبقي {count} يوماً"),
    ("time.days_left.other", "متبقي {count} يوم"),
    ("currency.amount", "{value} $"),
    ("subjects.mathematics", "الرياضيات"),
    ("subjects.science", "العلوم"),
    ("subjects.english", "اللغة الإنجليزية"),
    ("subjects.arabic", "اللغة العربية"),
    ("subjects.history", "التاريخ"),
    ("subjects.physics", "الفيزياء"),
    ("months.1", "يناير"),
    ("months.2", "فبراير"),
    ("months.3", "مارس"),
    ("months.4", "أبريل"),
    ("months.5", "مايو"),
    ("months.6", "يونيو"),
    ("months.7", "يوليو"),
    ("months.8", "أغسطس"),
    ("months.9", "سبتمبر"),
    ("months.10", "أكتوبر"),
    ("months.11", "نوفمبر"),
    ("months.12", "ديسمبر"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_direction() {
        assert_eq!(Language::English.direction(), TextDirection::Ltr);
        assert_eq!(Language::Arabic.direction(), TextDirection::Rtl);
        assert!(LocaleConfig::new(Language::Arabic).direction().is_rtl());
        assert_eq!(TextDirection::Rtl.as_attr(), "rtl");
        assert_eq!(TextDirection::Ltr.forward_arrow(), "→");
        assert_eq!(TextDirection::Rtl.forward_arrow(), "←");
    }

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("ar"), Some(Language::Arabic));
        assert_eq!(Language::from_tag("ar-EG"), Some(Language::Arabic));
        assert_eq!(Language::from_tag("EN_us"), Some(Language::English));
        assert_eq!(Language::from_tag("fr"), None);
        assert_eq!(Language::from_tag(""), None);
        assert_eq!(Language::English.toggled(), Language::Arabic);
    }

    #[test]
    fn test_language_resolve_order() {
        assert_eq!(Language::resolve(Some("ar"), Some("en-US")), Language::Arabic);
        assert_eq!(Language::resolve(Some("en"), Some("ar-EG")), Language::English);
        assert_eq!(Language::resolve(None, Some("ar-EG")), Language::Arabic);
        // unsupported query tags fall through to the browser
        assert_eq!(Language::resolve(Some("fr"), Some("ar")), Language::Arabic);
        assert_eq!(Language::resolve(Some("fr"), Some("de-DE")), Language::English);
        assert_eq!(Language::resolve(None, None), Language::English);
    }

    #[test]
    fn test_every_english_key_has_arabic_translation() {
        for (key, _) in EN {
            assert!(lookup(AR, key).is_some(), "missing Arabic translation for {}", key);
        }
    }

    #[test]
    fn test_plural_keys_cover_every_category() {
        for language in [Language::English, Language::Arabic] {
            for count in 0..=250 {
                let key = format!("time.days_left.{}", language.plural_category(count));
                assert!(lookup(table(language), &key).is_some(), "missing {} {}", language.code(), key);
            }
        }
    }

    #[test]
    fn test_arabic_plural_forms() {
        let ar = LocaleConfig::new(Language::Arabic);
        assert_eq!(ar.t_count("time.days_left", 2), "متبقي يومان");
        assert_eq!(ar.t_count("time.days_left", 3), "متبقي 3 أيام");
        assert_eq!(ar.t_count("time.days_left", 10), "متبقي 10 أيام");
        assert_eq!(ar.t_count("time.days_left", 11), "متبقي 11 يوماً");
        assert_eq!(ar.t_count("time.days_left", 99), "متبقي 99 يوماً");
        assert_eq!(ar.t_count("time.days_left", 100), "متبقي 100 يوم");
        assert_eq!(ar.t_count("time.days_left", 103), "متبقي 103 أيام");

        let en = LocaleConfig::new(Language::English);
        assert_eq!(en.t_count("time.days_left", 1), "1 day left");
        assert_eq!(en.t_count("time.days_left", 11), "11 days left");
    }

    #[test]
    fn test_missing_translation_falls_back_to_english() {
        const PARTIAL: &[(&str, &str)] = &[("actions.close", "إغلاق")];

        assert_eq!(resolve_template(Language::Arabic, PARTIAL, "actions.close"), Some("إغلاق"));
        assert_eq!(resolve_template(Language::Arabic, PARTIAL, "actions.cancel"), Some("Cancel"));
        assert_eq!(resolve_template(Language::Arabic, PARTIAL, "no.such.key"), None);
    }

    #[test]
    fn test_translate_with_params() {
        let en = LocaleConfig::new(Language::English);
        assert_eq!(en.t_with("time.days_left.other", &[("count", "5")]), "5 days left");

        let ar = LocaleConfig::new(Language::Arabic);
        assert_eq!(ar.t_with("time.days_left.few", &[("count", "5")]), "متبقي 5 أيام");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let ar = LocaleConfig::new(Language::Arabic);
        assert_eq!(ar.t("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
        assert_eq!(LocaleConfig::new(Language::English).format_date(date), "December 15, 2024");
        assert_eq!(LocaleConfig::new(Language::Arabic).format_date(date), "15 ديسمبر 2024");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(LocaleConfig::new(Language::English).format_amount(150.0), "$150.00");
        assert_eq!(LocaleConfig::new(Language::Arabic).format_amount(99.5), "99.50 $");
    }
}
