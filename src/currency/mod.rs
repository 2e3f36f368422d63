use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("INR")
    }
}

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DigitGrouping {
    /// 1,234,567
    Western,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// Locale-aware number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: DigitGrouping,
}

impl LocaleConfig {
    /// Resolves the handful of tags the dashboard ships with. Unknown tags
    /// format like `en-US`.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator, grouping) = match tag {
            "en-IN" | "hi-IN" => ('.', ',', DigitGrouping::Indian),
            "de-DE" | "es-ES" | "it-IT" => (',', '.', DigitGrouping::Western),
            "fr-FR" => (',', ' ', DigitGrouping::Western),
            _ => ('.', ',', DigitGrouping::Western),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            grouping,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("en-IN")
    }
}

/// Bundles everything needed to render amounts the same way across a report.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub fraction_digits: u8,
}

impl CurrencyFormatter {
    pub fn new(code: CurrencyCode, locale: LocaleConfig, fraction_digits: u8) -> Self {
        Self {
            code,
            locale,
            fraction_digits,
        }
    }

    pub fn format(&self, amount: f64) -> String {
        format_currency_value(amount, &self.code, &self.locale, self.fraction_digits)
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(CurrencyCode::default(), LocaleConfig::default(), 0)
    }
}

/// Renders `amount` as `<sign><symbol><grouped digits>`, e.g. `-₹1,23,457`.
///
/// Halves round away from zero. Non-finite amounts render as zero.
pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    fraction_digits: u8,
) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let factor = 10f64.powi(i32::from(fraction_digits));
    let rounded = (amount.abs() * factor).round() / factor;
    let body = format_number(locale, rounded, fraction_digits);
    let sign = if amount < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol_for(code.as_str()), body)
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => format!("{} ", code),
    }
}

/// Formats a non-negative value with the locale's separators.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = match locale.grouping {
        DigitGrouping::Western => group_digits(int_part, locale.grouping_separator, 3, 3),
        DigitGrouping::Indian => group_digits(int_part, locale.grouping_separator, 3, 2),
    };
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

/// Inserts `separator` after the first `lead` digits from the right, then
/// every `rest` digits.
fn group_digits(digits: &str, separator: char, lead: usize, rest: usize) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut size = lead;
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        size = rest;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(&separator.to_string())
}

/// Short timeline label such as `05 Jan`.
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{:02} {}", date.day(), month_label(date.month()))
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}
