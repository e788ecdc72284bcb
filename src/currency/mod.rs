//! Currency and number formatting for dashboard amounts.

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
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Resolves separators for a BCP 47 language tag, falling back to en-US.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" => (',', '.'),
            "fr" | "sv" | "nb" | "fi" | "pl" | "cs" | "ru" => (',', ' '),
            "en" => ('.', ','),
            _ => {
                tracing::debug!(tag, "unknown locale tag, using en-US separators");
                ('.', ',')
            }
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    /// Overrides the currency's minor units; `Some(0)` renders whole amounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_digits: Option<u8>,
    pub screen_reader_mode: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
            fraction_digits: None,
            screen_reader_mode: false,
        }
    }
}

impl FormatOptions {
    /// Whole-unit amounts as shown on the dashboard cards and charts.
    pub fn whole_units() -> Self {
        Self {
            fraction_digits: Some(0),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "PHP" => "₱".into(),
        "CAD" => "CAD".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Rounds half away from zero and folds `-0.0` into `0.0`.
fn round_to(value: f64, precision: u8) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(i32::from(precision));
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, round_to(value, precision));
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if precision > 0 {
        if let Some(pos) = body.rfind(locale.decimal_separator) {
            let mut int_part = body[..pos].to_string();
            insert_grouping(&mut int_part, locale.grouping_separator);
            return format!("{}{}", int_part, &body[pos..]);
        }
    }
    insert_grouping(&mut body, locale.grouping_separator);
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = options
        .fraction_digits
        .unwrap_or_else(|| minor_units_for(code.as_str()));
    let rounded = round_to(amount, precision);
    let negative = rounded < 0.0;
    let mut body = format_number(locale, rounded.abs(), precision);
    if negative {
        body = match options.negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        };
    }
    let symbol = symbol_for(code.as_str());
    let formatted = match options.currency_display {
        CurrencyDisplay::Symbol => match options.negative_style {
            NegativeStyle::Sign if negative => format!("-{}{}", symbol, &body[1..]),
            NegativeStyle::Parentheses if negative => format!("{} {}", symbol, body),
            _ => format!("{}{}", symbol, body),
        },
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
        CurrencyDisplay::SymbolAndCode => format!("{} {} ({})", symbol, body, code.as_str()),
    };
    if options.screen_reader_mode {
        if negative {
            format!(
                "minus {} {}",
                code.as_str(),
                formatted
                    .trim_start_matches('-')
                    .replace(['(', ')'], "")
            )
        } else {
            format!("{} {}", code.as_str(), formatted)
        }
    } else {
        formatted
    }
}

/// Whole-dollar en-US rendering used throughout the dashboard: `1050 -> "$1,050"`,
/// `-50 -> "-$50"`.
pub fn format_currency(amount: f64) -> String {
    format_currency_value(
        amount,
        &CurrencyCode::default(),
        &LocaleConfig::default(),
        &FormatOptions::whole_units(),
    )
}

/// Renders a whole percentage such as a savings rate.
pub fn format_percent(value: i64) -> String {
    format!("{}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_dollar_amounts() {
        assert_eq!(format_currency(1050.0), "$1,050");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(-50.0), "-$50");
        assert_eq!(format_currency(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_currency(124.5), "$125");
        assert_eq!(format_currency(-124.5), "-$125");
        assert_eq!(format_currency(71.666), "$72");
    }

    #[test]
    fn tiny_negatives_do_not_render_negative_zero() {
        assert_eq!(format_currency(-0.4), "$0");
        assert_eq!(format_currency(-0.0), "$0");
    }

    #[test]
    fn non_finite_amounts_render_as_zero() {
        assert_eq!(format_currency(f64::NAN), "$0");
        assert_eq!(format_currency(f64::INFINITY), "$0");
    }

    #[test]
    fn groups_fractional_amounts() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234.5, 2), "1,234.50");
        assert_eq!(format_number(&locale, 999.0, 0), "999");
    }

    #[test]
    fn locale_tags_pick_separators() {
        let german = LocaleConfig::for_tag("de-DE");
        assert_eq!(german.decimal_separator, ',');
        assert_eq!(german.grouping_separator, '.');
        assert_eq!(LocaleConfig::for_tag("xx").decimal_separator, '.');
    }

    #[test]
    fn percent_suffix() {
        assert_eq!(format_percent(33), "33%");
        assert_eq!(format_percent(-12), "-12%");
    }
}
