//! Locale-aware number and currency formatting.
//!
//! Stands in for the browser's built-in formatter: grouping separator,
//! decimal separator, currency symbol, and symbol placement are derived from
//! the locale tag. Only the conventions of the curated locales are modeled;
//! anything else formats with the en-US conventions, which is also where
//! non-curated locale tags land.

/// Separator conventions for one locale family.
struct Separators {
    group: &'static str,
    decimal: char,
}

/// Where the currency symbol sits relative to the amount.
enum SymbolPlacement {
    Prefix,
    SuffixWithSpace,
}

fn separators(locale_tag: &str) -> Separators {
    match language_of(locale_tag) {
        // European: 1.234,56
        "es" | "de" => Separators {
            group: ".",
            decimal: ',',
        },
        // French: 1 234,56
        "fr" => Separators {
            group: "\u{202f}",
            decimal: ',',
        },
        // en-US, zh-CN, ar-SA and everything else: 1,234.56
        _ => Separators {
            group: ",",
            decimal: '.',
        },
    }
}

fn symbol_placement(locale_tag: &str) -> SymbolPlacement {
    match language_of(locale_tag) {
        "es" | "de" | "fr" => SymbolPlacement::SuffixWithSpace,
        _ => SymbolPlacement::Prefix,
    }
}

/// Currency symbol for an ISO code; unknown codes fall back to the code
/// itself.
fn currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "¥",
        "SAR" => "﷼",
        other => other,
    }
}

fn language_of(locale_tag: &str) -> &str {
    locale_tag.split('-').next().unwrap_or(locale_tag)
}

/// Format a number with the grouping and decimal conventions of the given
/// locale tag.
///
/// Integers render without a fractional part; fractional values render with
/// two decimal places, the way amounts appear on the page.
pub fn format_number(value: f64, locale_tag: &str) -> String {
    let seps = separators(locale_tag);
    let negative = value.is_sign_negative() && value != 0.0;
    let value = value.abs();

    let integer_part = value.trunc() as u64;
    let fraction = value.fract();

    let mut grouped = String::new();
    let digits = integer_part.to_string();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(seps.group);
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);

    if fraction > f64::EPSILON {
        let cents = (fraction * 100.0).round() as u64;
        // Rounding the fraction up to 100 carries into the integer part;
        // re-render from the rounded total instead
        if cents >= 100 {
            return format_number(value.round() * if negative { -1.0 } else { 1.0 }, locale_tag);
        }
        out.push(seps.decimal);
        out.push_str(&format!("{:02}", cents));
    }

    out
}

/// Format a currency amount for the given locale tag.
///
/// Currency amounts always carry two decimal places. The symbol is placed
/// per locale convention; unknown currency codes render as the code itself.
pub fn format_currency(amount: f64, currency: &str, locale_tag: &str) -> String {
    let seps = separators(locale_tag);
    let negative = amount.is_sign_negative() && amount != 0.0;
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let integer_part = cents_total / 100;
    let cents = cents_total % 100;

    let mut grouped = String::new();
    let digits = integer_part.to_string();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(seps.group);
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    let symbol = currency_symbol(currency);
    match symbol_placement(locale_tag) {
        SymbolPlacement::Prefix => {
            format!("{}{}{}{}{:02}", sign, symbol, grouped, seps.decimal, cents)
        }
        SymbolPlacement::SuffixWithSpace => {
            format!("{}{}{}{:02}\u{a0}{}", sign, grouped, seps.decimal, cents, symbol)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Number Formatting Tests ====================

    #[test]
    fn test_format_number_en_us() {
        assert_eq!(format_number(1234567.0, "en-US"), "1,234,567");
        assert_eq!(format_number(1234.56, "en-US"), "1,234.56");
    }

    #[test]
    fn test_format_number_es_es() {
        assert_eq!(format_number(1234567.0, "es-ES"), "1.234.567");
        assert_eq!(format_number(1234.56, "es-ES"), "1.234,56");
    }

    #[test]
    fn test_format_number_de_de() {
        assert_eq!(format_number(1234.56, "de-DE"), "1.234,56");
    }

    #[test]
    fn test_format_number_fr_fr() {
        assert_eq!(format_number(1234.56, "fr-FR"), "1\u{202f}234,56");
    }

    #[test]
    fn test_format_number_zh_cn_matches_en() {
        assert_eq!(format_number(98765.0, "zh-CN"), "98,765");
    }

    #[test]
    fn test_format_number_unknown_tag_uses_en_conventions() {
        assert_eq!(format_number(1000.0, "xx-XX"), "1,000");
    }

    #[test]
    fn test_format_number_small_values() {
        assert_eq!(format_number(0.0, "en-US"), "0");
        assert_eq!(format_number(7.0, "en-US"), "7");
        assert_eq!(format_number(999.0, "en-US"), "999");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234.5, "en-US"), "-1,234.50");
    }

    #[test]
    fn test_format_number_fraction_rounds_to_two_places() {
        assert_eq!(format_number(0.5, "en-US"), "0.50");
        assert_eq!(format_number(2.999, "en-US"), "3");
    }

    // ==================== Currency Formatting Tests ====================

    #[test]
    fn test_format_currency_usd_en() {
        assert_eq!(format_currency(1234.5, "USD", "en-US"), "$1,234.50");
    }

    #[test]
    fn test_format_currency_whole_amount_keeps_cents() {
        assert_eq!(format_currency(42.0, "USD", "en-US"), "$42.00");
    }

    #[test]
    fn test_format_currency_eur_de() {
        assert_eq!(format_currency(1234.5, "EUR", "de-DE"), "1.234,50\u{a0}€");
    }

    #[test]
    fn test_format_currency_eur_fr() {
        assert_eq!(format_currency(9.99, "EUR", "fr-FR"), "9,99\u{a0}€");
    }

    #[test]
    fn test_format_currency_unknown_code_renders_code() {
        assert_eq!(format_currency(10.0, "XTS", "en-US"), "XTS10.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-5.25, "USD", "en-US"), "-$5.25");
    }

    #[test]
    fn test_format_currency_sar_ar() {
        // ar-SA uses prefix placement with Western digits
        assert_eq!(format_currency(100.0, "SAR", "ar-SA"), "﷼100.00");
    }
}
