use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Parse a formatted amount string ("1,234.56", "-400", "$2,000", "(150)")
/// into an f64.
///
/// Total over all inputs: blank cells, stray symbols, and outright garbage
/// parse to 0.0 so that sparse category rows never poison an aggregation.
/// Never panics and never returns NaN.
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // Accountant-style parenthesized negatives appear in some provider exports.
    let parenthesized = trimmed.starts_with('(') && trimmed.ends_with(')');

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let parsed = cleaned.parse::<f64>().unwrap_or(0.0);
    let amount = if parenthesized { -parsed.abs() } else { parsed };

    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// Format an amount as USD, e.g. `$1,234.50` / `-$1,234.50`.
pub fn format_amount(value: f64) -> String {
    format_amount_in(value, Currency::USD)
}

/// Format an amount with the given currency's symbol, two fixed decimal
/// places, and en-locale thousands grouping. Non-finite input renders as
/// zero.
///
/// Formatting is not the inverse of [`parse_amount`]: formatting fixes two
/// decimals while parsing accepts arbitrary precision.
pub fn format_amount_in(value: f64, currency: Currency) -> String {
    let amount = if value.is_finite() { value } else { 0.0 };

    // Work in cents so that e.g. 1.999 carries into the integer part.
    let total_cents = (amount.abs() * 100.0).round() as i64;
    let units = (total_cents / 100).to_formatted_string(&Locale::en);
    let cents = total_cents % 100;

    let sign = if amount < 0.0 && total_cents > 0 { "-" } else { "" };
    let symbol = currency_symbol(currency);

    format!("{}{}{}.{:02}", sign, symbol, units, cents)
}

// USD renders with the bare dollar sign; everything else uses the ISO symbol.
fn currency_symbol(currency: Currency) -> String {
    if currency == Currency::USD {
        "$".to_string()
    } else {
        currency.symbol().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(parse_amount("1000"), 1000.0);
        assert_eq!(parse_amount("1,000"), 1000.0);
        assert_eq!(parse_amount("1,234,567.89"), 1234567.89);
    }

    #[test]
    fn test_parse_negatives() {
        assert_eq!(parse_amount("-400"), -400.0);
        assert_eq!(parse_amount("-1,234.56"), -1234.56);
        assert_eq!(parse_amount("(150)"), -150.0);
        assert_eq!(parse_amount("(1,000.50)"), -1000.5);
    }

    #[test]
    fn test_parse_currency_symbols() {
        assert_eq!(parse_amount("$2,000"), 2000.0);
        assert_eq!(parse_amount("$-5.25"), -5.25);
    }

    #[test]
    fn test_parse_is_total() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount("--"), 0.0);
        assert_eq!(parse_amount("1-2"), 0.0);
        assert_eq!(parse_amount("."), 0.0);

        for raw in ["", "abc", "12.3.4", "∞", "NaN"] {
            let parsed = parse_amount(raw);
            assert!(parsed.is_finite(), "parse_amount({:?}) was not finite", raw);
        }
    }

    #[test]
    fn test_format_basic() {
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(1000000.0), "$1,000,000.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_amount(-1234.5), "-$1,234.50");
        // Values that round to zero lose their sign.
        assert_eq!(format_amount(-0.001), "$0.00");
    }

    #[test]
    fn test_format_rounding_carries() {
        assert_eq!(format_amount(1.999), "$2.00");
        assert_eq!(format_amount(0.005), "$0.01");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_amount(f64::NAN), "$0.00");
        assert_eq!(format_amount(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_format_other_currency() {
        assert_eq!(format_amount_in(12.0, Currency::EUR), "€12.00");
    }

    #[test]
    fn test_no_round_trip_identity() {
        // Parsing accepts more precision than formatting emits.
        let parsed = parse_amount("10.126");
        assert_eq!(parsed, 10.126);
        assert_eq!(format_amount(parsed), "$10.13");
    }
}
