use std::fmt;

/// Amounts are plain floating-point numbers, as entered by the user.
/// No rounding or currency precision is applied anywhere in the ledger.
pub type Amount = f64;

pub const CURRENCY_SYMBOL: &str = "$";

/// Format an amount with two decimals.
/// Example: 1000.0 -> "1000.00", -12.5 -> "-12.50"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Format an amount prefixed with the currency symbol.
/// Example: 50.0 -> "$50.00", -50.0 -> "$-50.00"
pub fn format_currency(amount: Amount) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_amount(amount))
}

/// Parse user input into an amount.
/// Accepts anything `f64` accepts except NaN and infinities. Sign is not checked.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat(input.to_string()))?;

    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite(input.to_string()));
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat(String),
    NotFinite(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is empty"),
            ParseAmountError::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            ParseAmountError::NotFinite(s) => write!(f, "'{}' is not a finite number", s),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1000.0), "1000.00");
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-50.0), "-50.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(50.0), "$50.00");
        assert_eq!(format_currency(-50.0), "$-50.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount(" 12.34 "), Ok(12.34));
        assert_eq!(parse_amount(".5"), Ok(0.5));
        assert_eq!(parse_amount("-20"), Ok(-20.0));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseAmountError::Empty));
        assert!(matches!(
            parse_amount("abc"),
            Err(ParseAmountError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_amount("12.34.56"),
            Err(ParseAmountError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_amount("inf"),
            Err(ParseAmountError::NotFinite(_))
        ));
        assert!(matches!(
            parse_amount("NaN"),
            Err(ParseAmountError::NotFinite(_))
        ));
    }
}
