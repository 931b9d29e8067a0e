use thiserror::Error;

/// Shown in place of a price the API sent in an unusable form
pub const PRICE_PLACEHOLDER: &str = "Price on request";

#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    #[error("price is empty")]
    Empty,
    #[error("price {0:?} is not a number")]
    NotANumber(String),
    #[error("price {0:?} is negative")]
    Negative(String),
}

/// Parse a decimal price string into a finite, non-negative amount
pub fn parse_price(raw: &str) -> Result<f64, PriceError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(PriceError::Empty);
    }

    let value: f64 = text
        .parse()
        .map_err(|_| PriceError::NotANumber(text.to_string()))?;

    if !value.is_finite() {
        return Err(PriceError::NotANumber(text.to_string()));
    }
    if value < 0.0 {
        return Err(PriceError::Negative(text.to_string()));
    }

    Ok(value)
}

/// Format a price the way en-US currency formatting does with no fraction
/// digits: `"1250000.50"` becomes `"$1,250,001"`.
pub fn format_usd(raw: &str) -> Result<String, PriceError> {
    // adding zero turns -0.0 into 0.0
    let value = parse_price(raw)?.round() + 0.0;
    let digits = format!("{:.0}", value);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    Ok(grouped)
}
