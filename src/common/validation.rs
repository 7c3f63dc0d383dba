// src/common/validation.rs
//
// Validadores de campo usados pelos payloads (`#[validate(custom(...))]`).

use rust_decimal::Decimal;
use validator::ValidationError;

// Colunas NUMERIC(10, 2)
pub const MAX_DIGITS: u32 = 10;
pub const DECIMAL_PLACES: u32 = 2;

/// Recusa strings vazias ou só com espaços.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Garante que o valor cabe em NUMERIC(10, 2). Os dígitos contam como foram
/// escritos: "12.5000" tem quatro casas decimais.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    let decimals = value.scale();
    let digits = count_digits(value.mantissa().unsigned_abs());
    let whole_digits = digits.saturating_sub(decimals);

    if whole_digits + decimals > MAX_DIGITS {
        let mut err = ValidationError::new("max_digits");
        err.add_param("max_digits".into(), &MAX_DIGITS);
        return Err(err);
    }
    if decimals > DECIMAL_PLACES {
        let mut err = ValidationError::new("max_decimal_places");
        err.add_param("decimal_places".into(), &DECIMAL_PLACES);
        return Err(err);
    }
    if whole_digits > MAX_DIGITS - DECIMAL_PLACES {
        let mut err = ValidationError::new("max_whole_digits");
        err.add_param("whole_digits".into(), &(MAX_DIGITS - DECIMAL_PLACES));
        return Err(err);
    }
    Ok(())
}

fn count_digits(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn code(result: Result<(), ValidationError>) -> String {
        result.unwrap_err().code.to_string()
    }

    #[test]
    fn money_within_precision_is_accepted() {
        assert!(validate_money(&dec("1500.00")).is_ok());
        assert!(validate_money(&dec("99999999.99")).is_ok());
        assert!(validate_money(&dec("0.05")).is_ok());
        assert!(validate_money(&dec("-10.5")).is_ok());
        assert!(validate_money(&dec("12.50")).is_ok());
        assert!(validate_money(&dec("0.00")).is_ok());
    }

    #[test]
    fn too_many_decimal_places_is_rejected() {
        assert_eq!(code(validate_money(&dec("10.123"))), "max_decimal_places");
        // Zeros à direita também contam
        assert_eq!(code(validate_money(&dec("12.5000"))), "max_decimal_places");
    }

    #[test]
    fn too_many_digits_in_total_is_rejected() {
        assert_eq!(code(validate_money(&dec("123456789.123"))), "max_digits");
    }

    #[test]
    fn too_many_whole_digits_is_rejected() {
        assert_eq!(code(validate_money(&dec("123456789"))), "max_whole_digits");
        assert_eq!(code(validate_money(&dec("123456789.1"))), "max_whole_digits");
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(validate_not_blank("Ana").is_ok());
        assert_eq!(code(validate_not_blank("   ")), "blank");
        assert_eq!(code(validate_not_blank("")), "blank");
    }
}
