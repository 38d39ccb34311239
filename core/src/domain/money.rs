//! Bounds of the amounts stored as `DECIMAL(10, 2)`.

use rust_decimal::Decimal;

use crate::errors::ValidationError;

/// Digits after the decimal point an amount may carry
pub const AMOUNT_SCALE: u32 = 2;

/// Largest storable amount, 99999999.99
pub fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999, AMOUNT_SCALE)
}

/// Checks `0 <= value <= 99999999.99` with at most two decimal places
pub fn check_amount(field: &str, value: Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value > max_amount() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: max_amount().to_string(),
        });
    }
    if value.normalize().scale() > AMOUNT_SCALE {
        return Err(ValidationError::invalid(field));
    }
    Ok(())
}
