//! # Check Digit Arithmetic
//!
//! Pure EAN-13 and UPC-A check digit computation and repair.
//!
//! Both symbologies use a weighted sum over the data digits, but with
//! inverted parity: EAN-13 weights even 0-indexed positions by 1 and odd
//! positions by 3, UPC-A does the opposite.
//!
//! A wrong-length input returns `Ok(None)` — length problems are the
//! caller's recoverable business. A non-decimal character is a fault.

use thiserror::Error;

/// Errors from check digit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// The input contained a character outside `0-9`.
    #[error("non-digit character {0:?} in barcode data")]
    NonDigit(char),
}

/// Compute the EAN-13 checksum for a 12-digit body.
///
/// Returns the 13-digit code (body + checksum), or `None` when the input
/// is not exactly 12 characters long.
///
/// ## Example
///
/// ```
/// use cebra::barcode::checksum::ean13_checksum;
///
/// assert_eq!(
///     ean13_checksum("400638133393").unwrap(),
///     Some("4006381333931".to_string())
/// );
/// assert_eq!(ean13_checksum("12345").unwrap(), None);
/// ```
pub fn ean13_checksum(digits: &str) -> Result<Option<String>, ChecksumError> {
    if digits.chars().count() != 12 {
        return Ok(None);
    }
    let values = digit_values(digits)?;
    let checksum = ean13_check_value(&values);
    Ok(Some(format!("{digits}{checksum}")))
}

/// Validate a 13-digit EAN-13 code, substituting the check digit when it
/// does not match the first 12 digits.
///
/// Returns the input unchanged when the checksum is already correct, or
/// `None` when the input is not exactly 13 characters long.
pub fn fix_ean13(digits: &str) -> Result<Option<String>, ChecksumError> {
    if digits.chars().count() != 13 {
        return Ok(None);
    }
    let values = digit_values(digits)?;
    let expected = ean13_check_value(&values[..12]);
    if values[12] == expected {
        Ok(Some(digits.to_string()))
    } else {
        Ok(Some(format!("{}{expected}", &digits[..12])))
    }
}

/// Compute the UPC-A check digit for an 11-digit body.
///
/// Returns the 12-digit code, or `None` when the input is not exactly
/// 11 characters long.
pub fn upca_check_digit(digits: &str) -> Result<Option<String>, ChecksumError> {
    if digits.chars().count() != 11 {
        return Ok(None);
    }
    let values = digit_values(digits)?;
    let check = upca_check_value(&values);
    Ok(Some(format!("{digits}{check}")))
}

/// Validate a 12-digit UPC-A code, substituting the check digit when it
/// does not match the first 11 digits.
///
/// Returns the input unchanged when the check digit is already correct,
/// or `None` when the input is not exactly 12 characters long.
pub fn fix_upca(digits: &str) -> Result<Option<String>, ChecksumError> {
    if digits.chars().count() != 12 {
        return Ok(None);
    }
    let values = digit_values(digits)?;
    let expected = upca_check_value(&values[..11]);
    if values[11] == expected {
        Ok(Some(digits.to_string()))
    } else {
        Ok(Some(format!("{}{expected}", &digits[..11])))
    }
}

fn digit_values(digits: &str) -> Result<Vec<u32>, ChecksumError> {
    digits
        .chars()
        .map(|c| c.to_digit(10).ok_or(ChecksumError::NonDigit(c)))
        .collect()
}

/// Weight 1 on even 0-indexed positions, 3 on odd.
fn ean13_check_value(body: &[u32]) -> u32 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

/// Weight 3 on even 0-indexed positions, 1 on odd.
fn upca_check_value(body: &[u32]) -> u32 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d * 3 } else { d })
        .sum();
    match sum % 10 {
        0 => 0,
        remainder => 10 - remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_checksum() {
        assert_eq!(
            ean13_checksum("400638133393").unwrap(),
            Some("4006381333931".to_string())
        );
        assert_eq!(
            ean13_checksum("123456789012").unwrap(),
            Some("1234567890128".to_string())
        );
    }

    #[test]
    fn test_ean13_checksum_wrong_length() {
        assert_eq!(ean13_checksum("12345").unwrap(), None);
        assert_eq!(ean13_checksum("4006381333931").unwrap(), None);
        assert_eq!(ean13_checksum("").unwrap(), None);
    }

    #[test]
    fn test_ean13_non_digit_is_a_fault() {
        assert_eq!(
            ean13_checksum("40063813339x"),
            Err(ChecksumError::NonDigit('x'))
        );
    }

    #[test]
    fn test_fix_ean13_substitutes_wrong_digit() {
        // Every wrong final digit gets replaced by the correct one.
        for wrong in 0..10u32 {
            if wrong == 1 {
                continue;
            }
            let input = format!("400638133393{wrong}");
            assert_eq!(
                fix_ean13(&input).unwrap(),
                Some("4006381333931".to_string())
            );
        }
    }

    #[test]
    fn test_fix_ean13_keeps_correct_code() {
        assert_eq!(
            fix_ean13("4006381333931").unwrap(),
            Some("4006381333931".to_string())
        );
    }

    #[test]
    fn test_fix_ean13_is_idempotent_over_checksum() {
        let code = ean13_checksum("978014300723").unwrap().unwrap();
        assert_eq!(fix_ean13(&code).unwrap(), Some(code));
    }

    #[test]
    fn test_fix_ean13_wrong_length() {
        assert_eq!(fix_ean13("400638133393").unwrap(), None);
    }

    #[test]
    fn test_upca_check_digit() {
        assert_eq!(
            upca_check_digit("03600029145").unwrap(),
            Some("036000291452".to_string())
        );
    }

    #[test]
    fn test_upca_check_digit_wrong_length() {
        assert_eq!(upca_check_digit("123").unwrap(), None);
        assert_eq!(upca_check_digit("036000291452").unwrap(), None);
    }

    #[test]
    fn test_upca_zero_remainder_yields_zero() {
        // 11 zeros sum to 0, so the check digit must be 0, not 10.
        assert_eq!(
            upca_check_digit("00000000000").unwrap(),
            Some("000000000000".to_string())
        );
    }

    #[test]
    fn test_fix_upca() {
        assert_eq!(
            fix_upca("036000291459").unwrap(),
            Some("036000291452".to_string())
        );
        assert_eq!(
            fix_upca("036000291452").unwrap(),
            Some("036000291452".to_string())
        );
        assert_eq!(fix_upca("03600029145").unwrap(), None);
    }

    #[test]
    fn test_fix_upca_is_idempotent_over_check_digit() {
        let code = upca_check_digit("12345678901").unwrap().unwrap();
        assert_eq!(fix_upca(&code).unwrap(), Some(code));
    }
}
