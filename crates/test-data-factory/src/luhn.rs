//! Luhn (mod 10) checksum helpers.
//!
//! Digits are counted from the right. For a payload without its check digit
//! the rightmost payload digit is doubled, which for the 15-digit card payload
//! is the same as doubling every odd 1-indexed position from the left.

/// Reduces a doubled digit to its digit sum.
const fn double_and_reduce(digit: u8) -> u8 {
    let doubled = digit * 2;
    if doubled > 9 { doubled - 9 } else { doubled }
}

/// Sums digits read right to left, doubling those where `double_first`
/// alternates starting at the rightmost digit.
fn weighted_sum<I>(digits_from_right: I, double_first: bool) -> u32
where
    I: Iterator<Item = u8>,
{
    let mut double = double_first;
    let mut sum = 0_u32;
    for digit in digits_from_right {
        let value = if double {
            double_and_reduce(digit)
        } else {
            digit
        };
        sum += u32::from(value);
        double = !double;
    }
    sum
}

/// Computes the check digit to append to `payload`.
///
/// Each payload element must be a decimal digit in `0..=9`.
///
/// # Examples
///
/// ```
/// use test_data_factory::luhn_check_digit;
///
/// // 7992739871 is the classic textbook payload; its check digit is 3.
/// assert_eq!(luhn_check_digit(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1]), 3);
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "the Luhn checksum is defined modulo 10"
)]
pub fn luhn_check_digit(payload: &[u8]) -> u8 {
    debug_assert!(payload.iter().all(|digit| *digit <= 9));
    let sum = weighted_sum(payload.iter().rev().copied(), true);
    let remainder = u8::try_from(sum % 10).unwrap_or_default();
    (10 - remainder) % 10
}

/// Returns `true` when `number` passes Luhn validation.
///
/// ASCII spaces are ignored so formatted card numbers validate directly. Any
/// other non-digit character, or fewer than two digits, fails validation.
///
/// # Examples
///
/// ```
/// use test_data_factory::is_luhn_valid;
///
/// assert!(is_luhn_valid("4539 1488 0343 6467"));
/// assert!(!is_luhn_valid("4539 1488 0343 6468"));
/// assert!(!is_luhn_valid("4539-1488-0343-6467"));
/// ```
#[must_use]
#[expect(
    clippy::integer_division_remainder_used,
    reason = "the Luhn checksum is defined modulo 10"
)]
pub fn is_luhn_valid(number: &str) -> bool {
    let mut digits = Vec::with_capacity(number.len());
    for ch in number.chars().filter(|ch| *ch != ' ') {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        digits.push(u8::try_from(digit).unwrap_or_default());
    }
    if digits.len() < 2 {
        return false;
    }
    weighted_sum(digits.iter().rev().copied(), false) % 10 == 0
}
