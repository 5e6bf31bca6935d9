//! CPF (Brazilian taxpayer id) validation and formatting.
//!
//! A CPF is an 11-digit identifier whose last two digits are check digits
//! derived from the preceding ones via weighted checksums. Values are
//! persisted and compared in canonical form (11 raw digits); the grouped
//! `XXX.XXX.XXX-XX` form is display-only.

/// Strips every non-digit character from the input.
///
/// # Examples
///
/// ```rust
/// use staffd::cpf::clean;
///
/// assert_eq!(clean("111.444.777-35"), "11144477735");
/// assert_eq!(clean(""), "");
/// ```
pub fn clean(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Computes one check digit over `digits` with weights descending from
/// `start_weight` down to 2. `11 - (sum % 11)` folded to 0 when >= 10.
fn check_digit(digits: &[u8], start_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (start_weight - i as u32))
        .sum();
    let remainder = 11 - (sum % 11);
    if remainder >= 10 { 0 } else { remainder as u8 }
}

/// Validates a CPF, tolerating embedded punctuation.
///
/// Rules:
/// - cleaned input must be exactly 11 digits;
/// - the eleven all-same-digit sequences are rejected outright;
/// - both check digits must match their weighted checksums.
///
/// # Examples
///
/// ```rust
/// use staffd::cpf::is_valid;
///
/// assert!(is_valid("11144477735"));
/// assert!(is_valid("111.444.777-35"));
/// assert!(!is_valid("11144477736"));
/// assert!(!is_valid("00000000000"));
/// ```
pub fn is_valid(input: &str) -> bool {
    let cleaned = clean(input);
    if cleaned.len() != 11 {
        return false;
    }

    let digits: Vec<u8> = cleaned.bytes().map(|b| b - b'0').collect();

    // Degenerate sequences like "00000000000" would pass the arithmetic.
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[0..9], 10) == digits[9] && check_digit(&digits[0..10], 11) == digits[10]
}

/// Formats a known-complete CPF as `XXX.XXX.XXX-XX`.
///
/// Returns the input unchanged when the cleaned value is not exactly 11
/// digits; use [`mask_input`] for partial values typed by a user.
pub fn format(input: &str) -> String {
    let cleaned = clean(input);
    if cleaned.len() != 11 {
        return input.to_string();
    }
    group(&cleaned)
}

/// Masks raw user input for display while typing.
///
/// Cleans, truncates to 11 digits, then groups whatever is available:
/// `123` -> `123`, `1234` -> `123.4`, `1234567890123` -> `123.456.789-01`.
pub fn mask_input(input: &str) -> String {
    let mut cleaned = clean(input);
    cleaned.truncate(11);
    group(&cleaned)
}

/// Progressive 3-3-3-2 grouping of up to 11 digits.
fn group(digits: &str) -> String {
    match digits.len() {
        0..=3 => digits.to_string(),
        4..=6 => format!("{}.{}", &digits[0..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[0..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}
