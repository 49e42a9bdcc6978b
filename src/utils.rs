use once_cell::sync::Lazy;
use regex::Regex;

// ASCII only: `\D` would keep non-Latin digits such as '٣'
static NON_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Strip every character that is not an ASCII digit, keeping the digits in
/// their original order. Never fails; the result may be empty.
///
/// # Examples
/// ```
/// use coffee_ratio::utils::sanitize_digits;
/// assert_eq!(sanitize_digits("12a3b"), "123");
/// assert_eq!(sanitize_digits("-4.5"), "45");
/// assert_eq!(sanitize_digits("abc"), "");
/// ```
pub fn sanitize_digits(input: &str) -> String {
    NON_DIGIT_REGEX.replace_all(input, "").into_owned()
}

/// Parse a base-10 number, treating anything unparseable (including the
/// empty string) as 0.
pub fn parse_number_or_zero(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

/// Caret offset just past the end of `value`, in UTF-16 code units as the
/// DOM selection API expects.
pub fn caret_end(value: &str) -> u32 {
    value.encode_utf16().count() as u32
}

/// Result of sanitizing the live contents of a text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedEdit {
    pub digits: String,
    /// Caret position in `digits`, in UTF-16 code units.
    pub caret: u32,
    /// The field shows characters that were stripped and must be rewritten.
    pub needs_write_back: bool,
}

/// Sanitize `raw` and carry a caret at UTF-16 offset `caret` over to the
/// sanitized text, so it stays after the same digit.
pub fn sanitize_edit(raw: &str, caret: u32) -> SanitizedEdit {
    let digits = sanitize_digits(raw);
    let mut offset = 0u32;
    let mut digits_before = 0u32;
    for c in raw.chars() {
        if offset >= caret {
            break;
        }
        offset += c.len_utf16() as u32;
        if c.is_ascii_digit() {
            digits_before += 1;
        }
    }
    SanitizedEdit {
        needs_write_back: digits != raw,
        digits,
        caret: digits_before,
    }
}
