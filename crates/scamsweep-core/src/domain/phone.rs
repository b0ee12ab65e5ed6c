use once_cell::sync::Lazy;
use regex::Regex;

const COUNTRY_CODE: &str = "84";

/// Vietnamese numbering plan: domestic mobile/landline, then the same with
/// `+84` and bare `84` in place of the trunk `0`.
const PHONE_PATTERNS: [&str; 6] = [
    r"^0(9[0-9]|8[0-9]|7[0-9]|5[0-9]|3[2-9])[0-9]{7}$",
    r"^02[0-9][0-9]{7}$",
    r"^\+84(9[0-9]|8[0-9]|7[0-9]|5[0-9]|3[2-9])[0-9]{7}$",
    r"^\+842[0-9][0-9]{7}$",
    r"^84(9[0-9]|8[0-9]|7[0-9]|5[0-9]|3[2-9])[0-9]{7}$",
    r"^842[0-9][0-9]{7}$",
];

static PHONE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    PHONE_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid phone pattern"))
        .collect()
});

/// Strips whitespace, dots, dashes and parentheses. Everything else is kept.
pub fn clean_phone_number(raw: &str) -> String {
    raw.chars().filter(|ch| !is_separator(*ch)).collect()
}

/// Whitespace here is the ECMAScript set: it includes U+FEFF, which shows up
/// in exported number columns, and excludes U+0085.
fn is_separator(ch: char) -> bool {
    matches!(
        ch,
        '.' | '-'
            | '('
            | ')'
            | '\t'
            | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn is_valid_phone_number(raw: &str) -> bool {
    let clean = clean_phone_number(raw);
    if clean.is_empty() {
        return false;
    }
    PHONE_REGEXES.iter().any(|regex| regex.is_match(&clean))
}

/// Formats a number as `84xxxxxxxxx`.
///
/// Invalid input comes back with separators stripped and nothing else
/// touched, so callers must check [`is_valid_phone_number`] before treating
/// the result as canonical.
pub fn format_phone_number(raw: &str) -> String {
    let clean = clean_phone_number(raw);
    if !is_valid_phone_number(&clean) {
        return clean;
    }

    if let Some(rest) = clean.strip_prefix('+') {
        return rest.to_string();
    }
    if clean.starts_with(COUNTRY_CODE) {
        return clean;
    }
    if let Some(rest) = clean.strip_prefix('0') {
        return format!("{COUNTRY_CODE}{rest}");
    }
    clean
}

pub fn normalize_phone_number(raw: &str) -> Option<String> {
    if !is_valid_phone_number(raw) {
        return None;
    }
    Some(format_phone_number(raw))
}

#[cfg(test)]
mod tests {
    use super::{
        clean_phone_number, format_phone_number, is_valid_phone_number, normalize_phone_number,
    };

    #[test]
    fn clean_strips_separators_only() {
        assert_eq!(clean_phone_number(" (091) 234.56-78 "), "0912345678");
        assert_eq!(clean_phone_number("+84 912 345 678"), "+84912345678");
        assert_eq!(clean_phone_number("abc 12"), "abc12");
    }

    #[test]
    fn clean_strips_byte_order_mark_and_unicode_spaces() {
        assert_eq!(clean_phone_number("\u{feff}0912345678"), "0912345678");
        assert_eq!(clean_phone_number("091\u{00a0}234\u{3000}5678"), "0912345678");
        assert_eq!(clean_phone_number("091\u{2007}234\u{202f}5678"), "0912345678");
        assert!(is_valid_phone_number("\u{feff}0912345678"));
        assert_eq!(format_phone_number("\u{feff}0912345678"), "84912345678");
    }

    #[test]
    fn next_line_is_not_a_separator() {
        assert_eq!(clean_phone_number("091234\u{0085}5678"), "091234\u{0085}5678");
        assert!(!is_valid_phone_number("091234\u{0085}5678"));
    }

    #[test]
    fn validity_is_stable_under_separators() {
        assert!(is_valid_phone_number("0912345678"));
        assert!(is_valid_phone_number("091 234 5678"));
        assert!(is_valid_phone_number("091-234-5678"));
        assert!(is_valid_phone_number("(091) 234.5678"));
        assert!(is_valid_phone_number("\t091\n2345678"));
    }

    #[test]
    fn accepts_domestic_mobile_prefixes() {
        for number in [
            "0912345678",
            "0812345678",
            "0712345678",
            "0512345678",
            "0321234567",
            "0391234567",
        ] {
            assert!(is_valid_phone_number(number), "{number} should be valid");
        }
    }

    #[test]
    fn rejects_unassigned_mobile_prefixes() {
        assert!(!is_valid_phone_number("0312345678"));
        assert!(!is_valid_phone_number("0412345678"));
        assert!(!is_valid_phone_number("0612345678"));
        assert!(!is_valid_phone_number("0112345678"));
    }

    #[test]
    fn accepts_landlines_and_country_codes() {
        assert!(is_valid_phone_number("0241234567"));
        assert!(is_valid_phone_number("+84241234567"));
        assert!(is_valid_phone_number("84241234567"));
        assert!(is_valid_phone_number("+84912345678"));
        assert!(is_valid_phone_number("84912345678"));
        assert!(is_valid_phone_number("+84 (91) 234-5678"));
    }

    #[test]
    fn country_code_forms_share_mobile_prefix_rules() {
        assert!(is_valid_phone_number("+84321234567"));
        assert!(is_valid_phone_number("84391234567"));
        assert!(!is_valid_phone_number("84312345678"));
        assert!(!is_valid_phone_number("+84312345678"));
        assert_eq!(format_phone_number("+84321234567"), "84321234567");
    }

    #[test]
    fn rejects_wrong_lengths_and_garbage() {
        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("   "));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("091234567"));
        assert!(!is_valid_phone_number("09123456789"));
        assert!(!is_valid_phone_number("+840912345678"));
        assert!(!is_valid_phone_number("091234567a"));
        assert!(!is_valid_phone_number("++84912345678"));
    }

    #[test]
    fn format_rewrites_to_country_code() {
        assert_eq!(format_phone_number("0987654321"), "84987654321");
        assert_eq!(format_phone_number("+84912345678"), "84912345678");
        assert_eq!(format_phone_number("84912345678"), "84912345678");
        assert_eq!(format_phone_number("024 1234 567"), "84241234567");
        assert_eq!(format_phone_number("+84 24 1234 567"), "84241234567");
    }

    #[test]
    fn format_returns_cleaned_input_when_invalid() {
        assert_eq!(format_phone_number("123"), "123");
        assert_eq!(format_phone_number("1-800 (555)"), "1800555");
        assert_eq!(format_phone_number(""), "");
    }

    #[test]
    fn format_produces_eleven_digits_and_is_idempotent() {
        for raw in [
            "0987654321",
            "091 234 5678",
            "+84 912.345.678",
            "84341234567",
            "0281234567",
        ] {
            assert!(is_valid_phone_number(raw));
            let formatted = format_phone_number(raw);
            assert!(formatted.starts_with("84"), "{formatted}");
            assert_eq!(formatted.len(), 11);
            assert!(formatted.chars().all(|ch| ch.is_ascii_digit()));
            assert!(is_valid_phone_number(&formatted));
            assert_eq!(format_phone_number(&formatted), formatted);
        }
    }

    #[test]
    fn normalize_only_returns_valid_numbers() {
        assert_eq!(
            normalize_phone_number("091.234.5678").as_deref(),
            Some("84912345678")
        );
        assert!(normalize_phone_number("123").is_none());
    }
}
