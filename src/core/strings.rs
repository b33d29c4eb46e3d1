//! String helpers. `None` plays the part of a missing input.

/// Reverses by Unicode scalar value, so `reverse(&reverse(s)) == s`.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

pub fn char_length(input: Option<&str>) -> usize {
    input.map_or(0, |s| s.chars().count())
}

pub fn is_null_or_empty(input: Option<&str>) -> bool {
    input.map_or(true, str::is_empty)
}

pub fn to_upper_case(input: Option<&str>) -> Option<String> {
    input.map(str::to_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
        assert_eq!(reverse("a"), "a");
        assert_eq!(reverse("12345"), "54321");
        assert_eq!(reverse("привет"), "тевирп");
    }

    #[test]
    fn test_char_length() {
        assert_eq!(char_length(Some("hello")), 5);
        assert_eq!(char_length(Some("")), 0);
        assert_eq!(char_length(None), 0);
        assert_eq!(char_length(Some("żółw")), 4);
    }

    #[test]
    fn test_is_null_or_empty() {
        assert!(is_null_or_empty(None));
        assert!(is_null_or_empty(Some("")));
        assert!(!is_null_or_empty(Some(" ")));
        assert!(!is_null_or_empty(Some("text")));
    }

    #[test]
    fn test_to_upper_case() {
        assert_eq!(to_upper_case(Some("hello")).as_deref(), Some("HELLO"));
        assert_eq!(to_upper_case(Some("MiXeD 1")).as_deref(), Some("MIXED 1"));
        assert_eq!(to_upper_case(None), None);
    }
}
