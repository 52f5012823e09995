use serde_json::Value;

/// A word is acceptable iff it is a JSON string of exactly five characters.
/// No alphabetic or dictionary check: digits and symbols pass. Non-string
/// values (numbers, arrays, null) are simply invalid, not type errors, so a
/// mixed approval batch filters them out silently.
pub fn is_valid_word(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.chars().count() == 5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_length_boundary() {
        assert!(!is_valid_word(&json!("pear")));
        assert!(is_valid_word(&json!("apple")));
        assert!(!is_valid_word(&json!("planet")));
    }

    #[test]
    fn test_no_alphabetic_check() {
        assert!(is_valid_word(&json!("12345")));
        assert!(is_valid_word(&json!("a-b-c")));
    }

    #[test]
    fn test_non_strings_rejected() {
        assert!(!is_valid_word(&json!(12345)));
        assert!(!is_valid_word(&json!(["a", "p", "p", "l", "e"])));
        assert!(!is_valid_word(&Value::Null));
        assert!(!is_valid_word(&json!(true)));
    }

    #[test]
    fn test_empty_string_rejected() {
        assert!(!is_valid_word(&json!("")));
    }
}
