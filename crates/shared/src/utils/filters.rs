/// Normalizes an optional list-endpoint filter: an empty or whitespace-only
/// string means "filter absent" and must not narrow the query.
pub fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Zero is the "filter absent" marker for numeric filters.
pub fn non_zero(value: i32) -> Option<i32> {
    if value == 0 { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_absent() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
    }

    #[test]
    fn present_string_passes_through() {
        assert_eq!(non_empty("pending"), Some("pending"));
    }

    #[test]
    fn zero_is_absent() {
        assert_eq!(non_zero(0), None);
        assert_eq!(non_zero(42), Some(42));
    }
}
