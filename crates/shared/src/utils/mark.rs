pub fn mask_phone(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() < 7 {
        "****".to_string()
    } else {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 2..].iter().collect();
        format!("{prefix}****{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_digits() {
        assert_eq!(mask_phone("13812345678"), "138****78");
    }

    #[test]
    fn short_input_is_fully_masked() {
        assert_eq!(mask_phone("1234"), "****");
    }

    #[test]
    fn multibyte_input_masks_without_panicking() {
        assert_eq!(mask_phone("aaé1234567"), "aaé****67");
    }
}
