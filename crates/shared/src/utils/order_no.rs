use chrono::Utc;
use rand::{Rng, rng};
use regex::Regex;

/// Builds a unique order identifier: `ORD-<unix millis>-<6 random digits>`.
/// Uniqueness is ultimately enforced by the `order_id` column constraint.
pub fn generate_order_id() -> Result<String, Box<dyn std::error::Error>> {
    let mut rng = rng();

    let random_digits: String = (0..6)
        .map(|_| rng.random_range(0..10).to_string())
        .collect();

    let candidate = format!("ORD-{}-{random_digits}", Utc::now().timestamp_millis());

    let re = Regex::new(r"^ORD-\d{10,}-\d{6}$")?;
    if re.is_match(&candidate) {
        Ok(candidate)
    } else {
        Err("Generated order id is invalid".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_has_expected_shape() {
        let id = generate_order_id().unwrap();
        assert!(id.starts_with("ORD-"));
        assert_eq!(id.split('-').count(), 3);
    }
}
