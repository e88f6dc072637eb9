use chrono::{NaiveDateTime, TimeZone, Utc};

pub fn format_datetime(value: &NaiveDateTime) -> String {
    Utc.from_utc_datetime(value).to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn formats_naive_as_rfc3339_utc() {
        let dt = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(format_datetime(&dt), "2025-03-01T12:30:00+00:00");
    }
}
