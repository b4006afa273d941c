use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verify_core::time::fixed_now;

    #[test]
    fn formats_in_utc() {
        assert_eq!(format_datetime(fixed_now()), "Nov 14, 2023 22:13 UTC");
    }
}
