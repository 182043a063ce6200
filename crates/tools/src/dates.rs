//! Date parsing shared by hotel search and hotel booking.
//!
//! Both compute nights the same way so a search result's total always matches
//! the amount a subsequent booking would charge.

use chrono::NaiveDate;
use voyagent_core::error::ToolError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 calendar day (YYYY-MM-DD).
pub fn parse_date(label: &str, value: &str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ToolError::InvalidArguments(format!(
            "invalid {label} date '{value}', expected YYYY-MM-DD"
        ))
    })
}

/// Whole nights between check-in and check-out.
///
/// A zero or negative stay is rejected rather than priced at ≤ 0.
pub fn stay_nights(check_in: &str, check_out: &str) -> Result<i64, ToolError> {
    let check_in = parse_date("check_in", check_in)?;
    let check_out = parse_date("check_out", check_out)?;
    let nights = (check_out - check_in).num_days();
    if nights <= 0 {
        return Err(ToolError::InvalidArguments(
            "check_out must be after check_in".into(),
        ));
    }
    Ok(nights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_night_stay() {
        assert_eq!(stay_nights("2025-10-01", "2025-10-04").unwrap(), 3);
    }

    #[test]
    fn zero_night_stay_rejected() {
        let err = stay_nights("2025-10-04", "2025-10-04").unwrap_err();
        assert!(err.to_string().contains("check_out"));
    }

    #[test]
    fn negative_stay_rejected() {
        assert!(stay_nights("2025-10-04", "2025-10-01").is_err());
    }

    #[test]
    fn garbage_date_rejected() {
        let err = stay_nights("October 1st", "2025-10-04").unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("check_in"));
    }
}
