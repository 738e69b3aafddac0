//! Expiry Bucketing
//!
//! Client-side "days until expiry" derivation for pantry rows, computed from
//! the current date and the item's estimated expiry date.

use chrono::{NaiveDate, NaiveDateTime};

/// Display bucket for an item's remaining shelf life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// No expiry date on record
    Unknown,
    Expired,
    Today,
    /// Expiring within three days
    Soon(i64),
    Days(i64),
}

impl ExpiryStatus {
    pub fn from_dates(expiry: Option<NaiveDateTime>, today: NaiveDate) -> Self {
        let Some(expiry) = expiry else {
            return Self::Unknown;
        };
        let days = (expiry.date() - today).num_days();
        if days < 0 {
            Self::Expired
        } else if days == 0 {
            Self::Today
        } else if days <= 3 {
            Self::Soon(days)
        } else {
            Self::Days(days)
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Unknown => "N/A".to_string(),
            Self::Expired => "Expired".to_string(),
            Self::Today => "Today!".to_string(),
            Self::Soon(days) | Self::Days(days) => format!("{days} days"),
        }
    }

    /// CSS class for the table cell; empty when no marker applies
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Today | Self::Soon(_) => "expiring-soon",
            Self::Unknown | Self::Days(_) => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    fn expiry_in(days: i64) -> Option<NaiveDateTime> {
        Some((today() + Duration::days(days)).and_hms_opt(0, 0, 0).unwrap())
    }

    #[test]
    fn yesterday_is_expired() {
        let status = ExpiryStatus::from_dates(expiry_in(-1), today());
        assert_eq!(status, ExpiryStatus::Expired);
        assert_eq!(status.label(), "Expired");
        assert_eq!(status.css_class(), "expired");
    }

    #[test]
    fn same_day_is_today() {
        let status = ExpiryStatus::from_dates(expiry_in(0), today());
        assert_eq!(status, ExpiryStatus::Today);
        assert_eq!(status.label(), "Today!");
        assert_eq!(status.css_class(), "expiring-soon");
    }

    #[test]
    fn two_days_out_is_marked_soon() {
        let status = ExpiryStatus::from_dates(expiry_in(2), today());
        assert_eq!(status, ExpiryStatus::Soon(2));
        assert_eq!(status.label(), "2 days");
        assert_eq!(status.css_class(), "expiring-soon");
    }

    #[test]
    fn ten_days_out_is_plain() {
        let status = ExpiryStatus::from_dates(expiry_in(10), today());
        assert_eq!(status, ExpiryStatus::Days(10));
        assert_eq!(status.label(), "10 days");
        assert_eq!(status.css_class(), "");
    }

    #[test]
    fn missing_date_is_unknown() {
        let status = ExpiryStatus::from_dates(None, today());
        assert_eq!(status, ExpiryStatus::Unknown);
        assert_eq!(status.label(), "N/A");
    }
}
