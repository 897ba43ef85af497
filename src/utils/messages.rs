//! User-facing message templates for notifications and email.

use chrono::{DateTime, Utc};

use crate::domain::BookingStatus;

/// Subject/title line for a booking status change.
pub fn booking_status_title(status: BookingStatus) -> String {
    match status {
        BookingStatus::Pending => "Booking received".to_string(),
        BookingStatus::Confirmed => "Booking confirmed".to_string(),
        BookingStatus::Completed => "Booking completed".to_string(),
        BookingStatus::Cancelled => "Booking cancelled".to_string(),
    }
}

/// Body text for a booking status change.
pub fn booking_status_body(status: BookingStatus, start_at: DateTime<Utc>) -> String {
    let when = start_at.format("%A %B %-d at %H:%M");
    match status {
        BookingStatus::Pending => {
            format!("We received your booking for {}. We'll confirm it shortly.", when)
        }
        BookingStatus::Confirmed => {
            format!("Your appointment on {} is confirmed. See you there!", when)
        }
        BookingStatus::Completed => {
            format!("Thanks for visiting us on {}. We'd love to hear your feedback.", when)
        }
        BookingStatus::Cancelled => {
            format!("Your appointment on {} has been cancelled.", when)
        }
    }
}

/// Welcome email body for a freshly registered client.
pub fn welcome_body(full_name: &str) -> String {
    format!(
        "Hi {},\n\nWelcome to BarberQueue! You can now browse branches, \
         pick your barber and book your first appointment.\n",
        full_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_titles() {
        assert_eq!(
            booking_status_title(BookingStatus::Confirmed),
            "Booking confirmed"
        );
        assert_eq!(
            booking_status_title(BookingStatus::Cancelled),
            "Booking cancelled"
        );
    }

    #[test]
    fn test_welcome_includes_name() {
        assert!(welcome_body("Ada").contains("Hi Ada"));
    }
}
