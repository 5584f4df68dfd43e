//! Outbound mail: one fixed template per appointment status plus the booking
//! and reschedule confirmations. Sending is synchronous and best-effort; a
//! transport failure is logged and reported as a bool, never an error.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, Message, SmtpTransport, Transport,
};
use std::str::FromStr;
use tracing::warn;

use crate::{
    config::Settings,
    models::entries::{
        attendee_display, category_display, Entry, STATUS_APPROVED, STATUS_REJECTED,
        STATUS_RESCHEDULED,
    },
    utils::{format_date_str, format_time_str},
};

/// Subject and body for a status notification, or None when the status has
/// no template (pending has none; it is the starting state, not a decision).
pub fn status_message(entry: &Entry, status: &str, base_url: &str) -> Option<(String, String)> {
    let date = format_date_str(&entry.appointment_date);
    let time = format_time_str(&entry.appointment_time);
    let token = entry.reschedule_token.as_deref().unwrap_or_default();

    match status {
        STATUS_APPROVED => Some((
            "Appointment Approved - Confirmation".to_string(),
            format!(
                "Dear {},\n\n\
                 Great news! Your appointment has been APPROVED.\n\n\
                 Appointment Details:\n\
                 - Date: {}\n\
                 - Time: {}\n\
                 - Category: {}\n\
                 - Attendee: {}\n\n\
                 Please arrive 15 minutes before your scheduled time.\n\n\
                 If you need to make any changes, please contact us immediately.\n\n\
                 Best regards,\nAppointment Management Team",
                entry.name,
                date,
                time,
                category_display(&entry.category),
                attendee_display(&entry.designated_attendee),
            ),
        )),
        STATUS_REJECTED => Some((
            "Appointment Status Update - Alternative Options Available".to_string(),
            format!(
                "Dear {},\n\n\
                 We regret to inform you that your appointment scheduled for {} at {} \
                 is not available due to scheduling conflicts.\n\n\
                 However, we would be happy to help you reschedule at a more convenient time.\n\n\
                 To reschedule your appointment, please visit: {}/reschedule/{}/\n\n\
                 Alternatively, you can book a new appointment at: {}/\n\n\
                 We apologize for any inconvenience and look forward to serving you soon.\n\n\
                 Best regards,\nAppointment Management Team",
                entry.name, date, time, base_url, token, base_url,
            ),
        )),
        STATUS_RESCHEDULED => Some((
            "Reschedule Required - Please Select New Time".to_string(),
            format!(
                "Dear {},\n\n\
                 Your appointment scheduled for {} at {} needs to be rescheduled \
                 due to unforeseen circumstances.\n\n\
                 To select a new appointment time, please visit: {}/reschedule/{}/\n\n\
                 Your appointment details:\n\
                 - Original Date: {}\n\
                 - Original Time: {}\n\
                 - Category: {}\n\
                 - Reason: {}\n\n\
                 Please reschedule within 7 days to secure your appointment.\n\n\
                 We apologize for the inconvenience.\n\n\
                 Best regards,\nAppointment Management Team",
                entry.name,
                date,
                time,
                base_url,
                token,
                date,
                time,
                category_display(&entry.category),
                entry.reason,
            ),
        )),
        _ => None,
    }
}

pub fn booking_user_message(entry: &Entry) -> (String, String) {
    (
        "Appointment Scheduled Successfully".to_string(),
        format!(
            "Hello {},\n\n\
             Your appointment has been scheduled and is pending review.\n\
             Date: {}\n\
             Time: {}\n\n\
             You will receive a confirmation email once your appointment is approved.\n\n\
             Thank you!",
            entry.name,
            format_date_str(&entry.appointment_date),
            format_time_str(&entry.appointment_time),
        ),
    )
}

pub fn booking_admin_message(entry: &Entry) -> (String, String) {
    (
        "New Appointment Booking Notification".to_string(),
        format!(
            "New appointment booked by {}\n\
             Date: {}\n\
             Time: {}\n\
             Category: {}\n\
             Phone: {}\n\
             Email: {}",
            entry.name,
            format_date_str(&entry.appointment_date),
            format_time_str(&entry.appointment_time),
            entry.category,
            entry.phone,
            entry.email,
        ),
    )
}

pub fn reschedule_user_message(entry: &Entry) -> (String, String) {
    (
        "Appointment Rescheduled Successfully".to_string(),
        format!(
            "Dear {},\n\n\
             Your appointment has been successfully rescheduled.\n\n\
             New Appointment Details:\n\
             - Date: {}\n\
             - Time: {}\n\
             - Category: {}\n\
             - Attendee: {}\n\n\
             Your appointment is now pending approval. You will receive a \
             confirmation email once approved.\n\n\
             Thank you for using our service.\n\n\
             Best regards,\nAppointment Management Team",
            entry.name,
            format_date_str(&entry.appointment_date),
            format_time_str(&entry.appointment_time),
            category_display(&entry.category),
            attendee_display(&entry.designated_attendee),
        ),
    )
}

pub fn reschedule_admin_message(entry: &Entry) -> (String, String) {
    (
        "Appointment Rescheduled - Needs Approval".to_string(),
        format!(
            "Appointment rescheduled by {}\n\n\
             New Details:\n\
             - Date: {}\n\
             - Time: {}\n\
             - Category: {}\n\
             - Phone: {}\n\
             - Email: {}\n\
             - Reason: {}\n\n\
             Please review and approve.",
            entry.name,
            format_date_str(&entry.appointment_date),
            format_time_str(&entry.appointment_time),
            entry.category,
            entry.phone,
            entry.email,
            entry.reason,
        ),
    )
}

/// Sends the status-specific email for a just-applied transition. Returns
/// whether the send succeeded; an unknown status sends nothing and counts
/// as success.
pub fn send_status_email(settings: &Settings, entry: &Entry, status: &str) -> bool {
    match status_message(entry, status, &settings.base_url) {
        Some((subject, body)) => send_email(settings, &entry.email, &entry.name, &subject, &body),
        None => true,
    }
}

pub fn send_booking_emails(settings: &Settings, entry: &Entry) {
    let (subject, body) = booking_user_message(entry);
    send_email(settings, &entry.email, &entry.name, &subject, &body);

    let (subject, body) = booking_admin_message(entry);
    send_email(settings, &settings.admin_email, "Admin", &subject, &body);
}

pub fn send_reschedule_emails(settings: &Settings, entry: &Entry) {
    let (subject, body) = reschedule_user_message(entry);
    send_email(settings, &entry.email, &entry.name, &subject, &body);

    let (subject, body) = reschedule_admin_message(entry);
    send_email(settings, &settings.admin_email, "Admin", &subject, &body);
}

fn send_email(settings: &Settings, to_email: &str, to_name: &str, subject: &str, body: &str) -> bool {
    let from = match settings.smtp_from.parse::<Mailbox>() {
        Ok(from) => from,
        Err(err) => {
            warn!("bad from address {}: {}", settings.smtp_from, err);
            return false;
        }
    };
    let to = match Address::from_str(to_email) {
        Ok(addr) => Mailbox::new(Some(to_name.to_string()), addr),
        Err(err) => {
            warn!("bad recipient address {}: {}", to_email, err);
            return false;
        }
    };

    let email = match Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
    {
        Ok(email) => email,
        Err(err) => {
            warn!("failed to build email: {}", err);
            return false;
        }
    };

    let mut builder = SmtpTransport::builder_dangerous(&settings.smtp_host).port(settings.smtp_port);
    if let (Some(username), Some(password)) =
        (settings.smtp_username.clone(), settings.smtp_password.clone())
    {
        builder = builder.credentials(Credentials::new(username, password));
    }
    let mailer = builder.build();

    match mailer.send(&email) {
        Ok(_) => true,
        Err(err) => {
            warn!("email sending failed: {}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn sample_entry() -> Entry {
        let now = Utc::now().naive_utc();
        Entry {
            id: 5,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "9999999999".to_string(),
            category: "student".to_string(),
            reason: "r".to_string(),
            appointment_date: NaiveDate::from_ymd(2025, 1, 1),
            appointment_time: NaiveTime::from_hms(10, 0, 0),
            designated_attendee: "member1".to_string(),
            document_url: None,
            status: "pending".to_string(),
            reschedule_token: Some("tok-123".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn approved_template_has_no_reschedule_link() {
        let entry = sample_entry();
        let (subject, body) = status_message(&entry, "approved", "http://host").unwrap();
        assert!(subject.contains("Approved"));
        assert!(body.contains("2025-01-01"));
        assert!(body.contains("10:00 AM"));
        assert!(body.contains("Student"));
        assert!(!body.contains("/reschedule/"));
    }

    #[test]
    fn rejected_and_rescheduled_embed_the_token_link() {
        let entry = sample_entry();
        for status in &["rejected", "rescheduled"] {
            let (_, body) = status_message(&entry, status, "http://host").unwrap();
            assert!(body.contains("http://host/reschedule/tok-123/"));
        }
    }

    #[test]
    fn pending_and_unknown_statuses_have_no_template() {
        let entry = sample_entry();
        assert!(status_message(&entry, "pending", "http://host").is_none());
        assert!(status_message(&entry, "done", "http://host").is_none());
    }

    #[test]
    fn booking_messages_interpolate_entry_fields() {
        let entry = sample_entry();
        let (_, user_body) = booking_user_message(&entry);
        assert!(user_body.contains("Hello A"));
        assert!(user_body.contains("pending review"));

        let (_, admin_body) = booking_admin_message(&entry);
        assert!(admin_body.contains("booked by A"));
        assert!(admin_body.contains("9999999999"));
        assert!(admin_body.contains("a@x.com"));
    }

    #[test]
    fn reschedule_messages_carry_new_details() {
        let entry = sample_entry();
        let (_, user_body) = reschedule_user_message(&entry);
        assert!(user_body.contains("pending approval"));
        assert!(user_body.contains("Member 1"));

        let (_, admin_body) = reschedule_admin_message(&entry);
        assert!(admin_body.contains("Please review and approve."));
        assert!(admin_body.contains("- Reason: r"));
    }
}
