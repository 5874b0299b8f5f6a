//! Contact action: validate, store, then notify by email.
//!
//! ERROR HANDLING
//! ==============
//! The store write is the primary action. A mail failure afterwards is a
//! partial failure: the message is durably recorded, so the outcome still
//! reports success and carries a warning instead of rolling anything back.

use records::ContactMessage;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::services::records::{StoreError, create_contact_message};
use crate::state::{AppState, MailConfig};

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_email.html");

/// Result of a contact submission that got past validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactOutcome {
    /// Warning shown to the visitor when the notification email failed.
    pub warning: Option<String>,
}

/// Store the message, then send the notification email if mail is
/// configured.
///
/// # Errors
///
/// Returns a [`StoreError`] only when validation or the store write fails.
pub async fn submit(state: &AppState, input: &ContactMessage) -> Result<ContactOutcome, StoreError> {
    let id = create_contact_message(&state.pool, input).await?;
    tracing::info!(%id, "contact: message stored");

    let Some(mail) = &state.mail else {
        tracing::warn!("contact: mail relay not configured, skipping notification");
        return Ok(ContactOutcome { warning: None });
    };

    match send_notification(mail, input).await {
        Ok(()) => Ok(ContactOutcome { warning: None }),
        Err(reason) => {
            tracing::error!(%id, error = %reason, "contact: notification email failed");
            Ok(ContactOutcome { warning: Some("the notification email could not be sent".to_owned()) })
        }
    }
}

async fn send_notification(mail: &MailConfig, input: &ContactMessage) -> Result<(), String> {
    let resend = Resend::new(&mail.api_key);
    let to = [mail.to.as_str()];
    let subject = format!("Portfolio contact from {}", input.name.trim());
    let html = render_contact_template(input);

    let email = CreateEmailBaseOptions::new(&mail.from, to, subject).with_html(&html);
    resend.emails.send(email).await.map_err(|e| e.to_string())?;
    Ok(())
}

#[must_use]
fn render_contact_template(input: &ContactMessage) -> String {
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &escape_html(input.name.trim()))
        .replace("{{EMAIL}}", &escape_html(input.email.trim()))
        .replace("{{MESSAGE}}", &escape_html(input.message.trim()))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hello <world>".into(),
        }
    }

    #[test]
    fn template_escapes_user_content() {
        let html = render_contact_template(&message());
        assert!(html.contains("hello &lt;world&gt;"));
        assert!(!html.contains("<world>"));
    }

    #[test]
    fn template_fills_all_placeholders() {
        let html = render_contact_template(&message());
        assert!(!html.contains("{{"));
        assert!(html.contains("Ada"));
        assert!(html.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_store_or_mail() {
        let state = crate::state::test_helpers::test_app_state();
        let input = ContactMessage { name: "Ada".into(), email: "bad".into(), message: "hi".into() };
        let err = submit(&state, &input).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }
}
