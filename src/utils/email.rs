//! Outbound contact-form delivery via the EmailJS REST API.
//!
//! Fire-and-forget from the page's point of view: the component awaits the
//! result only to pick a status message. Payload construction is separate
//! from sending so it can be unit tested natively.

use std::fmt;

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::config;

/// The contact form's field set. `name`, `email` and `message` are
/// mandatory; `company` and `position` are optional context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub company: String,
    pub email: String,
    pub position: String,
    pub message: String,
}

impl ContactMessage {
    /// Check the required fields. Runs before any network call; a failure
    /// must leave the form contents untouched.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err("Name, email, and message are required.");
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    title: &'a str,
    name: &'a str,
    company: &'a str,
    email: &'a str,
    position: &'a str,
    time: &'a str,
    message: &'a str,
}

/// EmailJS send request body.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    fn new(contact: &'a ContactMessage, time: &'a str) -> Self {
        Self {
            service_id: config::get_emailjs_service_id(),
            template_id: config::get_emailjs_template_id(),
            user_id: config::get_emailjs_public_key(),
            template_params: TemplateParams {
                title: "AQUAS Contact Form - New Message",
                name: &contact.name,
                company: &contact.company,
                email: &contact.email,
                position: &contact.position,
                time,
                message: &contact.message,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// Request never produced a response (offline, CORS, serialization).
    Network(String),
    /// EmailJS answered with a non-success status.
    Status(u16),
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Network(err) => write!(f, "network error: {err}"),
            SendError::Status(status) => write!(f, "delivery service returned {status}"),
        }
    }
}

/// POST the message to EmailJS. Returns once the service has accepted or
/// rejected it; the caller decides what the user sees.
pub async fn send_contact_message(contact: &ContactMessage) -> Result<(), SendError> {
    let time: String = js_sys::Date::new_0()
        .to_locale_string("en-US", &JsValue::UNDEFINED)
        .into();
    let payload = SendRequest::new(contact, &time);

    let response = Request::post(config::get_emailjs_endpoint())
        .json(&payload)
        .map_err(|err| SendError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SendError::Network(err.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SendError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            company: "Hudson Parks".into(),
            email: "ada@example.org".into(),
            position: "Director".into(),
            message: "Tell me more about the buoy.".into(),
        }
    }

    #[test]
    fn validate_accepts_complete_message() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn validate_requires_name_email_message() {
        let cases: [fn(&mut ContactMessage); 3] = [
            |m| m.name.clear(),
            |m| m.email.clear(),
            |m| m.message.clear(),
        ];
        for strip in cases {
            let mut message = filled();
            strip(&mut message);
            assert!(message.validate().is_err());
        }
    }

    #[test]
    fn validate_allows_empty_optional_fields() {
        let mut message = filled();
        message.company.clear();
        message.position.clear();
        assert_eq!(message.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_whitespace_only_required_field() {
        let mut message = filled();
        message.name = "   ".into();
        assert!(message.validate().is_err());
    }

    #[test]
    fn validation_failure_leaves_fields_untouched() {
        let mut message = filled();
        message.name.clear();
        let before = message.clone();
        let _ = message.validate();
        assert_eq!(message, before);
    }

    #[test]
    fn payload_shape() {
        let contact = filled();
        let payload = SendRequest::new(&contact, "8/27/2026, 9:00:00 AM");
        let value = serde_json::to_value(&payload).expect("serializes");

        assert_eq!(value["service_id"], "aquasmission");
        assert_eq!(value["template_id"], "aquas-contact-template");
        let params = &value["template_params"];
        assert_eq!(params["title"], "AQUAS Contact Form - New Message");
        assert_eq!(params["name"], "Ada");
        assert_eq!(params["email"], "ada@example.org");
        assert_eq!(params["message"], "Tell me more about the buoy.");
        assert_eq!(params["time"], "8/27/2026, 9:00:00 AM");
    }
}
