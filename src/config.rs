//! Site configuration. Values can be overridden at compile time with
//! environment variables so staging builds can point at a test EmailJS
//! service without touching the source.

pub fn get_emailjs_endpoint() -> &'static str {
    option_env!("EMAILJS_ENDPOINT").unwrap_or("https://api.emailjs.com/api/v1.0/email/send")
}

pub fn get_emailjs_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("aquasmission")
}

pub fn get_emailjs_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("aquas-contact-template")
}

pub fn get_emailjs_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("3tweu6KWrcy77aVwp")
}

/// Address shown to the user when a form submission fails, so they always
/// have a manual way to reach us.
pub fn get_contact_email() -> &'static str {
    option_env!("CONTACT_EMAIL").unwrap_or("aquasmission@gmail.com")
}
