use gloo_console::log;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::reveal::{use_reveal, DEFAULT_THRESHOLD};
use crate::utils::email::{self, ContactMessage};

/// User-visible lifecycle of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
enum FormStatus {
    Idle,
    /// Required field missing; no network call was made.
    Invalid(&'static str),
    Sending,
    Sent,
    /// Transport or service failure; fields are preserved for retry.
    Failed,
}

/// Fold a delivery result into the next form contents and status: success
/// clears every field for a fresh message, failure keeps them so the user
/// can retry without retyping.
fn apply_send_outcome(
    form: &ContactMessage,
    result: &Result<(), email::SendError>,
) -> (ContactMessage, FormStatus) {
    match result {
        Ok(()) => (ContactMessage::default(), FormStatus::Sent),
        Err(_) => (form.clone(), FormStatus::Failed),
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let section_ref = use_reveal(DEFAULT_THRESHOLD);
    let form = use_state(ContactMessage::default);
    let status = use_state(|| FormStatus::Idle);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            match input.name().as_str() {
                "name" => next.name = input.value(),
                "company" => next.company = input.value(),
                "email" => next.email = input.value(),
                "position" => next.position = input.value(),
                _ => return,
            }
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = textarea.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Validation runs before any network call and never touches the
            // stored field values.
            if let Err(reason) = form.validate() {
                status.set(FormStatus::Invalid(reason));
                return;
            }

            status.set(FormStatus::Sending);
            let message = (*form).clone();
            let form = form.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = email::send_contact_message(&message).await;
                match &result {
                    Ok(()) => log!("contact message delivered"),
                    Err(err) => log!("contact message failed:", err.to_string()),
                }
                let (next_form, next_status) = apply_send_outcome(&message, &result);
                form.set(next_form);
                status.set(next_status);
            });
        })
    };

    let status_line = match &*status {
        FormStatus::Idle => html! {},
        FormStatus::Invalid(reason) => html! {
            <p class="form-status error">{ *reason }</p>
        },
        FormStatus::Sending => html! {
            <p class="form-status sending">{ "Sending message..." }</p>
        },
        FormStatus::Sent => html! {
            <p class="form-status success">
                { "Message sent successfully! We'll get back to you within 24 hours." }
            </p>
        },
        FormStatus::Failed => html! {
            <p class="form-status error">
                { format!(
                    "Failed to send message. Please try again or contact us directly at {}.",
                    config::get_contact_email(),
                ) }
            </p>
        },
    };

    let contact_css = r#"
        .contact-section {
            padding: 6rem 0;
            background: var(--surface);
        }
        .contact-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 2rem;
        }
        .contact-header {
            text-align: center;
            margin-bottom: 5rem;
        }
        .contact-header h2 {
            font-size: clamp(2.5rem, 5vw, 4.5rem);
            font-weight: 700;
            line-height: 1.2;
            color: var(--foreground);
        }
        .contact-header .accent { color: var(--primary); }
        .contact-header .tagline {
            display: block;
            margin-top: 0.5rem;
            color: var(--secondary);
        }
        .contact-grid {
            display: grid;
            gap: 4rem;
            max-width: 80rem;
            margin: 0 auto;
        }
        .contact-card {
            background: rgba(56, 139, 253, 0.12);
            border: 1px solid rgba(56, 139, 253, 0.3);
            border-radius: 1rem;
            padding: 2rem;
            margin-bottom: 3rem;
        }
        .contact-card h3 {
            font-size: 1.875rem;
            font-weight: 700;
            margin-bottom: 2rem;
            color: var(--foreground);
        }
        .contact-card h4 {
            font-size: 1.25rem;
            font-weight: 600;
            margin-bottom: 1.5rem;
            color: var(--foreground);
        }
        .contact-row {
            display: flex;
            align-items: center;
            gap: 1.5rem;
            margin-bottom: 1.5rem;
        }
        .contact-row .badge {
            width: 3rem;
            height: 3rem;
            border-radius: 0.75rem;
            background: var(--primary);
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.25rem;
            flex-shrink: 0;
        }
        .contact-row .detail-title {
            font-weight: 600;
            font-size: 1.125rem;
            color: var(--foreground);
        }
        .contact-row .detail-value {
            font-size: 1.125rem;
            color: rgba(240, 249, 255, 0.7);
        }
        .partners-list {
            list-style: none;
            padding: 0;
            display: flex;
            flex-direction: column;
            gap: 1rem;
            font-size: 1.125rem;
            color: rgba(240, 249, 255, 0.8);
        }
        .partners-list li {
            display: flex;
            align-items: center;
            gap: 0.75rem;
        }
        .partners-list .mark { color: var(--primary); }
        .contact-form-panel {
            background: rgba(56, 139, 253, 0.12);
            border: 1px solid rgba(56, 139, 253, 0.3);
            border-radius: 1.5rem;
            padding: 2.5rem;
            box-shadow: 0 25px 50px rgba(2, 12, 27, 0.5);
        }
        .contact-form {
            display: flex;
            flex-direction: column;
            gap: 2rem;
        }
        .form-grid {
            display: grid;
            gap: 1.5rem;
        }
        .form-field label {
            display: block;
            font-size: 1.125rem;
            font-weight: 500;
            color: var(--foreground);
        }
        .form-field input,
        .form-field textarea {
            width: 100%;
            margin-top: 0.5rem;
            padding: 0.75rem 1rem;
            font-size: 1.125rem;
            color: var(--foreground);
            background: rgba(6, 20, 38, 0.5);
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 0.5rem;
        }
        .form-field input { height: 3rem; }
        .form-field input:focus,
        .form-field textarea:focus {
            outline: none;
            border-color: var(--primary);
        }
        .form-status {
            font-size: 1rem;
            margin: 0;
        }
        .form-status.sending { color: var(--secondary); }
        .form-status.success { color: var(--primary); }
        .form-status.error { color: var(--destructive); }
        .contact-submit {
            width: 100%;
            font-size: 1.25rem;
            padding: 1.5rem;
        }
        @media (min-width: 768px) {
            .form-grid { grid-template-columns: repeat(2, 1fr); }
        }
        @media (min-width: 1024px) {
            .contact-grid { grid-template-columns: repeat(2, 1fr); }
        }
    "#;

    html! {
        <section
            id="contact"
            ref={section_ref}
            class="contact-section fade-in scroll-snap-section"
        >
            <style>{ contact_css }</style>
            <div class="contact-inner">
                <div class="contact-header">
                    <h2>
                        { "Partner with " }<span class="accent">{ "AQUAS" }</span>{ " to" }
                        <span class="tagline">{ "clean up and preserve your waterways." }</span>
                    </h2>
                </div>

                <div class="contact-grid">
                    <div>
                        <div class="contact-card">
                            <h3>{ "Get in Touch" }</h3>
                            <div class="contact-row">
                                <div class="badge">{ "✉" }</div>
                                <div>
                                    <div class="detail-title">{ "Email" }</div>
                                    <div class="detail-value">{ config::get_contact_email() }</div>
                                </div>
                            </div>
                            <div class="contact-row">
                                <div class="badge">{ "◆" }</div>
                                <div>
                                    <div class="detail-title">{ "Location" }</div>
                                    <div class="detail-value">{ "Columbia University, New York" }</div>
                                </div>
                            </div>
                        </div>

                        <div class="contact-card">
                            <h4>{ "Ideal Partners" }</h4>
                            <ul class="partners-list">
                                <li><span class="mark">{ "›" }</span>{ "City parks and environmental agencies" }</li>
                                <li><span class="mark">{ "›" }</span>{ "Water treatment and desalination plants" }</li>
                                <li><span class="mark">{ "›" }</span>{ "Commercial and recreational fisheries" }</li>
                                <li><span class="mark">{ "›" }</span>{ "Port authorities" }</li>
                                <li><span class="mark">{ "›" }</span>{ "Algaecide and water treatment researchers" }</li>
                            </ul>
                        </div>
                    </div>

                    <div class="contact-form-panel">
                        <h3>{ "Send us a Message" }</h3>
                        <form class="contact-form" {onsubmit}>
                            <div class="form-grid">
                                <div class="form-field">
                                    <label for="name">{ "Name *" }</label>
                                    <input
                                        id="name"
                                        name="name"
                                        value={form.name.clone()}
                                        oninput={on_input.clone()}
                                        placeholder="Your full name"
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="company">{ "Company" }</label>
                                    <input
                                        id="company"
                                        name="company"
                                        value={form.company.clone()}
                                        oninput={on_input.clone()}
                                        placeholder="Your organization"
                                    />
                                </div>
                            </div>
                            <div class="form-grid">
                                <div class="form-field">
                                    <label for="email">{ "Email *" }</label>
                                    <input
                                        id="email"
                                        name="email"
                                        type="email"
                                        value={form.email.clone()}
                                        oninput={on_input.clone()}
                                        placeholder="your.email@company.com"
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="position">{ "Position" }</label>
                                    <input
                                        id="position"
                                        name="position"
                                        value={form.position.clone()}
                                        oninput={on_input.clone()}
                                        placeholder="Your role"
                                    />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="message">{ "Message *" }</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="6"
                                    value={form.message.clone()}
                                    oninput={on_message_input}
                                    placeholder="Tell us about your project, challenges, or how you'd like to collaborate..."
                                />
                            </div>
                            { status_line }
                            <button
                                type="submit"
                                class="btn-ocean contact-submit"
                                disabled={*status == FormStatus::Sending}
                            >
                                { "Send Message" }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::email::SendError;

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
    fn success_clears_all_five_fields() {
        let (next, status) = apply_send_outcome(&filled(), &Ok(()));
        assert_eq!(status, FormStatus::Sent);
        assert!(next.name.is_empty());
        assert!(next.company.is_empty());
        assert!(next.email.is_empty());
        assert!(next.position.is_empty());
        assert!(next.message.is_empty());
    }

    #[test]
    fn failure_preserves_fields_for_retry() {
        let form = filled();
        for err in [
            SendError::Network("connection refused".into()),
            SendError::Status(502),
        ] {
            let (next, status) = apply_send_outcome(&form, &Err(err));
            assert_eq!(status, FormStatus::Failed);
            assert_eq!(next, form);
        }
    }
}
