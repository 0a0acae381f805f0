use gloo_net::http::Request;
use log::{error, info};
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::{show_toast, ToastContainer, ToastKind, ToastList};
use crate::config;

pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch within 24 hours.";

#[derive(Deserialize, Debug, Default)]
pub struct FormErrors {
    #[serde(default)]
    pub errors: Vec<FormError>,
}

#[derive(Deserialize, Debug)]
pub struct FormError {
    pub message: String,
}

pub fn rejected_message(body: Option<FormErrors>) -> String {
    match body {
        Some(body) if !body.errors.is_empty() => body
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => format!(
            "We couldn't send your message. Please try again or email {}",
            config::CONTACT_EMAIL
        ),
    }
}

pub fn network_error_message() -> String {
    format!(
        "Network error. Please try again or email {}",
        config::CONTACT_EMAIL
    )
}

enum Outcome {
    Sent,
    Failed(String),
}

async fn submit(form_data: FormData) -> Outcome {
    let response = match Request::post(config::get_contact_endpoint())
        .header("Accept", "application/json")
        .body(form_data)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            error!("Contact form request failed: {}", e);
            return Outcome::Failed(network_error_message());
        }
    };

    if response.ok() {
        return Outcome::Sent;
    }
    error!("Contact form rejected with status {}", response.status());
    Outcome::Failed(rejected_message(response.json::<FormErrors>().await.ok()))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let sending = use_state(|| false);
    let error = use_state(|| None::<String>);
    let toasts = use_reducer(ToastList::default);

    let onsubmit = {
        let form_ref = form_ref.clone();
        let sending = sending.clone();
        let error = error.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let form_data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    error!("Could not read contact form: {:?}", e);
                    return;
                }
            };

            sending.set(true);
            error.set(None);

            let sending = sending.clone();
            let error = error.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                match submit(form_data).await {
                    Outcome::Sent => {
                        info!("Contact form sent");
                        show_toast(&toasts, SUCCESS_MESSAGE, ToastKind::Success);
                        form.reset();
                    }
                    Outcome::Failed(message) => error.set(Some(message)),
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="contact-form-wrapper">
            <form
                id="contactForm"
                class="contact-form"
                action={config::get_contact_endpoint()}
                method="POST"
                ref={form_ref}
                {onsubmit}
            >
                <div class="form-row">
                    <input type="text" name="name" placeholder="Your name" required=true />
                    <input type="email" name="email" placeholder="Work email" required=true />
                </div>
                <input type="text" name="company" placeholder="Company" />
                <textarea name="message" rows="5" placeholder="What would you like to automate?" required=true />
                <button type="submit" class="submit-button" disabled={*sending}>
                    if *sending {
                        <i class="fas fa-spinner fa-spin"></i>{ " Sending..." }
                    } else {
                        { "Send Message" }
                    }
                </button>
                if let Some(message) = (*error).as_ref() {
                    <p class="form-error">{ message }</p>
                }
            </form>
            <ToastContainer toasts={toasts.toasts.clone()} />
            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                }
                .form-row {
                    display: flex;
                    gap: 14px;
                }
                .form-row input {
                    flex: 1;
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 12px 14px;
                    border-radius: 10px;
                    border: 1px solid #2e2e2e;
                    background: #151515;
                    color: #fff;
                    font: inherit;
                }
                .submit-button {
                    padding: 14px;
                    border-radius: 10px;
                    border: none;
                    background: #ff6b2c;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                .form-error {
                    color: #ff7b72;
                    margin: 0;
                }
                @media (max-width: 600px) {
                    .form-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
