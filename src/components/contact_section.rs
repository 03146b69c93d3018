//! Contact section: the simulated message form, social links and the
//! contact card download.

use std::time::Duration;

use dioxus::prelude::*;
use mangafolio_core::contact::{CONTACT_EMAIL, SENT_BODY, SENT_TITLE, SOCIAL_LINKS};
use mangafolio_core::{
    contact_vcard, copy_to_clipboard, ContactField, ContactForm, Cue, FileDownload, Notifier,
    Section, SUBMIT_DELAY,
};
use mangafolio_ui::{ButtonVariant, Input, MangaButton, TextArea};

use crate::context::{use_cues, use_hacker_mode, use_toasts, DesktopClipboard, DesktopDownload};

/// How long the "Copied!" confirmation stays visible
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

#[component]
pub fn ContactSection() -> Element {
    let hacker = use_hacker_mode();
    let toasts = use_toasts();
    let cues = use_cues();
    let mut form = use_signal(ContactForm::new);
    let mut error = use_signal(|| None::<String>);
    let mut copied = use_signal(|| false);

    let mut update = move |field: ContactField, value: String| {
        form.write().set(field, value);
        error.set(None);
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = form.write().begin_submit() {
            tracing::debug!(error = %e, "Contact form rejected");
            error.set(Some(e.to_string()));
            return;
        }

        // Cancelled with the section if the reader navigates away
        spawn(async move {
            tokio::time::sleep(SUBMIT_DELAY).await;
            if form.write().finish_submit().is_some() {
                toasts.notify(SENT_TITLE, SENT_BODY);
                cues.play(Cue::MessageSent);
            }
        });
    };

    let copy_email = move |_: ()| {
        if copy_to_clipboard(&DesktopClipboard, CONTACT_EMAIL) {
            copied.set(true);
            spawn(async move {
                tokio::time::sleep(COPIED_FEEDBACK).await;
                copied.set(false);
            });
        }
    };

    let save_card = move |_: ()| {
        DesktopDownload.download(&contact_vcard("Manga Developer"), "manga-developer.vcf");
    };

    let enabled = hacker();
    let current = form.read();
    let submitting = current.is_submitting();

    rsx! {
        section { id: "{Section::Contact.element_id()}", class: "contact",
            h2 { class: "manga-title", "CONNECT WITH ME" }

            div { class: "contact-grid",
                form { class: "panel contact-form", onsubmit: submit,
                    h3 { class: "panel-title accent", "SEND A MESSAGE" }
                    Input {
                        id: "contact-name".to_string(),
                        label: "YOUR NAME".to_string(),
                        value: current.name.clone(),
                        oninput: move |v| update(ContactField::Name, v),
                        required: true,
                        disabled: submitting,
                        hacker_mode: enabled,
                    }
                    Input {
                        id: "contact-email".to_string(),
                        label: "YOUR EMAIL".to_string(),
                        input_type: "email".to_string(),
                        value: current.email.clone(),
                        oninput: move |v| update(ContactField::Email, v),
                        required: true,
                        disabled: submitting,
                        hacker_mode: enabled,
                    }
                    TextArea {
                        id: "contact-message".to_string(),
                        label: "YOUR MESSAGE".to_string(),
                        value: current.message.clone(),
                        oninput: move |v| update(ContactField::Message, v),
                        required: true,
                        disabled: submitting,
                        hacker_mode: enabled,
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", role: "alert", "{message}" }
                    }
                    MangaButton {
                        variant: ButtonVariant::Action,
                        button_type: "submit".to_string(),
                        disabled: submitting,
                        hacker_mode: enabled,
                        if submitting { "SENDING..." } else { "SEND MESSAGE" }
                    }
                }

                div { class: "contact-side",
                    div { class: "panel",
                        h3 { class: "panel-title", "LET'S CONNECT" }
                        ul { class: "social-links",
                            for (label, url) in SOCIAL_LINKS {
                                li { key: "{label}",
                                    a { href: "{url}", target: "_blank", "{label}" }
                                }
                            }
                        }
                        div { class: "contact-actions",
                            MangaButton {
                                variant: ButtonVariant::Speech,
                                onclick: copy_email,
                                if copied() { "Copied!" } else { "Copy {CONTACT_EMAIL}" }
                            }
                            MangaButton {
                                variant: ButtonVariant::Ghost,
                                onclick: save_card,
                                "Save Contact Card"
                            }
                        }
                    }
                    div { class: "panel",
                        h3 { class: "panel-title", "AVAILABILITY" }
                        dl { class: "availability",
                            dt { "FREELANCE" }
                            dd { "Available for new projects" }
                            dt { "LOCATION" }
                            dd { "Available for remote work worldwide" }
                            dt { "RESPONSE TIME" }
                            dd { "Usually within 24 hours" }
                        }
                    }
                }
            }
        }
    }
}
