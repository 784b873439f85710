use crate::components::{Card, Icon};
use landing_core::SectionId;
use landing_core::content::{Contact, IconId};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ContactSection(contact: Contact) -> impl IntoView {
    let form = contact.form;

    // Presentational only: the browser submission is suppressed and nothing is sent.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::debug!("contact form submission discarded");
    };

    view! {
        <section id=SectionId::Contact.id() class="contact">
            <div class="container grid grid-2 wide-gap">
                <div>
                    <h2 class="section-title">{contact.title}</h2>
                    <p class="lead muted">{contact.description}</p>
                    <div class="contact-list">
                        <ContactLine icon=IconId::Mail label="Email" value=contact.email />
                        <ContactLine icon=IconId::Phone label="Phone" value=contact.phone.display />
                        <ContactLine icon=IconId::MapPin label="Address" value=contact.address />
                    </div>
                </div>

                <Card class="card-form">
                    <h3 class="card-title">{form.title}</h3>
                    <form class="contact-form" on:submit=on_submit>
                        <div class="grid grid-2">
                            <label class="field">
                                <span class="field-label">"Full Name"</span>
                                <input type="text" name="name" placeholder=form.name_placeholder />
                            </label>
                            <label class="field">
                                <span class="field-label">"Email Address"</span>
                                <input type="email" name="email" placeholder=form.email_placeholder />
                            </label>
                        </div>
                        <label class="field">
                            <span class="field-label">"Subject"</span>
                            <select name="subject">
                                {form
                                    .subjects
                                    .into_iter()
                                    .map(|subject| view! { <option>{subject}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="field">
                            <span class="field-label">"Your Message"</span>
                            <textarea
                                name="message"
                                rows="4"
                                placeholder=form.message_placeholder
                            ></textarea>
                        </label>
                        <button type="submit" class="btn btn-primary btn-block btn-lg">
                            {form.submit_label}
                            <Icon icon=IconId::Send class="icon icon-sm" />
                        </button>
                    </form>
                </Card>
            </div>
        </section>
    }
}

#[component]
fn ContactLine(icon: IconId, label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="contact-line">
            <div class="contact-icon">
                <Icon icon=icon />
            </div>
            <div>
                <p class="kicker">{label}</p>
                <p class="contact-value">{value}</p>
            </div>
        </div>
    }
}
