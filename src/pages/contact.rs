//! Contact Page
//!
//! Contact cards, the inert contact form and location cards.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::{
    FadeInUp, InteractiveCard, MorphingButton, PageHeader, SiteFooter, SlideInLeft, SlideInRight,
    StaggerContainer, StaggerItem,
};
use crate::content::{CONTACT_CARDS, LOCATIONS};
use crate::forms::{ContactForm, CONTACT_SUBJECTS};

/// How long the "message sent" notice stays up
const NOTICE_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Sent,
    Invalid(String),
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <PageHeader title="Get in Touch" subtitle="We'd love to hear from you" />

            <section class="contact-cards">
                <StaggerContainer class="contact-card-grid">
                    {CONTACT_CARDS
                        .iter()
                        .map(|card| view! {
                            <StaggerItem>
                                <InteractiveCard class="contact-card">
                                    <span class="contact-icon">{card.icon}</span>
                                    <h3>{card.title}</h3>
                                    {card.details.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                                    <span class="contact-action">{card.action}</span>
                                </InteractiveCard>
                            </StaggerItem>
                        })
                        .collect_view()}
                </StaggerContainer>
            </section>

            <section class="contact-main">
                <SlideInLeft class="contact-form-wrapper">
                    <ContactFormPanel />
                </SlideInLeft>
                <SlideInRight class="contact-locations">
                    <h2>"Our Locations"</h2>
                    {LOCATIONS
                        .iter()
                        .map(|location| view! {
                            <div class="location-card">
                                <h3>{location.name}</h3>
                                <p>{location.address}</p>
                                <p>{location.phone}</p>
                                <p>{location.hours}</p>
                            </div>
                        })
                        .collect_view()}
                </SlideInRight>
            </section>

            <FadeInUp class="contact-map">
                <div class="map-placeholder">"Interactive map coming soon"</div>
            </FadeInUp>

            <SiteFooter />
        </div>
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let (form, set_form) = signal(ContactForm::default());
    let (notice, set_notice) = signal(Option::<Notice>::None);

    // One handler for every field, keyed by the input's `name`
    let on_field = move |ev: leptos::ev::Event| {
        let Some(name) = event_target::<web_sys::HtmlElement>(&ev).get_attribute("name") else {
            return;
        };
        let value = event_target_value(&ev);
        set_form.update(|f| f.set_field(&name, value));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = form.get_untracked();
        match current.submit() {
            Ok(()) => {
                set_form.set(current);
                set_notice.set(Some(Notice::Sent));
                Timeout::new(NOTICE_DURATION.as_millis() as u32, move || {
                    set_notice.set(None);
                })
                .forget();
            }
            Err(err) => {
                log::warn!("[CONTACT] {}", err);
                set_notice.set(Some(Notice::Invalid(err.to_string())));
            }
        }
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h2>"Send a Message"</h2>
            <div class="form-row">
                <input
                    name="name"
                    type="text"
                    placeholder="Your name *"
                    prop:value=move || form.get().name
                    on:input=on_field
                />
                <input
                    name="email"
                    type="email"
                    placeholder="Email address *"
                    prop:value=move || form.get().email
                    on:input=on_field
                />
            </div>
            <div class="form-row">
                <input
                    name="phone"
                    type="tel"
                    placeholder="Phone number"
                    prop:value=move || form.get().phone
                    on:input=on_field
                />
                <select name="subject" prop:value=move || form.get().subject on:change=on_field>
                    <option value="">"Select a subject *"</option>
                    {CONTACT_SUBJECTS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
            <textarea
                name="message"
                rows="6"
                placeholder="Your message *"
                prop:value=move || form.get().message
                on:input=on_field
            ></textarea>

            {move || match notice.get() {
                Some(Notice::Sent) => Some(view! {
                    <p class="form-notice">"Thank you! Your message has been sent."</p>
                }.into_any()),
                Some(Notice::Invalid(msg)) => Some(view! { <p class="form-error">{msg}</p> }.into_any()),
                None => None,
            }}

            <MorphingButton submit=true class="contact-submit">"Send Message"</MorphingButton>
        </form>
    }
}
