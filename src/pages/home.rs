//! Home Page
//!
//! Single long page of anchored sections with a scroll-tracked navbar.

use leptos::prelude::*;
use leptos_motion::{hero_gradient, use_normalized_pointer, use_scroll_y};

use crate::components::{
    ButtonSize, ButtonVariant, CoffeeScene, FadeInUp, FloatingElement, InteractiveCard,
    MagneticButton, MorphingButton, ParallaxText, RevealText, ScaleIn, SiteFooter, SiteNav,
    SlideInLeft, SlideInRight, StaggerContainer, StaggerItem, StarRating,
};
use crate::content::{EXPERIENCES, FEATURED_ITEMS, HERO_STATS, TESTIMONIALS};
use crate::context::{use_app_context, use_site_config};
use crate::forms::AuthMode;
use crate::nav::{active_section, measure_sections, SECTIONS};
use crate::route::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_site_config();
    let scroll_y = use_scroll_y();

    let active = Memo::new(move |previous: Option<&String>| {
        let fallback = previous.map(String::as_str).unwrap_or(SECTIONS[0].0);
        active_section(scroll_y.get(), &measure_sections(), fallback)
    });

    let pointer = use_normalized_pointer(ctx.pointer);
    let hero_style = move || {
        let (nx, ny) = pointer.get();
        format!("background: {};", hero_gradient(nx, ny))
    };

    view! {
        <div class="home-page">
            <SiteNav active_section=active />

            <section id="home" class="hero" style=hero_style>
                <div class="hero-content">
                    <FadeInUp>
                        <span class="hero-kicker">"PREMIUM COFFEE EXPERIENCE"</span>
                    </FadeInUp>
                    <RevealText text=config.tagline class="hero-title" />
                    <FadeInUp delay=0.4>
                        <p class="hero-tagline">
                            "Discover the art of coffee brewing with our premium selection of beans, \
                             expertly crafted by passionate baristas."
                        </p>
                    </FadeInUp>
                    <FadeInUp delay=0.6 class="hero-actions">
                        <MagneticButton>
                            <MorphingButton
                                size=ButtonSize::Large
                                on_click=Callback::new(move |_| ctx.open_login(AuthMode::SignUp))
                            >
                                "Get Started"
                            </MorphingButton>
                        </MagneticButton>
                        <MorphingButton
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                            on_click=Callback::new(move |_| ctx.open_login(AuthMode::SignIn))
                        >
                            "Sign In"
                        </MorphingButton>
                    </FadeInUp>
                    <div class="hero-stats">
                        {HERO_STATS
                            .iter()
                            .enumerate()
                            .map(|(i, stat)| view! {
                                <ScaleIn delay={0.8 + i as f64 * 0.1} class="stat">
                                    <span class="stat-icon">{stat.icon}</span>
                                    <span class="stat-value">{stat.value}</span>
                                    <span class="stat-label">{stat.label}</span>
                                </ScaleIn>
                            })
                            .collect_view()}
                    </div>
                </div>
                <FloatingElement intensity=10.0 speed=4.0>
                    <CoffeeScene />
                </FloatingElement>
            </section>

            <section id="menu" class="featured">
                <FadeInUp class="section-heading">
                    <h2>"Signature Collection"</h2>
                    <p>"Handpicked favourites from our baristas"</p>
                </FadeInUp>
                <StaggerContainer class="featured-grid">
                    {FEATURED_ITEMS
                        .iter()
                        .map(|item| view! {
                            <StaggerItem>
                                <InteractiveCard class="featured-card">
                                    <img src=item.image alt=item.name loading="lazy" />
                                    <span class="featured-category">{item.category}</span>
                                    <h3>{item.name}</h3>
                                    <p>{item.description}</p>
                                    <div class="featured-meta">
                                        <StarRating
                                            filled={item.rating.floor() as usize}
                                            label={format!("{:.1}", item.rating)}
                                        />
                                        <span class="featured-price">{item.price}</span>
                                    </div>
                                </InteractiveCard>
                            </StaggerItem>
                        })
                        .collect_view()}
                </StaggerContainer>
                <FadeInUp class="section-cta">
                    <a href=Page::Menu.href()>
                        <MorphingButton variant=ButtonVariant::Outline>"View Full Menu"</MorphingButton>
                    </a>
                </FadeInUp>
            </section>

            <section id="experience" class="experience">
                <FadeInUp class="section-heading">
                    <h2>"The Experience"</h2>
                </FadeInUp>
                <div class="experience-grid">
                    {EXPERIENCES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! {
                            <ScaleIn delay={i as f64 * 0.2}>
                                <InteractiveCard class="experience-card">
                                    <FloatingElement intensity=8.0 speed={3.0 + i as f64}>
                                        <span class="experience-icon">{feature.icon}</span>
                                    </FloatingElement>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </InteractiveCard>
                            </ScaleIn>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="story" class="story">
                <SlideInLeft class="story-text">
                    <ParallaxText speed=0.3>
                        <h2>"Our Story"</h2>
                    </ParallaxText>
                    <p>
                        "What began as a small corner café has grown into a gathering place for \
                         people who care about what is in their cup."
                    </p>
                    <a href=Page::About.href() class="text-link">"Read more about us →"</a>
                </SlideInLeft>
                <SlideInRight class="testimonials">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <blockquote class="testimonial">
                                <StarRating filled=t.rating />
                                <p>{t.text}</p>
                                <footer>
                                    <strong>{t.name}</strong>
                                    <span>{t.role}</span>
                                </footer>
                            </blockquote>
                        })
                        .collect_view()}
                </SlideInRight>
            </section>

            <section id="contact" class="visit">
                <FadeInUp class="section-heading">
                    <h2>"Visit Us"</h2>
                </FadeInUp>
                <div class="visit-grid">
                    <VisitInfo />
                    <ReservationForm />
                </div>
            </section>

            <SiteFooter />
        </div>
    }
}

#[component]
fn VisitInfo() -> impl IntoView {
    let config = use_site_config();

    view! {
        <SlideInLeft class="visit-info">
            <h3>"Location"</h3>
            {config.address.iter().map(|line| view! { <p>{line.clone()}</p> }).collect_view()}
            <h3>"Opening Hours"</h3>
            {config.opening_hours.iter().map(|line| view! { <p>{line.clone()}</p> }).collect_view()}
            <h3>"Get in Touch"</h3>
            <p>{config.phone.clone()}</p>
            <p>{config.email.clone()}</p>
        </SlideInLeft>
    }
}

/// Table reservation. Nothing is booked; the request is only logged.
#[component]
fn ReservationForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (guests, set_guests) = signal("2".to_string());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!(
            "[RESERVE] {} guests for {:?} on {:?}",
            guests.get_untracked(),
            name.get_untracked(),
            date.get_untracked()
        );
        set_name.set(String::new());
        set_date.set(String::new());
        set_sent.set(true);
    };

    view! {
        <SlideInRight class="reservation">
            <h3>"Reserve a Table"</h3>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
                <select prop:value=move || guests.get() on:change=move |ev| set_guests.set(event_target_value(&ev))>
                    {(1..=8).map(|n| view! { <option value=n.to_string()>{n} " guests"</option> }).collect_view()}
                </select>
                <MorphingButton submit=true class="reservation-submit">"Book Now"</MorphingButton>
                <Show when=move || sent.get()>
                    <p class="form-notice">"Thanks! We'll confirm your table shortly."</p>
                </Show>
            </form>
        </SlideInRight>
    }
}
