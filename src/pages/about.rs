use leptos::prelude::*;

use crate::components::{
    ButtonVariant, FadeInUp, InteractiveCard, MorphingButton, PageHeader, ScaleIn, SiteFooter,
    SlideInLeft, SlideInRight, StaggerContainer, StaggerItem,
};
use crate::content::{TEAM, TIMELINE, VALUES};
use crate::route::Page;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <PageHeader title="Our Story" subtitle="Passion for coffee since 2018" />

            <section class="about-story">
                <SlideInLeft class="about-story-text">
                    <h2>"Where It All Began"</h2>
                    <p>
                        "We started with a simple belief: great coffee brings people together. \
                         Every bean we roast and every cup we pour carries that idea forward."
                    </p>
                </SlideInLeft>
                <SlideInRight class="about-story-image">
                    <img src="/coffee-shop-interior.jpg" alt="Inside our café" loading="lazy" />
                </SlideInRight>
            </section>

            <section class="about-timeline">
                <FadeInUp class="section-heading">
                    <h2>"Our Journey"</h2>
                </FadeInUp>
                <ol class="timeline">
                    {TIMELINE
                        .iter()
                        .enumerate()
                        .map(|(i, milestone)| {
                            let side = if i % 2 == 0 { "timeline-left" } else { "timeline-right" };
                            view! {
                                <li class=format!("timeline-entry {}", side)>
                                    <FadeInUp delay={i as f64 * 0.1}>
                                        <span class="timeline-year">{milestone.year}</span>
                                        <h3>{milestone.title}</h3>
                                        <p>{milestone.description}</p>
                                    </FadeInUp>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <section class="about-values">
                <FadeInUp class="section-heading">
                    <h2>"Our Values"</h2>
                </FadeInUp>
                <StaggerContainer class="values-grid" stagger_step=0.15>
                    {VALUES
                        .iter()
                        .map(|value| view! {
                            <StaggerItem>
                                <InteractiveCard class="value-card">
                                    <span class="value-icon">{value.icon}</span>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </InteractiveCard>
                            </StaggerItem>
                        })
                        .collect_view()}
                </StaggerContainer>
            </section>

            <section class="about-team">
                <FadeInUp class="section-heading">
                    <h2>"Meet the Team"</h2>
                </FadeInUp>
                <div class="team-grid">
                    {TEAM
                        .iter()
                        .enumerate()
                        .map(|(i, member)| view! {
                            <ScaleIn delay={i as f64 * 0.2} class="team-card">
                                <div class="team-avatar">{member.name.chars().next().unwrap_or('?')}</div>
                                <h3>{member.name}</h3>
                                <p class="team-role">{member.role}</p>
                                <p class="team-experience">{member.experience} " experience"</p>
                            </ScaleIn>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about-cta">
                <FadeInUp>
                    <h2>"Come Taste the Difference"</h2>
                    <div class="cta-actions">
                        <a href=Page::Menu.href()>
                            <MorphingButton>"Explore Menu"</MorphingButton>
                        </a>
                        <a href=Page::Contact.href()>
                            <MorphingButton variant=ButtonVariant::Outline>"Get in Touch"</MorphingButton>
                        </a>
                    </div>
                </FadeInUp>
            </section>

            <SiteFooter />
        </div>
    }
}
