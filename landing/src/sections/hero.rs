use crate::components::{Icon, NavLink};
use landing_core::{PageState, SectionId};
use landing_core::content::{Hero, IconId};
use leptos::prelude::*;

/// Opening banner. Its calls to action light up like nav links when they
/// point at the active section.
#[component]
pub fn HeroSection(hero: Hero, page: RwSignal<PageState>) -> impl IntoView {
    let active = Memo::new(move |_| page.with(PageState::active));
    let cta = move |href: &str| {
        let target = SectionId::from_href(href);
        Signal::derive(move || target == Some(active.get()))
    };
    let primary_active = cta(&hero.primary_cta.href);
    let secondary_active = cta(&hero.secondary_cta.href);

    view! {
        <section id=SectionId::Home.id() class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <span class="hero-badge">{hero.badge}</span>
                    <h2 class="hero-title">
                        {hero.headline} " " <span class="accent">{hero.highlight}</span>
                    </h2>
                    <p class="hero-description">{hero.description}</p>
                    <div class="hero-actions">
                        <NavLink
                            href=hero.primary_cta.href
                            label=hero.primary_cta.label
                            active=primary_active
                            class="btn btn-primary btn-lg"
                        />
                        <NavLink
                            href=hero.secondary_cta.href
                            label=hero.secondary_cta.label
                            active=secondary_active
                            class="btn btn-outline btn-lg"
                        />
                    </div>
                </div>
                <div class="hero-media">
                    <div class="hero-frame">
                        <img src=hero.image.src alt=hero.image.alt />
                        <div class="hero-shade"></div>
                    </div>
                    <div class="hero-float">
                        <div class="icon-badge">
                            <Icon icon=IconId::ShieldCheck class="icon icon-lg" />
                        </div>
                        <div>
                            <p class="kicker">{hero.certification.kicker}</p>
                            <p class="hero-float-title">{hero.certification.title}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
