use crate::components::Icon;
use landing_core::content::About;
use landing_core::section::ABOUT_ANCHOR;
use leptos::prelude::*;

/// About narrative. Anchored for the hero link, not tracked by the nav.
#[component]
pub fn AboutSection(about: About) -> impl IntoView {
    view! {
        <section id=ABOUT_ANCHOR class="about">
            <div class="container narrow center">
                <h2 class="section-title">{about.title}</h2>
                <div class="rule"></div>
                {about
                    .paragraphs
                    .into_iter()
                    .map(|paragraph| view! { <p class="about-text">{paragraph}</p> })
                    .collect_view()}
                <div class="grid grid-4 values">
                    {about
                        .values
                        .into_iter()
                        .map(|value| {
                            view! {
                                <div class="value-tile">
                                    <div class="value-icon">
                                        <Icon icon=value.icon class="icon icon-lg" />
                                    </div>
                                    <h4>{value.title}</h4>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
