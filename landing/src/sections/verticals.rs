use crate::components::{Card, Icon};
use landing_core::SectionId;
use landing_core::content::{BusinessUnit, FeaturedVertical, IconId, Verticals};
use leptos::prelude::*;

#[component]
pub fn VerticalsSection(verticals: Verticals) -> impl IntoView {
    view! {
        <section id=SectionId::Companies.id() class="verticals band">
            <div class="container">
                <div class="section-head split">
                    <div>
                        <div class="title-bar">
                            <div class="bar"></div>
                            <h2 class="section-title">{verticals.title}</h2>
                        </div>
                        <p class="section-description">{verticals.description}</p>
                    </div>
                    <button class="link-action">
                        {verticals.view_all_label}
                        <Icon icon=IconId::ArrowRight class="icon icon-md slide" />
                    </button>
                </div>

                <div class="grid grid-3 featured">
                    {verticals.featured.into_iter().map(featured_card).collect_view()}
                </div>

                <div class="grid grid-3 units">
                    {verticals.units.into_iter().map(unit_tile).collect_view()}
                </div>
            </div>
        </section>
    }
}

fn featured_card(vertical: FeaturedVertical) -> impl IntoView {
    view! {
        <Card class="card-link">
            <div class="zoom-frame square">
                <img src=vertical.image.src alt=vertical.image.alt />
            </div>
            <div class="card-body">
                <h3 class="card-title">{vertical.title}</h3>
                <p class="muted">{vertical.description}</p>
            </div>
        </Card>
    }
}

fn unit_tile(unit: BusinessUnit) -> impl IntoView {
    view! {
        <div class="unit-tile">
            <div class="unit-icon">
                <Icon icon=unit.icon class="icon icon-lg" />
            </div>
            <div>
                <h3 class="unit-title">{unit.title}</h3>
                <p class="muted small">{unit.description}</p>
            </div>
        </div>
    }
}
