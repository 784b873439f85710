use crate::components::Icon;
use landing_core::content::{IconId, MapEmbed};
use leptos::prelude::*;

/// Embedded headquarters map with a directions card on top.
#[component]
pub fn MapSection(map: MapEmbed) -> impl IntoView {
    view! {
        <section class="map">
            <iframe
                src=map.embed_url
                title=map.title
                width="100%"
                height="100%"
                allowfullscreen=true
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
            <div class="map-card">
                <div class="map-card-head">
                    <div class="icon-badge">
                        <Icon icon=IconId::MapPin />
                    </div>
                    <div>
                        <h4 class="map-label">{map.label}</h4>
                        <p class="kicker">{map.locality}</p>
                    </div>
                </div>
                <p class="muted small">{map.address}</p>
                <a
                    href=map.directions_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-primary btn-block"
                >
                    <Icon icon=IconId::Navigation class="icon icon-sm" />
                    "Get Directions"
                </a>
            </div>
        </section>
    }
}
