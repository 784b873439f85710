use crate::components::{Card, Icon};
use landing_core::content::Stat;
use leptos::prelude::*;

#[component]
pub fn Stats(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section class="stats band">
            <div class="container grid grid-3">
                {stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <Card class="card-pad">
                                <p class="stat-label">{stat.label}</p>
                                <div class="stat-row">
                                    <h3 class="stat-value">{stat.value}</h3>
                                    <span class="stat-trend">
                                        <Icon icon=stat.icon class="icon icon-sm" />
                                        {stat.trend}
                                    </span>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
