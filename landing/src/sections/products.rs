use crate::components::Icon;
use landing_core::SectionId;
use landing_core::content::{IconId, Products, Showcase};
use leptos::prelude::*;

#[component]
pub fn ProductsSection(products: Products) -> impl IntoView {
    view! {
        <section id=SectionId::Products.id() class="products">
            <div class="container">
                <div class="title-bar section-head">
                    <div class="bar"></div>
                    <h2 class="section-title">{products.title}</h2>
                </div>

                <div class="grid grid-3">
                    {products.items.into_iter().map(product_tile).collect_view()}

                    <div class="badge-tile">
                        <Icon icon=IconId::ShieldCheck class="icon icon-xl" />
                        <div>
                            <h4 class="badge-title">{products.quality.title}</h4>
                            <p class="muted">{products.quality.description}</p>
                        </div>
                    </div>

                    <div class="badge-tile">
                        <Icon icon=IconId::Download class="icon icon-xl" />
                        <div>
                            <h4 class="badge-title">{products.catalog.title}</h4>
                            <button class="btn btn-primary">
                                {products.catalog.button_label}
                                <Icon icon=IconId::ChevronRight class="icon icon-sm" />
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn product_tile(item: Showcase) -> impl IntoView {
    view! {
        <div class="showcase">
            <div class="zoom-frame landscape">
                <img src=item.image alt=item.title.clone() />
            </div>
            <div>
                <h4 class="showcase-title">{item.title}</h4>
                <p class="muted">{item.description}</p>
            </div>
        </div>
    }
}
