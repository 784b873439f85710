use landing_core::SectionId;
use landing_core::content::Gallery;
use leptos::prelude::*;

#[component]
pub fn GallerySection(gallery: Gallery) -> impl IntoView {
    view! {
        <section id=SectionId::Gallery.id() class="gallery band">
            <div class="container">
                <h2 class="section-title">{gallery.title}</h2>
                <p class="section-description section-head">{gallery.description}</p>
                <div class="grid grid-3">
                    {gallery
                        .items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="showcase">
                                    <div class="zoom-frame wide grayscale">
                                        <img src=item.image alt=item.title.clone() />
                                    </div>
                                    <div>
                                        <h4 class="showcase-title large">{item.title}</h4>
                                        <p class="muted">{item.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
