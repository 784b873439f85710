// Jayshree Group Landing Page - Leptos 0.8 CSR

mod components;
mod scroll;
mod sections;
#[cfg(all(test, target_arch = "wasm32"))]
mod testing;

use landing_core::{PageState, SiteContent, Subscription, VERSION};
use leptos::prelude::*;
use scroll::{DomLayout, WindowScroll};
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("refusing to mount: {err}");
            return;
        }
    };

    tracing::info!("mounting Jayshree Group landing v{VERSION}");
    leptos::mount::mount_to_body(move || view! { <Page content=content /> });
}

/// The whole landing page. Owns the per-view state and the scroll listener.
#[component]
fn Page(content: SiteContent) -> impl IntoView {
    let page = RwSignal::new(PageState::new());

    let scroll = Subscription::attach(&WindowScroll, move |scroll_y| {
        page.maybe_update(|state| state.on_scroll(scroll_y, &DomLayout));
    });
    on_cleanup(move || scroll.release());

    let SiteContent {
        brand,
        hero,
        stats,
        about,
        verticals,
        products,
        gallery,
        contact,
        map,
        footer,
    } = content;
    let call_uri = contact.phone.uri.clone();

    view! {
        <div class="page">
            <Header brand=brand.clone() call_uri=call_uri page=page />
            <main>
                <HeroSection hero=hero page=page />
                <Stats stats=stats />
                <AboutSection about=about />
                <VerticalsSection verticals=verticals />
                <ProductsSection products=products />
                <GallerySection gallery=gallery />
                <ContactSection contact=contact />
                <MapSection map=map />
            </main>
            <Footer brand=brand footer=footer />
        </div>
    }
}
