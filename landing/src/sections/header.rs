use crate::components::{Icon, NavLink};
use landing_core::PageState;
use landing_core::SectionId;
use landing_core::content::{Brand, IconId};
use leptos::prelude::*;

/// Sticky header: brand, desktop links, call button and the mobile drawer.
#[component]
pub fn Header(brand: Brand, call_uri: String, page: RwSignal<PageState>) -> impl IntoView {
    let active = Memo::new(move |_| page.with(PageState::active));
    let menu_open = Memo::new(move |_| page.with(PageState::menu_open));
    let drawer_call_uri = call_uri.clone();

    view! {
        <header class="header">
            <div class="header-inner">
                <a href=SectionId::Home.href() class="brand">
                    <Icon icon=IconId::ShieldCheck class="brand-logo" />
                    <span class="brand-title">
                        {brand.name} " " <span class="accent">{brand.accent}</span>
                    </span>
                </a>

                <nav class="nav-links">
                    {SectionId::TRACKED
                        .into_iter()
                        .map(|section| {
                            view! {
                                <NavLink
                                    href=section.href()
                                    label=section.label()
                                    active=move || active.get() == section
                                />
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <a href=call_uri class="btn btn-primary header-call">"Call Us"</a>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| page.update(PageState::toggle_menu)
                    >
                        {move || {
                            let icon = if menu_open.get() { IconId::X } else { IconId::Menu };
                            view! { <Icon icon=icon /> }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-drawer">
                    {SectionId::TRACKED
                        .into_iter()
                        .map(|section| {
                            view! {
                                <NavLink
                                    href=section.href()
                                    label=section.label()
                                    active=move || active.get() == section
                                    class="drawer-link"
                                    on_click=move |()| {
                                        page.update(|state| {
                                            state.select_menu_link(section);
                                        })
                                    }
                                />
                            }
                        })
                        .collect_view()}
                    <a href=drawer_call_uri.clone() class="btn btn-primary btn-block">"Call Us"</a>
                </div>
            </Show>
        </header>
    }
}
