use leptos::prelude::*;

/// Labeled in-page navigation link, accented while `active`.
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    #[prop(into)] active: Signal<bool>,
    /// Base class: `drawer-link` inside the mobile panel, button classes for calls to action
    #[prop(default = "nav-link")]
    class: &'static str,
    /// Extra click work, the browser still follows `href`
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || nav_link_class(class, active.get())
            aria-current=move || active.get().then_some("location")
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {label}
        </a>
    }
}

pub fn nav_link_class(base: &str, active: bool) -> String {
    if active { format!("{base} active") } else { base.to_string() }
}
