use crate::components::Icon;
use landing_core::content::{Brand, Footer as FooterContent, IconId};
use leptos::prelude::*;

#[component]
pub fn Footer(brand: Brand, footer: FooterContent) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="grid grid-4 footer-grid">
                    <div>
                        <div class="brand footer-brand">
                            <Icon icon=IconId::ShieldCheck class="brand-logo" />
                            <h2 class="brand-title">
                                {brand.name} " " <span class="accent">{brand.accent}</span>
                            </h2>
                        </div>
                        <p class="muted">{footer.blurb}</p>
                        <div class="socials">
                            {footer
                                .socials
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a href=social.href class="social">
                                            <Icon icon=social.icon class="icon icon-sm" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {footer
                        .columns
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <h4 class="footer-heading">{column.title}</h4>
                                    <ul class="footer-links">
                                        {column
                                            .links
                                            .into_iter()
                                            .map(|link| {
                                                view! {
                                                    <li>
                                                        <a href=link.href>{link.label}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}

                    <div>
                        <h4 class="footer-heading">{footer.portal.title}</h4>
                        <p class="muted small">{footer.portal.note}</p>
                        <button class="btn btn-dark btn-block">
                            <Icon icon=IconId::Lock class="icon icon-sm" />
                            {footer.portal.button_label}
                        </button>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{footer.copyright}</p>
                    <div class="footer-legal">
                        {footer
                            .legal
                            .into_iter()
                            .map(|link| view! { <a href=link.href>{link.label}</a> })
                            .collect_view()}
                    </div>
                    <div class="footer-glyphs">
                        {footer
                            .glyphs
                            .into_iter()
                            .map(|glyph| view! { <Icon icon=glyph class="icon icon-sm glyph" /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
