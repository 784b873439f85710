use leptos::prelude::*;

/// Bordered content card.
#[component]
pub fn Card(
    /// Extra classes appended to the base `card` class
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div class=card_class(class)>{children()}</div> }
}

pub fn card_class(extra: &str) -> String {
    if extra.is_empty() {
        "card".to_string()
    } else {
        format!("card {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_class_appends_extras() {
        assert_eq!(card_class(""), "card");
        assert_eq!(card_class("card-stat"), "card card-stat");
    }
}
