use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names used across the contact page
pub mod icons {
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const CLOCK: &str = "clock";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
}
