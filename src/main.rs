use dioxus::prelude::*;

use views::Customizer;

/// Preference state and the tables behind every option group.
mod prefs;
/// The once-a-second clock that drives the preview.
mod clock;
/// Reusable pieces of the screen.
mod components;
/// The customizer screen itself.
mod views;

#[cfg(test)]
mod testing;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    tracing::info!("starting clock widget customizer");

    dioxus::launch(App);
}

/// App is the main component of our app. Components are the building blocks of dioxus apps.
/// Each component is a function that takes some props and returns an Element.
#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }

        Customizer {}
    }
}
