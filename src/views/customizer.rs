use crate::clock::use_clock;
use crate::components::icons::PhoneIcon;
use crate::components::{QuickInfo, SettingsPanel, WidgetPreview};
use crate::prefs::PreferenceState;
use crate::views::{Footer, Header};
use dioxus::prelude::*;

/// The whole customizer screen: live preview on the left, settings on the right.
///
/// Preferences live in a signal owned by this component, so they reset whenever the page is
/// reloaded. The clock hook repaints the preview every second until the screen unmounts.
#[component]
pub fn Customizer() -> Element {
    let clock = use_clock();
    let mut prefs = use_signal(PreferenceState::default);

    let current = prefs();

    rsx! {
        div { class: "min-h-screen bg-linear-to-br from-slate-900 via-purple-900 to-slate-900 text-white",
            Header {
                panel_open: current.settings_panel_visible,
                on_toggle: move |_| prefs.write().toggle_settings_panel(),
            }

            div { class: "max-w-6xl mx-auto px-4 py-8",
                div { class: "grid lg:grid-cols-2 gap-8",
                    div { class: "space-y-4",
                        div { class: "flex items-center gap-2 text-sm text-gray-400",
                            PhoneIcon { class: "w-4 h-4" }
                            span { "Widget Preview" }
                        }
                        WidgetPreview { reading: clock(), prefs: current }
                        QuickInfo { prefs: current }
                    }

                    SettingsPanel { prefs }
                }
            }

            Footer {}
        }
    }
}
