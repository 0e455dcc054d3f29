use crate::components::icons::{ClockIcon, GearIcon};
use dioxus::prelude::*;

/// Title bar with the toggle that shows the settings panel on narrow screens.
#[component]
pub fn Header(panel_open: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    let rotation = if panel_open { "rotate-90" } else { "" };

    rsx! {
        div { class: "bg-black/30 backdrop-blur-sm border-b border-white/10",
            div { class: "max-w-6xl mx-auto px-4 py-4 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "bg-linear-to-br from-purple-500 to-pink-500 p-2 rounded-xl",
                        ClockIcon { class: "w-6 h-6" }
                    }
                    div {
                        h1 { class: "text-xl font-bold", "Custom Clock Widget" }
                        p { class: "text-xs text-gray-400", "Personalize your home screen" }
                    }
                }
                button {
                    id: "settings-toggle",
                    class: "p-2 hover:bg-white/10 rounded-lg transition-colors",
                    "aria-controls": "settings-panel",
                    "aria-expanded": "{panel_open}",
                    onclick: move |evt| on_toggle.call(evt),
                    GearIcon { class: "w-6 h-6 {rotation} transition-transform" }
                }
            }
        }
    }
}
