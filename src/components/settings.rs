use crate::components::icons::GearIcon;
use crate::components::{DateFormatPicker, FontPicker, SizePicker, TimeFormatPicker};
use crate::prefs::PreferenceState;
use dioxus::prelude::*;

const INSTALL_STEPS: [&str; 4] = [
    "Long-press on your home screen",
    "Tap \"Widgets\" from the menu",
    "Find \"Custom Clock Widget\"",
    "Drag it to your home screen",
];

/// Narrow viewports follow the toggle; from `lg` up the panel is always shown.
pub fn panel_visibility_class(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "hidden lg:block"
    }
}

/// The customization options. Every group writes its choice straight back into `prefs`.
#[component]
pub fn SettingsPanel(prefs: Signal<PreferenceState>) -> Element {
    let mut prefs = prefs;
    let current = prefs();
    let visibility = panel_visibility_class(current.settings_panel_visible);

    rsx! {
        div {
            id: "settings-panel",
            class: "space-y-6 {visibility}",
            div {
                class: "flex items-center gap-2 text-sm text-gray-400",
                GearIcon { class: "w-4 h-4" }
                span { "Customization Options" }
            }
            FontPicker {
                selected: current.font,
                on_select: move |font| prefs.write().set_font(font),
            }
            SizePicker {
                selected: current.text_size,
                on_select: move |size| prefs.write().set_text_size(size),
            }
            TimeFormatPicker {
                selected: current.time_format,
                on_select: move |format| prefs.write().set_time_format(format),
            }
            DateFormatPicker {
                selected: current.date_format,
                on_select: move |format| prefs.write().set_date_format(format),
            }
            InstallSteps {}
        }
    }
}

/// Static "How to Add Widget" instructions. Adding the widget happens in the launcher, not here.
#[component]
pub fn InstallSteps() -> Element {
    rsx! {
        div {
            class: "bg-linear-to-r from-purple-500/10 to-pink-500/10 backdrop-blur-sm rounded-2xl p-6 border border-purple-500/20",
            h3 { class: "text-lg font-semibold mb-3", "How to Add Widget" }
            ol {
                class: "space-y-2 text-sm text-gray-300",
                for (number, step) in (1..).zip(INSTALL_STEPS.iter()) {
                    li {
                        key: "{number}",
                        class: "flex gap-2",
                        span { class: "text-purple-400 font-bold", "{number}." }
                        span { "{step}" }
                    }
                }
            }
        }
    }
}
