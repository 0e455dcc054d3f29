use crate::clock::ClockReading;
use crate::components::icons::{ClockIcon, LayoutIcon, TypeIcon};
use crate::prefs::{DateFormat, PreferenceState, TimeFormat};
use dioxus::prelude::*;

/// `2:05 PM` in 12-hour mode, `14:05` in 24-hour mode.
pub fn format_time(reading: ClockReading, format: TimeFormat) -> String {
    reading.format(format.info().pattern)
}

/// `Dec 25`, `Wednesday, December 25` or `12/25/2024`.
pub fn format_date(reading: ClockReading, format: DateFormat) -> String {
    reading.format(format.info().pattern)
}

/// The live widget as it would look on the home screen.
#[component]
pub fn WidgetPreview(reading: ClockReading, prefs: PreferenceState) -> Element {
    let size = prefs.text_size.info();
    let time = format_time(reading, prefs.time_format);
    let date = format_date(reading, prefs.date_format);
    let font = prefs.font.name();

    rsx! {
        div {
            class: "bg-black/40 backdrop-blur-xl rounded-3xl p-8 border border-white/10 shadow-2xl",
            div {
                class: "text-center space-y-2",
                style: "font-family: {font}",
                div { class: "{size.time_class} font-bold tracking-tight", "{time}" }
                div { class: "{size.date_class} text-gray-300 tracking-wide", "{date}" }
            }
        }
    }
}

#[component]
fn InfoCard(#[props(into)] label: String, #[props(into)] value: String, icon: Element) -> Element {
    rsx! {
        div {
            class: "bg-white/5 backdrop-blur-sm rounded-xl p-4 text-center border border-white/10",
            {icon}
            div { class: "text-xs text-gray-400", "{label}" }
            div { class: "text-sm font-semibold capitalize", "{value}" }
        }
    }
}

/// Summary of the current font, size and time format under the preview.
#[component]
pub fn QuickInfo(prefs: PreferenceState) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-3 gap-3",
            InfoCard {
                label: "Font",
                value: prefs.font.name(),
                icon: rsx! { TypeIcon { class: "w-5 h-5 mx-auto mb-2 text-purple-400" } },
            }
            InfoCard {
                label: "Size",
                value: prefs.text_size.to_string(),
                icon: rsx! { LayoutIcon { class: "w-5 h-5 mx-auto mb-2 text-pink-400" } },
            }
            InfoCard {
                label: "Format",
                value: prefs.time_format.to_string(),
                icon: rsx! { ClockIcon { class: "w-5 h-5 mx-auto mb-2 text-blue-400" } },
            }
        }
    }
}
