//! The four option groups of the settings panel. Each renders every choice of its table and
//! reports the clicked one through `on_select`.

use crate::components::icons::{ClockIcon, LayoutIcon, PaletteIcon, TypeIcon};
use crate::components::{Accent, OptionButton, OptionCard};
use crate::prefs::{
    DateFormat, FontFamily, TextSize, TimeFormat, DATE_FORMATS, FONTS, TEXT_SIZES, TIME_FORMATS,
};
use dioxus::prelude::*;

#[component]
pub fn FontPicker(selected: FontFamily, on_select: EventHandler<FontFamily>) -> Element {
    let accent = Accent::Purple;
    let icon_class = format!("w-5 h-5 {}", accent.icon_class());

    rsx! {
        OptionCard {
            title: "Font Style",
            icon: rsx! { TypeIcon { class: icon_class } },
            div { class: "grid grid-cols-2 gap-2",
                for info in FONTS.iter() {
                    OptionButton {
                        key: "{info.name}",
                        selected: selected == info.font,
                        accent,
                        option: info.name,
                        // Each button previews its own family.
                        style: "font-family: {info.name}",
                        onclick: move |_| on_select.call(info.font),
                        "{info.name}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SizePicker(selected: TextSize, on_select: EventHandler<TextSize>) -> Element {
    let accent = Accent::Pink;
    let icon_class = format!("w-5 h-5 {}", accent.icon_class());

    rsx! {
        OptionCard {
            title: "Text Size",
            icon: rsx! { LayoutIcon { class: icon_class } },
            div { class: "grid grid-cols-3 gap-2",
                for info in TEXT_SIZES.iter() {
                    OptionButton {
                        key: "{info.label}",
                        selected: selected == info.size,
                        accent,
                        option: info.label,
                        class: "capitalize",
                        onclick: move |_| on_select.call(info.size),
                        "{info.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TimeFormatPicker(selected: TimeFormat, on_select: EventHandler<TimeFormat>) -> Element {
    let accent = Accent::Blue;
    let icon_class = format!("w-5 h-5 {}", accent.icon_class());

    rsx! {
        OptionCard {
            title: "Time Format",
            icon: rsx! { ClockIcon { class: icon_class } },
            div { class: "grid grid-cols-2 gap-2",
                for info in TIME_FORMATS.iter() {
                    OptionButton {
                        key: "{info.tag}",
                        selected: selected == info.format,
                        accent,
                        option: info.tag,
                        onclick: move |_| on_select.call(info.format),
                        "{info.label}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DateFormatPicker(selected: DateFormat, on_select: EventHandler<DateFormat>) -> Element {
    let accent = Accent::Green;
    let icon_class = format!("w-5 h-5 {}", accent.icon_class());

    rsx! {
        OptionCard {
            title: "Date Format",
            icon: rsx! { PaletteIcon { class: icon_class } },
            div { class: "space-y-2",
                for info in DATE_FORMATS.iter() {
                    OptionButton {
                        key: "{info.format}",
                        selected: selected == info.format,
                        accent,
                        option: info.format.to_string(),
                        class: "w-full text-left",
                        onclick: move |_| on_select.call(info.format),
                        "{info.label}"
                    }
                }
            }
        }
    }
}
