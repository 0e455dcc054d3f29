//! Inline stroke icons. Each takes Tailwind classes for size and colour.

use dioxus::prelude::*;

#[component]
fn Icon(#[props(into, default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class: "{class}",
            {children}
        }
    }
}

#[component]
pub fn ClockIcon(#[props(into, default = String::new())] class: String) -> Element {
    rsx! {
        Icon { class,
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        }
    }
}

#[component]
pub fn GearIcon(#[props(into, default = String::new())] class: String) -> Element {
    rsx! {
        Icon { class,
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

#[component]
pub fn PhoneIcon(#[props(into, default = String::new())] class: String) -> Element {
    rsx! {
        Icon { class,
            rect { x: "5", y: "2", width: "14", height: "20", rx: "2", ry: "2" }
            path { d: "M12 18h.01" }
        }
    }
}

#[component]
pub fn TypeIcon(#[props(into, default = String::new())] class: String) -> Element {
    rsx! {
        Icon { class,
            polyline { points: "4 7 4 4 20 4 20 7" }
            line { x1: "9", y1: "20", x2: "15", y2: "20" }
            line { x1: "12", y1: "4", x2: "12", y2: "20" }
        }
    }
}

#[component]
pub fn LayoutIcon(#[props(into, default = String::new())] class: String) -> Element {
    rsx! {
        Icon { class,
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
            line { x1: "3", y1: "9", x2: "21", y2: "9" }
            line { x1: "9", y1: "21", x2: "9", y2: "9" }
        }
    }
}

#[component]
pub fn PaletteIcon(#[props(into, default = String::new())] class: String) -> Element {
    rsx! {
        Icon { class,
            circle { cx: "13.5", cy: "6.5", r: ".5", fill: "currentColor" }
            circle { cx: "17.5", cy: "10.5", r: ".5", fill: "currentColor" }
            circle { cx: "8.5", cy: "7.5", r: ".5", fill: "currentColor" }
            circle { cx: "6.5", cy: "12.5", r: ".5", fill: "currentColor" }
            path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" }
        }
    }
}
