use dioxus::prelude::*;

const UNSELECTED_CLASS: &str = "border-white/10 hover:border-white/30 bg-white/5";

/// Colour that marks the selected control of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Pink,
    Blue,
    Green,
}

impl Accent {
    // Class names are spelled out in full so tailwind picks them up from the source.
    pub fn selected_class(self) -> &'static str {
        match self {
            Accent::Purple => "border-purple-500 bg-purple-500/20",
            Accent::Pink => "border-pink-500 bg-pink-500/20",
            Accent::Blue => "border-blue-500 bg-blue-500/20",
            Accent::Green => "border-green-500 bg-green-500/20",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Accent::Purple => "text-purple-400",
            Accent::Pink => "text-pink-400",
            Accent::Blue => "text-blue-400",
            Accent::Green => "text-green-400",
        }
    }
}

/// One choice out of a closed set. Exactly one button per group is rendered with `selected`.
#[component]
pub fn OptionButton(
    selected: bool,
    accent: Accent,
    /// Stable marker for the option, rendered as `data-option`.
    #[props(into)]
    option: String,
    #[props(into, default = String::new())] class: String,
    #[props(into, default = String::new())] style: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let state_class = if selected {
        accent.selected_class()
    } else {
        UNSELECTED_CLASS
    };

    rsx! {
        button {
            class: "p-3 rounded-xl border-2 transition-all {state_class} {class}",
            style: "{style}",
            "data-option": "{option}",
            "aria-pressed": "{selected}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

/// A titled card wrapping one option group.
#[component]
pub fn OptionCard(#[props(into)] title: String, icon: Element, children: Element) -> Element {
    rsx! {
        div {
            class: "bg-white/5 backdrop-blur-sm rounded-2xl p-6 border border-white/10",
            h3 {
                class: "text-lg font-semibold mb-4 flex items-center gap-2",
                {icon}
                "{title}"
            }
            {children}
        }
    }
}
