use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        div { class: "max-w-6xl mx-auto px-4 py-8 mt-8 border-t border-white/10",
            div { class: "text-center space-y-2",
                p { class: "text-sm text-gray-400", "Lightweight • Battery-friendly • No ads" }
                p { class: "text-xs text-gray-500", "Works on Android 8.0 and above" }
            }
        }
    }
}
