use super::*;
use crate::testing::{click, elements_by_attribute};
use dioxus::prelude::*;

#[component]
fn HeaderHarness(panel_open: bool) -> Element {
    rsx! { Header { panel_open, on_toggle: move |_| {} } }
}

fn render_header(panel_open: bool) -> String {
    let mut dom = VirtualDom::new_with_props(HeaderHarness, HeaderHarnessProps { panel_open });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
fn ToggleHarness() -> Element {
    let mut open = use_signal(|| false);
    rsx! {
        Header { panel_open: open(), on_toggle: move |_| open.set(!open()) }
    }
}

#[test]
fn test_header_gear_rotates_when_open() {
    let open = render_header(true);
    assert!(open.contains("rotate-90"));
    assert!(open.contains("aria-expanded=\"true\""));

    let closed = render_header(false);
    assert!(!closed.contains("rotate-90"));
    assert!(closed.contains("aria-expanded=\"false\""));
    assert!(closed.contains("Custom Clock Widget"));
}

#[test]
fn test_header_toggle_reports_clicks() {
    let mut dom = VirtualDom::new(ToggleHarness);
    let mutations = dom.rebuild_to_vec();
    let toggle = elements_by_attribute(&mutations, "aria-expanded")["false"];

    click(&mut dom, toggle);
    assert!(dioxus_ssr::render(&dom).contains("rotate-90"));

    click(&mut dom, toggle);
    assert!(!dioxus_ssr::render(&dom).contains("rotate-90"));
}

// The customizer owns a live clock, so it needs a runtime for its ticker.
#[tokio::test]
async fn test_toggle_flips_settings_panel() {
    let mut dom = VirtualDom::new(Customizer);
    let mutations = dom.rebuild_to_vec();
    let toggle = elements_by_attribute(&mutations, "aria-expanded")["false"];

    assert!(dioxus_ssr::render(&dom).contains("space-y-6 hidden lg:block"));

    click(&mut dom, toggle);
    let shown = dioxus_ssr::render(&dom);
    assert!(shown.contains("space-y-6 block"));
    assert!(shown.contains("aria-expanded=\"true\""));

    click(&mut dom, toggle);
    let hidden = dioxus_ssr::render(&dom);
    assert!(hidden.contains("space-y-6 hidden lg:block"));
    assert!(hidden.contains("aria-expanded=\"false\""));
}

#[tokio::test]
async fn test_selection_reaches_preview() {
    let mut dom = VirtualDom::new(Customizer);
    let mutations = dom.rebuild_to_vec();
    let options = elements_by_attribute(&mutations, "data-option");

    let before = dioxus_ssr::render(&dom);
    assert_eq!(before.matches("font-family: Georgia").count(), 1);
    assert_eq!(before.matches(">large<").count(), 1);

    click(&mut dom, options["large"]);
    click(&mut dom, options["Georgia"]);
    let after = dioxus_ssr::render(&dom);

    // The option button plus the preview (font) or the quick-info card (size).
    assert!(after.contains("text-8xl font-bold"));
    assert_eq!(after.matches("font-family: Georgia").count(), 2);
    assert_eq!(after.matches(">large<").count(), 2);
}

#[test]
fn test_footer() {
    let html = dioxus_ssr::render_element(rsx! { Footer {} });
    assert!(html.contains("Works on Android 8.0 and above"));
}
