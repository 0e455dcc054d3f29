//! Helpers for driving components inside a `VirtualDom` from tests.

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use std::any::Any;
use std::collections::HashMap;
use std::rc::Rc;

/// Elements that received a dynamic `name` attribute, keyed by its text value.
pub fn elements_by_attribute(mutations: &Mutations, name: &str) -> HashMap<String, ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::SetAttribute {
                name: attr,
                value: AttributeValue::Text(value),
                id,
                ..
            } if *attr == name => Some((value.clone(), *id)),
            _ => None,
        })
        .collect()
}

/// Sends a mouse click to `id` and applies the re-render it causes.
pub fn click(dom: &mut VirtualDom, id: ElementId) {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

    let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, id);

    let _ = dom.render_immediate_to_vec();
}
