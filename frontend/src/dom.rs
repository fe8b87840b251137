//! Small helpers over `web-sys` shared by the effects.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{EffectError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(EffectError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(EffectError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EffectError::MissingElement(format!("#{}", id)))
}

/// Every match of `selector` below `root`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_in(root: &Element, selector: &str) -> Result<HtmlElement> {
    root.query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| EffectError::MissingElement(selector.to_string()))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Writes inline style properties in order.
pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) -> Result<()> {
    let style = element.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// An event subscription that stays attached until it is dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
