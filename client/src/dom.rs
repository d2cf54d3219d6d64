// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::DomError;
use gloo_timers::callback::Timeout;
use sycamore::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, Window};

pub fn window() -> Result<Window, DomError> {
	web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
	window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
	document()?.body().ok_or(DomError::NoBody)
}

pub fn element_by_id(id: &str) -> Result<Element, DomError> {
	document()?
		.get_element_by_id(id)
		.ok_or_else(|| DomError::MissingElement(format!("#{}", id)))
}

pub fn input_by_id(id: &str) -> Result<HtmlInputElement, DomError> {
	element_by_id(id)?
		.dyn_into::<HtmlInputElement>()
		.map_err(|_| DomError::MissingElement(format!("input#{}", id)))
}

/// Gets every element on the page matching the selector
pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
	let nodes = document()?.query_selector_all(selector)?;
	let elements = (0..nodes.length())
		.filter_map(|index| nodes.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect();
	Ok(elements)
}

/// Removes every element on the page matching the selector
pub fn remove_all(selector: &str) -> Result<(), DomError> {
	for element in query_all(selector)? {
		element.remove();
	}
	Ok(())
}

/// Attaches an event handler that lives for the rest of the page's lifetime
pub fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Renders a view outside the page and returns its root element, ready to be inserted somewhere.
pub fn render_detached(render: impl FnOnce(Scope<'_>) -> View<DomNode>) -> Result<Element, DomError> {
	let container = document()?.create_element("div")?;
	sycamore::render_to(render, &container);
	let element = container.first_element_child().ok_or(DomError::EmptyView)?;
	element.remove();
	Ok(element)
}

/// Adds a class to the element once the delay passes. Elements removed in the meantime are unaffected.
pub fn add_class_after(element: &Element, class_name: &'static str, delay: u32) {
	let element = element.clone();
	Timeout::new(delay, move || {
		if let Err(error) = element.class_list().add_1(class_name) {
			log::debug!("Failed to add class {}: {:?}", class_name, error);
		}
	})
	.forget();
}
