// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::{resolve_endpoint, HttpRegistrationApi};
use crate::components::form_error::clear_field_error;
use crate::dom::{document, element_by_id, input_by_id, listen, query_all};
use crate::error::DomError;
use crate::feedback::PageFeedback;
use crate::js_def::TurnstileWidget;
use signup_shared::config::FormConfig;
use signup_shared::flow::RegistrationController;
use signup_shared::validation::{FormField, FormInput, InputVisibility};
use std::rc::Rc;
use sycamore::futures::spawn_local;
use web_sys::Element;

const FORM_ID: &str = "registerForm";

fn toggle_password_visibility(toggle: &Element) -> Result<(), DomError> {
	let input = match toggle.parent_element() {
		Some(group) => group.query_selector("input")?,
		None => None,
	};
	let input = input.ok_or_else(|| DomError::MissingElement(String::from("input beside .toggle-password")))?;

	let current = InputVisibility::from_input_type(&input.get_attribute("type").unwrap_or_default());
	let next = current.toggled();
	input.set_attribute("type", next.input_type())?;

	// Both icons flip, so markup that starts with neither or both stays that way
	let icon_classes = toggle.class_list();
	icon_classes.toggle(InputVisibility::Masked.icon_class())?;
	icon_classes.toggle(InputVisibility::Plain.icon_class())?;
	Ok(())
}

fn attach_password_toggles() -> Result<(), DomError> {
	for toggle in query_all(".toggle-password")? {
		let control = toggle.clone();
		listen(&toggle, "click", move |_event| {
			if let Err(error) = toggle_password_visibility(&control) {
				log::warn!("Failed to toggle password visibility: {}", error);
			}
		})?;
	}
	Ok(())
}

/// Typing into an input clears that input's own error, leaving the rest of the form alone.
fn attach_error_clearing() -> Result<(), DomError> {
	for input in query_all(".form-group input")? {
		let field = input.clone();
		listen(&input, "input", move |_event| {
			if let Err(error) = clear_field_error(&field) {
				log::warn!("Failed to clear field error: {}", error);
			}
		})?;
	}
	Ok(())
}

fn field_value(field: FormField) -> Result<String, DomError> {
	Ok(input_by_id(field.element_id())?.value())
}

fn read_form_input() -> Result<FormInput, DomError> {
	Ok(FormInput::from_raw(
		&field_value(FormField::Username)?,
		&field_value(FormField::Email)?,
		&field_value(FormField::Password)?,
		&field_value(FormField::ConfirmPassword)?,
	))
}

/// Builds the page configuration. The form may point submissions elsewhere with a `data-endpoint` attribute.
fn read_config(form: &Element) -> FormConfig {
	let config = FormConfig::default();
	match form.get_attribute("data-endpoint") {
		Some(endpoint) => config.with_register_endpoint(&endpoint),
		None => config,
	}
}

/// Wires up all of the registration form's behavior.
///
/// # Errors
///
/// Fails when the form is missing from the page or an event handler can't be attached.
pub fn attach() -> Result<(), DomError> {
	let form = element_by_id(FORM_ID)?;
	let config = read_config(&form);
	let endpoint = resolve_endpoint(&config.register_endpoint)?;
	log::debug!("Registration requests go to {}", endpoint);

	attach_password_toggles()?;
	attach_error_clearing()?;

	let controller = Rc::new(RegistrationController::new(
		TurnstileWidget,
		HttpRegistrationApi::new(endpoint),
		PageFeedback::new(config),
	));

	listen(&form, "submit", move |event| {
		event.prevent_default();

		let input = match read_form_input() {
			Ok(input) => input,
			Err(error) => {
				log::error!("Failed to read the registration form: {}", error);
				return;
			}
		};

		let controller = Rc::clone(&controller);
		spawn_local(async move {
			let outcome = controller.submit(input).await;
			log::debug!("Registration attempt finished: {:?}", outcome);
		});
	})
}

/// Wires up the form now, or once the document finishes loading if it hasn't yet.
pub fn attach_when_ready() -> Result<(), DomError> {
	let document = document()?;
	if document.ready_state() != "loading" {
		return attach();
	}

	listen(&document, "DOMContentLoaded", |_event| {
		if let Err(error) = attach() {
			log::error!("Unable to set up the registration form: {}", error);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::body;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn password_group(icon_classes: &str) -> Element {
		let group = document().unwrap().create_element("div").unwrap();
		group.set_class_name("form-group");
		group.set_inner_html(&format!(
			r#"<input type="password"><i class="fas toggle-password {}"></i>"#,
			icon_classes
		));
		body().unwrap().append_child(&group).unwrap();
		group
	}

	#[wasm_bindgen_test]
	fn toggle_switches_input_type_and_icon() {
		let group = password_group("fa-eye");
		let toggle = group.query_selector(".toggle-password").unwrap().unwrap();
		let input = group.query_selector("input").unwrap().unwrap();

		toggle_password_visibility(&toggle).unwrap();
		assert_eq!(input.get_attribute("type").as_deref(), Some("text"));
		assert!(!toggle.class_list().contains("fa-eye"));
		assert!(toggle.class_list().contains("fa-eye-slash"));

		toggle_password_visibility(&toggle).unwrap();
		assert_eq!(input.get_attribute("type").as_deref(), Some("password"));
		assert!(toggle.class_list().contains("fa-eye"));
		assert!(!toggle.class_list().contains("fa-eye-slash"));

		group.remove();
	}

	#[wasm_bindgen_test]
	fn toggle_flips_both_icons_from_mismatched_markup() {
		let group = password_group("fa-eye fa-eye-slash");
		let toggle = group.query_selector(".toggle-password").unwrap().unwrap();

		toggle_password_visibility(&toggle).unwrap();
		assert!(!toggle.class_list().contains("fa-eye"));
		assert!(!toggle.class_list().contains("fa-eye-slash"));

		toggle_password_visibility(&toggle).unwrap();
		assert!(toggle.class_list().contains("fa-eye"));
		assert!(toggle.class_list().contains("fa-eye-slash"));

		group.remove();
	}
}
