// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{element_by_id, query_all, remove_all, render_detached};
use crate::error::DomError;
use signup_shared::validation::ValidationErrors;
use sycamore::prelude::*;
use web_sys::Element;

const ERROR_INPUT_CLASS: &str = "error-input";

pub fn form_error_view<G: Html>(ctx: Scope<'_>, message: &'static str) -> View<G> {
	view! {
		ctx,
		div(class="form-error") {
			i(class="fas fa-circle-exclamation")
			" "
			(message)
		}
	}
}

fn clear_form_errors() -> Result<(), DomError> {
	remove_all(".form-error")?;
	for input in query_all(".error-input")? {
		input.class_list().remove_1(ERROR_INPUT_CLASS)?;
	}
	Ok(())
}

/// Replaces all inline errors on the form with the given ones
pub fn show_form_errors(errors: &ValidationErrors) -> Result<(), DomError> {
	clear_form_errors()?;

	for (field, message) in errors.iter() {
		let input = element_by_id(field.element_id())?;
		let parent = input
			.parent_element()
			.ok_or_else(|| DomError::MissingElement(format!("parent of #{}", field.element_id())))?;
		let error_element = render_detached(|ctx| form_error_view(ctx, message))?;
		parent.append_child(&error_element)?;
		input.class_list().add_1(ERROR_INPUT_CLASS)?;
	}

	Ok(())
}

/// Clears the inline error belonging to a single input
pub fn clear_field_error(input: &Element) -> Result<(), DomError> {
	if let Some(parent) = input.parent_element() {
		if let Some(error_element) = parent.query_selector(".form-error")? {
			error_element.remove();
		}
	}
	input.class_list().remove_1(ERROR_INPUT_CLASS)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::{body, document};
	use signup_shared::validation::{validate_form, FormField, FormInput};
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn form_fixture() -> Element {
		let form = document().unwrap().create_element("form").unwrap();
		form.set_inner_html(
			r#"<div class="form-group"><input id="username"></div>
<div class="form-group"><input id="email"></div>
<div class="form-group"><input id="password"></div>
<div class="form-group"><input id="confirmPassword"></div>"#,
		);
		body().unwrap().append_child(&form).unwrap();
		form
	}

	#[wasm_bindgen_test]
	fn errors_replace_previous_ones() {
		let form = form_fixture();
		let errors = validate_form(&FormInput::from_raw("ab", "bad", "Abcdef12", "Abcdef12"));
		assert_eq!(errors.len(), 2);

		show_form_errors(&errors).unwrap();
		show_form_errors(&errors).unwrap();
		assert_eq!(query_all(".form-error").unwrap().len(), 2);
		assert_eq!(query_all(".error-input").unwrap().len(), 2);

		let username = element_by_id(FormField::Username.element_id()).unwrap();
		let username_error = username.parent_element().unwrap().query_selector(".form-error").unwrap().unwrap();
		assert_eq!(
			username_error.text_content().map(|text| text.trim().to_string()).as_deref(),
			errors.get(FormField::Username)
		);

		form.remove();
	}

	#[wasm_bindgen_test]
	fn clearing_one_field_keeps_the_others() {
		let form = form_fixture();
		let errors = validate_form(&FormInput::from_raw("ab", "bad", "Abcdef12", "Abcdef12"));
		show_form_errors(&errors).unwrap();

		let username = element_by_id(FormField::Username.element_id()).unwrap();
		clear_field_error(&username).unwrap();
		assert!(!username.class_list().contains(ERROR_INPUT_CLASS));
		assert_eq!(query_all(".form-error").unwrap().len(), 1);

		let email = element_by_id(FormField::Email.element_id()).unwrap();
		assert!(email.class_list().contains(ERROR_INPUT_CLASS));

		form.remove();
	}
}
