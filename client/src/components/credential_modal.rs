// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{add_class_after, body, render_detached, window};
use crate::error::DomError;
use gloo_timers::callback::Timeout;
use signup_shared::config::FormConfig;
use signup_shared::messages::register::RegisterSuccess;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Event as WebEvent;

const COPY_CONFIRMED_STYLE: &str = "background: var(--accent); color: var(--text)";

/// Writes the text to the system clipboard, returning whether it succeeded.
async fn copy_to_clipboard(text: &str) -> bool {
	let clipboard = match window() {
		Ok(window) => window.navigator().clipboard(),
		Err(_) => return false,
	};
	match JsFuture::from(clipboard.write_text(text)).await {
		Ok(_) => true,
		Err(error) => {
			log::debug!("Clipboard write failed: {:?}", error);
			false
		}
	}
}

#[derive(Prop)]
pub struct CredentialModalProps {
	registration: RegisterSuccess,
	docs_path: String,
	copy_confirmation_duration: u32,
}

#[component]
pub fn CredentialModal<G: Html>(ctx: Scope<'_>, props: CredentialModalProps) -> View<G> {
	let copied = create_rc_signal(false);
	let api_key = props.registration.api_key.clone();
	let quota = props.registration.quota_summary();
	let confirmation_duration = props.copy_confirmation_duration;

	let copy_icon_class = create_memo(ctx, {
		let copied = copied.clone();
		move || if *copied.get() { "fas fa-check" } else { "fas fa-copy" }
	});
	let copy_style = create_memo(ctx, {
		let copied = copied.clone();
		move || if *copied.get() { COPY_CONFIRMED_STYLE } else { "" }
	});

	let copy_handler = {
		let api_key = api_key.clone();
		move |_event: WebEvent| {
			let copied = copied.clone();
			let api_key = api_key.clone();
			spawn_local_scoped(ctx, async move {
				if copy_to_clipboard(&api_key).await {
					copied.set(true);
					Timeout::new(confirmation_duration, move || copied.set(false)).forget();
				}
			});
		}
	};

	let docs_path = props.docs_path;
	let docs_handler = move |_event: WebEvent| {
		let result = window().and_then(|window| window.location().set_href(&docs_path).map_err(DomError::from));
		if let Err(error) = result {
			log::error!("Failed to open the documentation: {}", error);
		}
	};

	view! {
		ctx,
		div(class="modal") {
			div(class="modal-content") {
				h2 {
					i(class="fas fa-check-circle success-icon")
					" Регистрация успешна!"
				}
				p { "Ваш API ключ готов к использованию" }
				div(class="api-key-container") {
					code { (api_key) }
					button(type="button", class="copy-btn", title="Скопировать API ключ", style=*copy_style.get(), on:click=copy_handler) {
						i(class=*copy_icon_class.get())
					}
				}
				(if let Some(quota) = quota.clone() {
					view! {
						ctx,
						p(class="quota") { (quota) }
					}
				} else {
					view! { ctx, }
				})
				p(class="warning") {
					i(class="fas fa-exclamation-triangle")
					" Сохраните этот ключ! Он будет показан только один раз."
				}
				button(type="button", class="btn-register", on:click=docs_handler) {
					"Просмотреть документацию"
				}
			}
		}
	}
}

/// Shows the issued API key in a modal over the page
pub fn show_credential_modal(registration: &RegisterSuccess, config: &FormConfig) -> Result<(), DomError> {
	let registration = registration.clone();
	let docs_path = config.docs_path.clone();
	let copy_confirmation_duration = config.copy_confirmation_duration;

	let element = render_detached(move |ctx| {
		view! {
			ctx,
			CredentialModal(registration=registration, docs_path=docs_path, copy_confirmation_duration=copy_confirmation_duration)
		}
	})?;
	body()?.append_child(&element)?;
	add_class_after(&element, "active", config.modal_activate_delay);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::{query_all, remove_all};
	use serde_json::json;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn registration(body: serde_json::Value) -> RegisterSuccess {
		serde_json::from_value(body).unwrap()
	}

	#[wasm_bindgen_test]
	fn modal_displays_issued_key() {
		show_credential_modal(&registration(json!({ "api_key": "abc123" })), &FormConfig::default()).unwrap();

		let codes = query_all(".api-key-container code").unwrap();
		assert_eq!(codes.len(), 1);
		assert_eq!(codes[0].text_content().as_deref(), Some("abc123"));
		assert!(query_all(".modal .quota").unwrap().is_empty());

		remove_all(".modal").unwrap();
	}

	#[wasm_bindgen_test]
	fn modal_shows_quota_when_sent() {
		let success = registration(json!({
			"api_key": "abc123",
			"monthly_request_limit": 1000,
			"next_reset_date": "2026-11-01",
		}));
		show_credential_modal(&success, &FormConfig::default()).unwrap();

		let quota = query_all(".modal .quota").unwrap();
		assert_eq!(quota.len(), 1);
		assert_eq!(
			quota[0].text_content().as_deref(),
			Some("Лимит запросов: 1000 в месяц (сброс 2026-11-01)")
		);

		remove_all(".modal").unwrap();
	}
}
