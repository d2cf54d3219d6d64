// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::{add_class_after, body, remove_all, render_detached};
use crate::error::DomError;
use gloo_timers::callback::Timeout;
use signup_shared::config::FormConfig;
use signup_shared::notification::Notification;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event as WebEvent};

pub fn notification_view<G: Html>(ctx: Scope<'_>, notification: Notification) -> View<G> {
	let class_attribute = notification.class_attribute();
	let icon_class = format!("fas {}", notification.kind.icon_class());
	let Notification { title, message, .. } = notification;

	let close_handler = |event: WebEvent| {
		// The close button is a direct child of the notification
		let notification = event
			.current_target()
			.and_then(|target| target.dyn_into::<Element>().ok())
			.and_then(|button| button.parent_element());
		if let Some(notification) = notification {
			notification.remove();
		}
	};

	view! {
		ctx,
		div(class=class_attribute) {
			div(class="notification-icon") {
				i(class=icon_class)
			}
			div(class="notification-content") {
				div(class="notification-title") { (title) }
				div(class="notification-message") { (message) }
			}
			button(type="button", class="notification-close", on:click=close_handler) {
				i(class="fas fa-times")
			}
		}
	}
}

/// Replaces any visible notification with a new one and schedules its dismissal.
///
/// The dismissal timers aren't cancelled when the notification is closed early; they then act on a detached element.
pub fn show_notification(notification: Notification, config: &FormConfig) -> Result<(), DomError> {
	remove_all(".notification")?;

	let element = render_detached(|ctx| notification_view(ctx, notification))?;
	body()?.append_child(&element)?;
	add_class_after(&element, "show", config.notification_show_delay);

	let remove_delay = config.notification_remove_delay;
	Timeout::new(config.notification_dismiss_delay, move || {
		if let Err(error) = element.class_list().remove_1("show") {
			log::debug!("Failed to hide notification: {:?}", error);
		}
		Timeout::new(remove_delay, move || element.remove()).forget();
	})
	.forget();

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dom::query_all;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn second_notification_replaces_first() {
		let config = FormConfig::default();
		show_notification(Notification::missing_verification(), &config).unwrap();
		show_notification(Notification::server_unreachable(), &config).unwrap();

		let notifications = query_all(".notification").unwrap();
		assert_eq!(notifications.len(), 1);
		let title = notifications[0].query_selector(".notification-title").unwrap().unwrap();
		assert_eq!(title.text_content(), Some(Notification::server_unreachable().title));

		remove_all(".notification").unwrap();
	}

	#[wasm_bindgen_test]
	fn notification_uses_kind_class() {
		show_notification(Notification::registration_rejected("Ошибка"), &FormConfig::default()).unwrap();

		let notifications = query_all(".notification.error").unwrap();
		assert_eq!(notifications.len(), 1);
		let message = notifications[0].query_selector(".notification-message").unwrap().unwrap();
		assert_eq!(message.text_content().as_deref(), Some("Ошибка"));

		remove_all(".notification").unwrap();
	}
}
