// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
	Error,
	Warning,
}

impl NotificationKind {
	/// The CSS class added next to `notification`
	pub fn class_name(&self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Warning => "warning",
		}
	}

	pub fn icon_class(&self) -> &'static str {
		match self {
			Self::Error => "fa-circle-xmark",
			Self::Warning => "fa-triangle-exclamation",
		}
	}
}

/// A transient banner shown above the page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
	pub kind: NotificationKind,
	pub title: String,
	pub message: String,
}

impl Notification {
	pub fn new(kind: NotificationKind, title: &str, message: &str) -> Self {
		Self {
			kind,
			title: title.to_string(),
			message: message.to_string(),
		}
	}

	pub fn missing_verification() -> Self {
		Self::new(
			NotificationKind::Warning,
			"Подтверждение не пройдено",
			"Пожалуйста, подтвердите, что вы не робот",
		)
	}

	pub fn registration_rejected(message: &str) -> Self {
		Self::new(NotificationKind::Error, "Ошибка регистрации", message)
	}

	pub fn server_unreachable() -> Self {
		Self::new(
			NotificationKind::Error,
			"Ошибка сервера",
			"Произошла ошибка при подключении к серверу. Пожалуйста, попробуйте позже.",
		)
	}

	/// Full class attribute of the notification element
	pub fn class_attribute(&self) -> String {
		format!("notification {}", self.kind.class_name())
	}
}
