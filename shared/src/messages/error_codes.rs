// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Machine-readable reasons the server gives for rejecting a registration
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RegistrationErrorCode {
	UsernameExists,
	EmailExists,
	InvalidUsername,
	InvalidEmail,
	InvalidPassword,
	CaptchaFailed,
	ValidationError,
	DatabaseError,
	ServerError,
	ConfigError,
	Unknown(String),
}

impl RegistrationErrorCode {
	pub fn from_code(code: &str) -> Self {
		match code {
			"username_exists" => Self::UsernameExists,
			"email_exists" => Self::EmailExists,
			"invalid_username" => Self::InvalidUsername,
			"invalid_email" => Self::InvalidEmail,
			"invalid_password" => Self::InvalidPassword,
			"captcha_failed" => Self::CaptchaFailed,
			"validation_error" => Self::ValidationError,
			"database_error" => Self::DatabaseError,
			"server_error" => Self::ServerError,
			"config_error" => Self::ConfigError,
			other => Self::Unknown(other.to_string()),
		}
	}

	pub fn as_code(&self) -> &str {
		match self {
			Self::UsernameExists => "username_exists",
			Self::EmailExists => "email_exists",
			Self::InvalidUsername => "invalid_username",
			Self::InvalidEmail => "invalid_email",
			Self::InvalidPassword => "invalid_password",
			Self::CaptchaFailed => "captcha_failed",
			Self::ValidationError => "validation_error",
			Self::DatabaseError => "database_error",
			Self::ServerError => "server_error",
			Self::ConfigError => "config_error",
			Self::Unknown(code) => code,
		}
	}

	/// The fixed user-facing message for this code.
	///
	/// Codes whose explanation only the server knows return `None`, and the server's detail is shown instead.
	pub fn message(&self) -> Option<&'static str> {
		match self {
			Self::UsernameExists => Some("Пользователь с таким именем уже существует"),
			Self::EmailExists => Some("Этот email уже зарегистрирован"),
			Self::InvalidUsername => Some("Недопустимое имя пользователя"),
			Self::InvalidEmail => Some("Недопустимый email адрес"),
			Self::InvalidPassword => Some("Недопустимый пароль"),
			Self::CaptchaFailed => Some("Ошибка проверки капчи"),
			Self::DatabaseError => Some("Ошибка при создании пользователя"),
			Self::ServerError => Some("Внутренняя ошибка сервера"),
			Self::ValidationError | Self::ConfigError | Self::Unknown(_) => None,
		}
	}

	/// Turnstile tokens are single-use; a failed check needs a fresh one.
	pub fn requires_new_token(&self) -> bool {
		matches!(self, Self::CaptchaFailed)
	}
}

impl fmt::Display for RegistrationErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_code())
	}
}
