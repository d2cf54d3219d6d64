// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error_codes::RegistrationErrorCode;
use crate::flow::errors::RequestError;
use crate::validation::FormInput;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GENERIC_REGISTRATION_FAILURE: &str = "Произошла ошибка при регистрации";

/// Request body sent to the registration endpoint
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterRequest {
	pub username: String,
	pub email: String,
	pub password: String,
	#[serde(rename = "turnstileToken")]
	pub turnstile_token: String,
}

impl RegisterRequest {
	pub fn new(input: &FormInput, turnstile_token: String) -> Self {
		Self {
			username: input.username.clone(),
			email: input.email.clone(),
			password: input.password.clone(),
			turnstile_token,
		}
	}
}

/// Response body for a successful registration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegisterSuccess {
	pub api_key: String,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub monthly_request_limit: Option<u64>,
	#[serde(default)]
	pub monthly_requests_remaining: Option<u64>,
	#[serde(default)]
	pub next_reset_date: Option<String>,
}

impl RegisterSuccess {
	/// Describes the request quota of the new account, if the server sent one.
	pub fn quota_summary(&self) -> Option<String> {
		let limit = self.monthly_request_limit?;
		let summary = match self.next_reset_date.as_ref() {
			Some(date) => format!("Лимит запросов: {} в месяц (сброс {})", limit, date),
			None => format!("Лимит запросов: {} в месяц", limit),
		};
		Some(summary)
	}
}

/// Response body for a rejected registration
///
/// Every field is optional; a body that is valid JSON but carries neither still produces a message.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RegisterFailure {
	#[serde(default)]
	pub error_code: Option<String>,
	#[serde(default)]
	pub detail: Option<Value>,
}

impl RegisterFailure {
	pub fn code(&self) -> Option<RegistrationErrorCode> {
		self.error_code.as_deref().map(RegistrationErrorCode::from_code)
	}

	/// The server-provided detail, when it's displayable text
	pub fn detail_text(&self) -> Option<&str> {
		match self.detail.as_ref() {
			Some(Value::String(detail)) if !detail.is_empty() => Some(detail.as_str()),
			_ => None,
		}
	}

	/// The message shown to the user: the fixed message for the code, then the server detail, then a generic message.
	pub fn message(&self) -> String {
		if let Some(message) = self.code().and_then(|code| code.message()) {
			return message.to_string();
		}
		match self.detail_text() {
			Some(detail) => detail.to_string(),
			None => String::from(GENERIC_REGISTRATION_FAILURE),
		}
	}

	/// Whether the bot-check widget must produce a new token before another attempt
	pub fn requires_new_token(&self) -> bool {
		self.code().map(|code| code.requires_new_token()).unwrap_or(false)
	}
}

/// A registration response after the HTTP status has been taken into account
#[derive(Clone, Debug, PartialEq)]
pub enum RegisterResponse {
	Success(RegisterSuccess),
	Failure(RegisterFailure),
}

impl RegisterResponse {
	/// Interprets a JSON response body according to whether the HTTP status was successful.
	///
	/// # Errors
	///
	/// A successful status whose body has no API key is an unreadable response. Failure bodies are read leniently, so
	/// an unexpected shape falls back to the generic failure message instead.
	pub fn from_body(status_ok: bool, body: Value) -> Result<Self, RequestError> {
		if status_ok {
			Ok(Self::Success(serde_json::from_value(body)?))
		} else {
			Ok(Self::Failure(serde_json::from_value(body).unwrap_or_default()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn request_uses_turnstile_field_name() {
		let input = FormInput::from_raw("user_1", "a@b.co", "Abcdef12", "Abcdef12");
		let request = RegisterRequest::new(&input, String::from("token-1"));
		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(
			body,
			json!({
				"username": "user_1",
				"email": "a@b.co",
				"password": "Abcdef12",
				"turnstileToken": "token-1",
			})
		);
	}

	#[test]
	fn request_does_not_carry_confirmation() {
		let input = FormInput::from_raw("user_1", "a@b.co", "Abcdef12", "Abcdef12");
		let body = serde_json::to_string(&RegisterRequest::new(&input, String::from("t"))).unwrap();
		assert!(!body.contains("confirm"));
	}

	#[test]
	fn success_accepts_minimal_and_full_bodies() {
		let minimal: RegisterSuccess = serde_json::from_value(json!({ "api_key": "abc123" })).unwrap();
		assert_eq!(minimal.api_key, "abc123");
		assert_eq!(minimal.quota_summary(), None);

		let full: RegisterSuccess = serde_json::from_value(json!({
			"username": "user_1",
			"email": "a@b.co",
			"api_key": "abc123",
			"monthly_request_limit": 1000,
			"monthly_requests_remaining": 1000,
			"next_reset_date": "2026-11-01",
		}))
		.unwrap();
		assert_eq!(
			full.quota_summary().as_deref(),
			Some("Лимит запросов: 1000 в месяц (сброс 2026-11-01)")
		);
	}

	#[test]
	fn success_without_key_is_rejected() {
		let result: Result<RegisterSuccess, _> = serde_json::from_value(json!({ "username": "user_1" }));
		assert!(result.is_err());
	}

	#[test]
	fn username_exists_uses_fixed_message() {
		let failure: RegisterFailure = serde_json::from_value(json!({
			"error_code": "username_exists",
			"detail": "something else",
		}))
		.unwrap();
		assert_eq!(failure.message(), "Пользователь с таким именем уже существует");
		assert!(!failure.requires_new_token());
	}

	#[test]
	fn validation_error_shows_detail() {
		let failure: RegisterFailure = serde_json::from_value(json!({
			"error_code": "validation_error",
			"detail": "Пароль слишком простой",
		}))
		.unwrap();
		assert_eq!(failure.message(), "Пароль слишком простой");

		let failure: RegisterFailure = serde_json::from_value(json!({ "error_code": "validation_error" })).unwrap();
		assert_eq!(failure.message(), GENERIC_REGISTRATION_FAILURE);
	}

	#[test]
	fn unknown_code_falls_back_to_detail_then_generic() {
		let failure: RegisterFailure = serde_json::from_value(json!({
			"error_code": "rate_limited",
			"detail": "Слишком много попыток",
		}))
		.unwrap();
		assert_eq!(failure.message(), "Слишком много попыток");

		let failure: RegisterFailure = serde_json::from_value(json!({})).unwrap();
		assert_eq!(failure.message(), GENERIC_REGISTRATION_FAILURE);
	}

	#[test]
	fn structured_detail_is_not_displayed() {
		let failure: RegisterFailure = serde_json::from_value(json!({
			"detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }],
		}))
		.unwrap();
		assert_eq!(failure.detail_text(), None);
		assert_eq!(failure.message(), GENERIC_REGISTRATION_FAILURE);
	}

	#[test]
	fn response_branches_on_status() {
		let response = RegisterResponse::from_body(true, json!({ "api_key": "abc123" })).unwrap();
		let RegisterResponse::Success(success) = response else {
			panic!("expected a success response");
		};
		assert_eq!(success.api_key, "abc123");

		let response = RegisterResponse::from_body(false, json!({ "error_code": "email_exists" })).unwrap();
		let RegisterResponse::Failure(failure) = response else {
			panic!("expected a failure response");
		};
		assert_eq!(failure.message(), "Этот email уже зарегистрирован");
	}

	#[test]
	fn success_status_without_key_is_a_parse_error() {
		let result = RegisterResponse::from_body(true, json!({ "detail": "ok" }));
		assert!(matches!(result, Err(RequestError::Parse(_))));
	}

	#[test]
	fn unexpected_failure_body_uses_generic_message() {
		let response = RegisterResponse::from_body(false, json!(["Internal Server Error"])).unwrap();
		let RegisterResponse::Failure(failure) = response else {
			panic!("expected a failure response");
		};
		assert_eq!(failure.message(), GENERIC_REGISTRATION_FAILURE);
	}

	#[test]
	fn captcha_failure_requires_new_token() {
		let failure: RegisterFailure = serde_json::from_value(json!({ "error_code": "captcha_failed" })).unwrap();
		assert!(failure.requires_new_token());
		assert_eq!(failure.message(), "Ошибка проверки капчи");
	}
}
