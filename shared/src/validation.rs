// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

pub const USERNAME_TOO_SHORT: &str = "Имя пользователя должно содержать минимум 3 символа";
pub const USERNAME_TOO_LONG: &str = "Имя пользователя не должно превышать 30 символов";
pub const USERNAME_INVALID_CHARACTERS: &str =
	"Имя пользователя может содержать только буквы, цифры, тире и подчеркивания";
pub const EMAIL_REQUIRED: &str = "Email обязателен";
pub const EMAIL_INVALID: &str = "Введите корректный email адрес";
pub const PASSWORD_TOO_SHORT: &str = "Пароль должен содержать минимум 8 символов";
pub const PASSWORD_TOO_WEAK: &str = "Пароль должен содержать заглавные и строчные буквы, а также цифры";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Пароли не совпадают";

/// The inputs of the registration form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FormField {
	Username,
	Email,
	Password,
	ConfirmPassword,
}

impl FormField {
	pub const ALL: [FormField; 4] = [Self::Username, Self::Email, Self::Password, Self::ConfirmPassword];

	/// The ID of the input element for this field on the page
	pub fn element_id(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::Email => "email",
			Self::Password => "password",
			Self::ConfirmPassword => "confirmPassword",
		}
	}
}

/// Values of the registration form at the time of submission
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormInput {
	pub username: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
}

impl FormInput {
	/// Builds the form input from raw field values. Username and email are trimmed; passwords are kept as typed.
	pub fn from_raw(username: &str, email: &str, password: &str, confirm_password: &str) -> Self {
		Self {
			username: username.trim().to_string(),
			email: email.trim().to_string(),
			password: password.to_string(),
			confirm_password: confirm_password.to_string(),
		}
	}
}

/// Validation failures, at most one message per field
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn get(&self, field: FormField) -> Option<&'static str> {
		self.0.get(&field).copied()
	}

	pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
		self.0.iter().map(|(field, message)| (*field, *message))
	}

	fn insert(&mut self, field: FormField, message: Option<&'static str>) {
		if let Some(message) = message {
			self.0.insert(field, message);
		}
	}
}

/// Browsers measure strings in UTF-16 code units, so length limits do too.
fn input_length(value: &str) -> usize {
	value.encode_utf16().count()
}

fn username_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("username pattern is valid"))
}

fn email_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn check_username(username: &str) -> Option<&'static str> {
	let length = input_length(username);
	if length < USERNAME_MIN_LENGTH {
		Some(USERNAME_TOO_SHORT)
	} else if length > USERNAME_MAX_LENGTH {
		Some(USERNAME_TOO_LONG)
	} else if !username_pattern().is_match(username) {
		Some(USERNAME_INVALID_CHARACTERS)
	} else {
		None
	}
}

fn check_email(email: &str) -> Option<&'static str> {
	if email.is_empty() {
		Some(EMAIL_REQUIRED)
	} else if !email_pattern().is_match(email) {
		Some(EMAIL_INVALID)
	} else {
		None
	}
}

fn check_password(password: &str) -> Option<&'static str> {
	if input_length(password) < PASSWORD_MIN_LENGTH {
		return Some(PASSWORD_TOO_SHORT);
	}
	let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
	let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
	let has_digit = password.chars().any(|c| c.is_ascii_digit());
	if has_lowercase && has_uppercase && has_digit {
		None
	} else {
		Some(PASSWORD_TOO_WEAK)
	}
}

/// Runs every field rule against the form input. Within a field, the first failing rule wins.
pub fn validate_form(input: &FormInput) -> ValidationErrors {
	let mut errors = ValidationErrors::default();
	errors.insert(FormField::Username, check_username(&input.username));
	errors.insert(FormField::Email, check_email(&input.email));
	errors.insert(FormField::Password, check_password(&input.password));
	if input.confirm_password != input.password {
		errors.insert(FormField::ConfirmPassword, Some(PASSWORDS_DO_NOT_MATCH));
	}
	errors
}

/// Display mode of a password input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputVisibility {
	Masked,
	Plain,
}

impl InputVisibility {
	/// Reads the mode from an input's `type` attribute. Anything other than `password` is shown in plain text.
	pub fn from_input_type(input_type: &str) -> Self {
		if input_type == "password" {
			Self::Masked
		} else {
			Self::Plain
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Masked => Self::Plain,
			Self::Plain => Self::Masked,
		}
	}

	pub fn input_type(&self) -> &'static str {
		match self {
			Self::Masked => "password",
			Self::Plain => "text",
		}
	}

	/// The icon class the toggle control shows while the input is in this mode
	pub fn icon_class(&self) -> &'static str {
		match self {
			Self::Masked => "fa-eye",
			Self::Plain => "fa-eye-slash",
		}
	}
}
