// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// Endpoints and timings used by the registration page.
///
/// All delays are in milliseconds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormConfig {
	pub register_endpoint: String,
	pub docs_path: String,
	pub notification_show_delay: u32,
	pub notification_dismiss_delay: u32,
	pub notification_remove_delay: u32,
	pub modal_activate_delay: u32,
	pub copy_confirmation_duration: u32,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			register_endpoint: String::from("/api/register"),
			docs_path: String::from("/docs"),
			notification_show_delay: 10,
			notification_dismiss_delay: 5000,
			notification_remove_delay: 300,
			modal_activate_delay: 50,
			copy_confirmation_duration: 2000,
		}
	}
}

impl FormConfig {
	/// Replaces the registration endpoint. Blank values leave the current endpoint in place.
	pub fn with_register_endpoint(mut self, endpoint: &str) -> Self {
		let endpoint = endpoint.trim();
		if !endpoint.is_empty() {
			self.register_endpoint = endpoint.to_string();
		}
		self
	}
}
