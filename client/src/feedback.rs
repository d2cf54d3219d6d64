// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::credential_modal::show_credential_modal;
use crate::components::form_error::show_form_errors;
use crate::components::notification::show_notification;
use signup_shared::config::FormConfig;
use signup_shared::flow::FeedbackView;
use signup_shared::messages::register::RegisterSuccess;
use signup_shared::notification::Notification;
use signup_shared::validation::ValidationErrors;

/// Shows registration feedback by changing the page
pub struct PageFeedback {
	config: FormConfig,
}

impl PageFeedback {
	pub fn new(config: FormConfig) -> Self {
		Self { config }
	}
}

impl FeedbackView for PageFeedback {
	fn show_notification(&self, notification: Notification) {
		if let Err(error) = show_notification(notification, &self.config) {
			log::error!("Failed to show notification: {}", error);
		}
	}

	fn show_form_errors(&self, errors: &ValidationErrors) {
		if let Err(error) = show_form_errors(errors) {
			log::error!("Failed to show form errors: {}", error);
		}
	}

	fn show_credential(&self, registration: &RegisterSuccess) {
		if let Err(error) = show_credential_modal(registration, &self.config) {
			log::error!("Failed to show the issued API key: {}", error);
		}
	}
}
