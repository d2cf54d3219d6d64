// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::error_codes::RegistrationErrorCode;
use crate::messages::register::{RegisterRequest, RegisterResponse, RegisterSuccess};
use crate::notification::Notification;
use crate::validation::{validate_form, FormInput, ValidationErrors};
use futures::future::LocalBoxFuture;
use std::cell::Cell;

pub mod errors;
use errors::RequestError;

/// The bot-check widget on the page
pub trait VerificationWidget {
	/// The current response token, if the check has been passed
	fn token(&self) -> Option<String>;

	/// Clears the widget so it issues a new token
	fn reset(&self);
}

/// Sends registration requests to the server
pub trait RegistrationApi {
	fn register<'a>(
		&'a self,
		request: &'a RegisterRequest,
	) -> LocalBoxFuture<'a, Result<RegisterResponse, RequestError>>;
}

/// Everything the registration flow shows to the user
pub trait FeedbackView {
	fn show_notification(&self, notification: Notification);
	fn show_form_errors(&self, errors: &ValidationErrors);
	fn show_credential(&self, registration: &RegisterSuccess);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionState {
	Idle,
	TokenCheck,
	LocalValidation,
	Submitting,
	Success,
	Failure,
}

/// How a single submission attempt ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
	/// Another attempt was still waiting on the server, so this one did nothing
	AlreadySubmitting,
	MissingToken,
	Invalid(ValidationErrors),
	Registered,
	Rejected(Option<RegistrationErrorCode>),
	RequestFailed,
}

/// Drives one registration attempt at a time from the submit event to the feedback shown for it.
pub struct RegistrationController<W, A, V> {
	widget: W,
	api: A,
	view: V,
	state: Cell<SubmissionState>,
}

impl<W, A, V> RegistrationController<W, A, V>
where
	W: VerificationWidget,
	A: RegistrationApi,
	V: FeedbackView,
{
	pub fn new(widget: W, api: A, view: V) -> Self {
		Self {
			widget,
			api,
			view,
			state: Cell::new(SubmissionState::Idle),
		}
	}

	pub fn state(&self) -> SubmissionState {
		self.state.get()
	}

	fn transition(&self, next: SubmissionState) {
		log::debug!("Registration state {:?} -> {:?}", self.state.get(), next);
		self.state.set(next);
	}

	/// Runs a full submission attempt.
	///
	/// The form always ends up back in [`SubmissionState::Idle`], whatever the outcome. A submission made while
	/// another request is still in flight is dropped with [`SubmissionOutcome::AlreadySubmitting`] instead of
	/// sending a duplicate request, which the page script this replaces would have done.
	pub async fn submit(&self, input: FormInput) -> SubmissionOutcome {
		if self.state.get() == SubmissionState::Submitting {
			log::warn!("Ignoring registration submission while another is in flight");
			return SubmissionOutcome::AlreadySubmitting;
		}

		self.transition(SubmissionState::TokenCheck);
		let token = match self.widget.token().filter(|token| !token.is_empty()) {
			Some(token) => token,
			None => {
				self.view.show_notification(Notification::missing_verification());
				self.transition(SubmissionState::Idle);
				return SubmissionOutcome::MissingToken;
			}
		};

		self.transition(SubmissionState::LocalValidation);
		let errors = validate_form(&input);
		if !errors.is_empty() {
			log::debug!("Registration form has {} invalid fields", errors.len());
			self.view.show_form_errors(&errors);
			self.transition(SubmissionState::Idle);
			return SubmissionOutcome::Invalid(errors);
		}

		self.transition(SubmissionState::Submitting);
		let request = RegisterRequest::new(&input, token);
		let outcome = match self.api.register(&request).await {
			Ok(RegisterResponse::Success(registration)) => {
				self.transition(SubmissionState::Success);
				self.view.show_credential(&registration);
				SubmissionOutcome::Registered
			}
			Ok(RegisterResponse::Failure(failure)) => {
				self.transition(SubmissionState::Failure);
				log::info!("Registration rejected with code {:?}", failure.error_code);
				self.view
					.show_notification(Notification::registration_rejected(&failure.message()));
				if failure.requires_new_token() {
					self.widget.reset();
				}
				SubmissionOutcome::Rejected(failure.code())
			}
			Err(error) => {
				self.transition(SubmissionState::Failure);
				log::error!("Registration error: {}", error);
				self.view.show_notification(Notification::server_unreachable());
				self.widget.reset();
				SubmissionOutcome::RequestFailed
			}
		};
		self.transition(SubmissionState::Idle);
		outcome
	}
}
