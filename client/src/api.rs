// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::window;
use crate::error::DomError;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use serde_json::Value;
use signup_shared::flow::errors::RequestError;
use signup_shared::flow::RegistrationApi;
use signup_shared::messages::register::{RegisterRequest, RegisterResponse};
use web_sys::Url;

/// Resolves an endpoint path against the address of the current page, so the form works wherever the site is hosted.
pub fn resolve_endpoint(path: &str) -> Result<String, DomError> {
	let page_address = window()?.location().href()?;
	let url = Url::new_with_base(path, &page_address)?;
	url.set_search("");
	url.set_hash("");
	Ok(url.href())
}

/// Registers accounts over HTTP
pub struct HttpRegistrationApi {
	endpoint: String,
}

impl HttpRegistrationApi {
	pub fn new(endpoint: String) -> Self {
		Self { endpoint }
	}

	/// Sends a single registration request and reads its response.
	///
	/// # Errors
	///
	/// Errors occur when the request can't be built or sent, and when the response body isn't the expected JSON.
	async fn send(&self, request: &RegisterRequest) -> Result<RegisterResponse, RequestError> {
		let response = Request::post(&self.endpoint)
			.json(request)
			.map_err(RequestError::transport)?
			.send()
			.await
			.map_err(RequestError::transport)?;
		log::debug!("Registration response status {}", response.status());

		let body: Value = response.json().await.map_err(RequestError::parse)?;
		RegisterResponse::from_body(response.ok(), body)
	}
}

impl RegistrationApi for HttpRegistrationApi {
	fn register<'a>(
		&'a self,
		request: &'a RegisterRequest,
	) -> LocalBoxFuture<'a, Result<RegisterResponse, RequestError>> {
		self.send(request).boxed_local()
	}
}
