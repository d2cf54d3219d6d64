// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use signup_shared::flow::VerificationWidget;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(catch, js_namespace = turnstile, js_name = getResponse)]
	fn turnstile_get_response() -> Result<Option<String>, JsValue>;

	#[wasm_bindgen(catch, js_namespace = turnstile, js_name = reset)]
	fn turnstile_reset() -> Result<(), JsValue>;
}

/// The Cloudflare Turnstile widget embedded in the page
pub struct TurnstileWidget;

impl VerificationWidget for TurnstileWidget {
	fn token(&self) -> Option<String> {
		match turnstile_get_response() {
			Ok(token) => token,
			Err(error) => {
				log::warn!("Turnstile is unavailable: {:?}", error);
				None
			}
		}
	}

	fn reset(&self) {
		if let Err(error) = turnstile_reset() {
			log::warn!("Failed to reset Turnstile: {:?}", error);
		}
	}
}
