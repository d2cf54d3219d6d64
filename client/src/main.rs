// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod api;
mod components;
mod dom;
mod error;
mod feedback;
mod form;
mod js_def;

fn main() {
	console_error_panic_hook::set_once();

	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	if let Err(error) = form::attach_when_ready() {
		log::error!("Unable to set up the registration form: {}", error);
	}
}
