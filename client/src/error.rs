// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use wasm_bindgen::JsValue;

/// Errors that occur while reading or changing the page
#[derive(Debug)]
pub enum DomError {
	NoWindow,
	NoDocument,
	NoBody,
	MissingElement(String),
	EmptyView,
	Js(String),
}

impl From<JsValue> for DomError {
	fn from(error: JsValue) -> Self {
		Self::Js(format!("{:?}", error))
	}
}

impl fmt::Display for DomError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "The browser window is unavailable"),
			Self::NoDocument => write!(f, "The page document is unavailable"),
			Self::NoBody => write!(f, "The page has no body"),
			Self::MissingElement(selector) => write!(f, "No element matches {}", selector),
			Self::EmptyView => write!(f, "A view rendered no elements"),
			Self::Js(error) => write!(f, "A browser call failed: {}", error),
		}
	}
}

impl std::error::Error for DomError {}
