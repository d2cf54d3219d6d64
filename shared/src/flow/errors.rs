// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;

/// Errors that keep a registration request from producing a usable response
#[derive(Debug, Eq, PartialEq)]
pub enum RequestError {
	/// The request couldn't be sent or the connection failed before a response arrived
	Transport(String),
	/// A response arrived, but its body couldn't be read as the expected JSON
	Parse(String),
}

impl RequestError {
	pub fn transport(error: impl fmt::Display) -> Self {
		Self::Transport(error.to_string())
	}

	pub fn parse(error: impl fmt::Display) -> Self {
		Self::Parse(error.to_string())
	}
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "Failed to reach the registration endpoint: {}", error),
			Self::Parse(error) => write!(f, "Failed to read the registration response: {}", error),
		}
	}
}

impl Error for RequestError {}

impl From<serde_json::Error> for RequestError {
	fn from(error: serde_json::Error) -> Self {
		Self::parse(error)
	}
}
