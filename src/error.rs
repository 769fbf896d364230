//! Error types for the upload and render flows.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while sending an event log to the discovery endpoint.
#[derive(Debug, Error)]
pub enum UploadError {
	/// The endpoint answered with a non-2xx status.
	#[error("discovery endpoint returned HTTP {0}")]
	Status(u16),
	/// The request could not be built or sent.
	#[error("request failed: {0}")]
	Network(String),
	/// The response body was not a valid discovery payload.
	#[error("malformed discovery response: {0}")]
	Parse(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for UploadError {
	fn from(err: gloo_net::Error) -> Self {
		Self::Network(err.to_string())
	}
}

/// Failure while turning a net into a drawing.
#[derive(Debug, Error)]
pub enum RenderError {
	/// The layout engine is missing, threw, or rejected the description.
	#[error("layout engine failed: {0}")]
	Engine(String),
	/// A DOM operation on the host threw.
	#[error("dom operation failed: {0}")]
	Dom(String),
}

impl RenderError {
	pub(crate) fn engine(value: JsValue) -> Self {
		Self::Engine(describe(&value))
	}

	pub(crate) fn dom(value: JsValue) -> Self {
		Self::Dom(describe(&value))
	}
}

/// Best-effort message for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
