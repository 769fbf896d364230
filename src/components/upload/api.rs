//! Client for the process discovery endpoint.

use gloo_net::http::Request;
use log::info;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::components::petri_net::PetriNet;
use crate::error::{UploadError, describe};

pub const DISCOVER_ENDPOINT: &str = "/api/discover";

/// Body of a successful discovery call. The net's `nodes` and `links` sit at
/// the top level next to `logId`; other fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct DiscoverResponse {
	#[serde(rename = "logId")]
	pub log_id: String,
	#[serde(flatten)]
	pub net: PetriNet,
}

impl DiscoverResponse {
	pub fn from_json(body: &str) -> Result<Self, UploadError> {
		Ok(serde_json::from_str(body)?)
	}
}

/// Posts `file` as the `file` field of a multipart form.
pub async fn discover(endpoint: &str, file: &File) -> Result<DiscoverResponse, UploadError> {
	let form = FormData::new().map_err(|e| UploadError::Network(describe(&e)))?;
	form.append_with_blob_and_filename("file", file, &file.name())
		.map_err(|e| UploadError::Network(describe(&e)))?;

	info!("Posting {} ({} bytes) to {endpoint}", file.name(), file.size());
	let resp = Request::post(endpoint).body(form)?.send().await?;
	if !resp.ok() {
		return Err(UploadError::Status(resp.status()));
	}
	DiscoverResponse::from_json(&resp.text().await?)
}
