use std::fmt;

use log::{error, info};

use super::api::DiscoverResponse;
use crate::components::petri_net::PetriNet;
use crate::error::UploadError;

/// One-line status shown next to the upload button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
	#[default]
	Idle,
	Uploading(String),
	Discovered(String),
	UploadFailed,
	RenderFailed,
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Idle => f.write_str("No event log loaded"),
			Self::Uploading(name) => write!(f, "Uploading {name}..."),
			Self::Discovered(name) => write!(f, "Discovered petri net from {name}"),
			Self::UploadFailed => f.write_str("Error during discovery!"),
			Self::RenderFailed => f.write_str("Error rendering Petri net!"),
		}
	}
}

/// What the page should do once an upload has finished.
#[derive(Debug)]
pub struct Completion {
	pub status: Status,
	pub net: Option<PetriNet>,
}

/// Tracks the log the server assigned to the most recent upload. Overlapping
/// uploads are not guarded; whichever completes last wins.
#[derive(Debug, Default)]
pub struct UploadSession {
	current_log_id: Option<String>,
}

impl UploadSession {
	pub fn current_log_id(&self) -> Option<&str> {
		self.current_log_id.as_deref()
	}

	pub fn complete(
		&mut self,
		file_name: &str,
		result: Result<DiscoverResponse, UploadError>,
	) -> Completion {
		match result {
			Ok(resp) => {
				info!("Set current log id: {}", resp.log_id);
				self.current_log_id = Some(resp.log_id);
				Completion {
					status: Status::Discovered(file_name.to_owned()),
					net: Some(resp.net),
				}
			}
			Err(err) => {
				error!("Discovery for {file_name} failed: {err}");
				Completion {
					status: Status::UploadFailed,
					net: None,
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::petri_net::PetriNet;

	fn response(log_id: &str) -> DiscoverResponse {
		DiscoverResponse {
			log_id: log_id.into(),
			net: PetriNet::default(),
		}
	}

	#[test]
	fn status_texts() {
		assert_eq!(Status::default().to_string(), "No event log loaded");
		assert_eq!(
			Status::Uploading("log.xes".into()).to_string(),
			"Uploading log.xes..."
		);
		assert_eq!(
			Status::Discovered("log.xes".into()).to_string(),
			"Discovered petri net from log.xes"
		);
		assert_eq!(Status::UploadFailed.to_string(), "Error during discovery!");
		assert_eq!(Status::RenderFailed.to_string(), "Error rendering Petri net!");
	}

	#[test]
	fn success_stores_log_id_and_hands_over_net() {
		let mut session = UploadSession::default();
		let done = session.complete(
			"log.xes",
			DiscoverResponse::from_json(
				r#"{"logId":"abc","nodes":[{"id":"p1","type":"place","label":"Start"}],"links":[]}"#,
			),
		);

		assert_eq!(session.current_log_id(), Some("abc"));
		assert_eq!(done.status, Status::Discovered("log.xes".into()));
		assert_eq!(done.net.unwrap().nodes[0].id, "p1");
	}

	#[test]
	fn server_error_renders_nothing() {
		let mut session = UploadSession::default();
		let done = session.complete("log.xes", Err(UploadError::Status(500)));

		assert_eq!(done.status, Status::UploadFailed);
		assert!(done.net.is_none());
		assert_eq!(session.current_log_id(), None);
	}

	#[test]
	fn failure_keeps_previous_log_id() {
		let mut session = UploadSession::default();
		session.complete("a.xes", Ok(response("first")));
		session.complete("b.xes", Err(UploadError::Network("offline".into())));
		assert_eq!(session.current_log_id(), Some("first"));
	}

	#[test]
	fn later_upload_overwrites_log_id() {
		let mut session = UploadSession::default();
		session.complete("a.xes", Ok(response("first")));
		session.complete("b.xes", Ok(response("second")));
		assert_eq!(session.current_log_id(), Some("second"));
	}
}
