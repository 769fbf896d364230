use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use super::api::{self, DISCOVER_ENDPOINT};
use super::session::{Status, UploadSession};
use crate::components::petri_net::PetriNet;

#[component]
pub fn UploadControl(
	status: RwSignal<Status>,
	net: RwSignal<Option<PetriNet>>,
	#[prop(default = DISCOVER_ENDPOINT)] endpoint: &'static str,
) -> impl IntoView {
	let input_ref = NodeRef::<leptos::html::Input>::new();
	let session: Rc<RefCell<UploadSession>> = Rc::new(RefCell::new(UploadSession::default()));

	let on_click = move |_| {
		if let Some(input) = input_ref.get() {
			input.click();
		}
	};

	let on_change = move |_| {
		let Some(file) = input_ref
			.get()
			.and_then(|input| input.files())
			.and_then(|files| files.get(0))
		else {
			return;
		};
		let name = file.name();
		status.set(Status::Uploading(name.clone()));

		let session = session.clone();
		spawn_local(async move {
			let result = api::discover(endpoint, &file).await;
			let done = session.borrow_mut().complete(&name, result);
			debug!("Active log: {:?}", session.borrow().current_log_id());
			status.set(done.status);
			if let Some(discovered) = done.net {
				net.set(Some(discovered));
			}
		});
	};

	view! {
		<div class="upload-control">
			<input
				node_ref=input_ref
				type="file"
				style="display: none;"
				on:change=on_change
			/>
			<button class="upload-button" on:click=on_click>
				"Upload event log"
			</button>
			<span class="upload-status">{move || status.get().to_string()}</span>
		</div>
	}
}
