use leptos::prelude::*;

use crate::components::petri_net::{PetriNet, PetriNetView};
use crate::components::upload::{Status, UploadControl};
use crate::error::RenderError;

/// Upload an event log and explore the discovered petri net.
#[component]
pub fn Viewer() -> impl IntoView {
	let status = RwSignal::new(Status::Idle);
	let net = RwSignal::new(None::<PetriNet>);
	let on_render_error = Callback::new(move |_: RenderError| status.set(Status::RenderFailed));

	view! {
		<div class="petri-viewer">
			<header class="viewer-toolbar">
				<h1>"Petri Net Viewer"</h1>
				<UploadControl status=status net=net />
			</header>
			<main class="viewer-canvas">
				<PetriNetView net=net on_error=on_render_error />
			</main>
			<p class="hint">"Drag to pan. Scroll to zoom."</p>
		</div>
	}
}
