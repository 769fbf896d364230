use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use wasm_bindgen::JsCast;
use web_sys::{PointerEvent, SvgsvgElement, WheelEvent};

use super::render::{self, Viewport};
use super::types::PetriNet;
use crate::error::RenderError;

#[component]
pub fn PetriNetView(
	#[prop(into)] net: Signal<Option<PetriNet>>,
	#[prop(into)] on_error: Callback<RenderError>,
) -> impl IntoView {
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let viewport: Rc<RefCell<Option<Viewport>>> = Rc::new(RefCell::new(None));
	let host = move || {
		svg_ref
			.get()
			.map(|svg| svg.unchecked_into::<SvgsvgElement>())
	};

	let viewport_init = viewport.clone();
	Effect::new(move |_| {
		let Some(net) = net.get() else {
			return;
		};
		let Some(svg) = host() else {
			return;
		};
		let viewport = viewport_init.clone();
		spawn_local(async move {
			match render::draw(&svg, &net).await {
				Ok(fresh) => *viewport.borrow_mut() = Some(fresh),
				Err(err) => {
					error!("Petri net rendering failed: {err}");
					on_error.run(err);
				}
			}
		});
	});

	let viewport_pd = viewport.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		if let Some(ref mut vp) = *viewport_pd.borrow_mut() {
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			if vp.state.begin_drag(ev.button(), x, y) {
				if let Some(svg) = host() {
					let _ = svg.set_pointer_capture(ev.pointer_id());
				}
			}
		}
	};

	let viewport_pm = viewport.clone();
	let on_pointermove = move |ev: PointerEvent| {
		if let Some(ref mut vp) = *viewport_pm.borrow_mut() {
			if vp.state.drag_to(ev.client_x() as f64, ev.client_y() as f64) {
				vp.apply();
			}
		}
	};

	let viewport_pu = viewport.clone();
	let on_pointerup = move |ev: PointerEvent| {
		if let Some(ref mut vp) = *viewport_pu.borrow_mut() {
			vp.state.end_drag();
		}
		if let Some(svg) = host() {
			let _ = svg.release_pointer_capture(ev.pointer_id());
		}
	};

	let viewport_pl = viewport.clone();
	let on_pointerleave = move |ev: PointerEvent| {
		if let Some(ref mut vp) = *viewport_pl.borrow_mut() {
			vp.state.end_drag();
		}
		if let Some(svg) = host() {
			if svg.has_pointer_capture(ev.pointer_id()) {
				let _ = svg.release_pointer_capture(ev.pointer_id());
			}
		}
	};

	let viewport_wh = viewport.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(svg) = host() else {
			return;
		};
		let rect = svg.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		if let Some(ref mut vp) = *viewport_wh.borrow_mut() {
			vp.state.zoom_at(x, y, ev.delta_y());
			vp.apply();
		}
	};

	view! {
		<svg
			node_ref=svg_ref
			class="petri-net"
			on:pointerdown=on_pointerdown
			on:pointermove=on_pointermove
			on:pointerup=on_pointerup
			on:pointerleave=on_pointerleave
			on:wheel=on_wheel
			style="display: block; width: 100%; height: 100%; cursor: grab; touch-action: none;"
		/>
	}
}
