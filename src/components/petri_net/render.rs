use std::fmt;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, SvgsvgElement};

use super::dot::to_dot;
use super::state::{PanZoomConfig, PanZoomState};
use super::types::PetriNet;
use crate::error::{RenderError, describe};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[wasm_bindgen]
extern "C" {
	/// Graphviz compiled to JS, loaded globally by `index.html`.
	type Viz;

	#[wasm_bindgen(constructor, catch)]
	fn new() -> Result<Viz, JsValue>;

	#[wasm_bindgen(method, catch, js_name = renderSVGElement)]
	fn render_svg_element(this: &Viz, src: &str) -> Result<js_sys::Promise, JsValue>;
}

/// The group wrapping a rendered net, with the pan/zoom state driving it.
pub struct Viewport {
	group: Element,
	pub state: PanZoomState,
}

impl Viewport {
	fn new(group: Element, config: PanZoomConfig) -> Self {
		let viewport = Self {
			group,
			state: PanZoomState::new(config),
		};
		viewport.apply();
		viewport
	}

	pub fn apply(&self) {
		if let Err(err) = self
			.group
			.set_attribute("transform", &self.state.transform.to_svg())
		{
			warn!("Failed to apply view transform: {}", describe(&err));
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl ViewBox {
	/// `None` when the content has no area to fit.
	pub fn fitting(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
		(width > 0.0 && height > 0.0).then_some(Self {
			x,
			y,
			width,
			height,
		})
	}
}

impl fmt::Display for ViewBox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
	}
}

/// Lays out `net`, replaces the contents of `host` with the drawing, and
/// returns a fresh viewport over it.
pub async fn draw(host: &SvgsvgElement, net: &PetriNet) -> Result<Viewport, RenderError> {
	let dot = to_dot(net);
	debug!("Rendering DOT description ({} bytes)", dot.len());

	let rendered = layout(&dot).await?;
	splice(host, &rendered)?;
	let group = wrap_in_viewport(host)?;
	fit_to_content(host);

	info!(
		"Rendered petri net with {} nodes and {} links",
		net.nodes.len(),
		net.links.len()
	);
	Ok(Viewport::new(group, PanZoomConfig::default()))
}

async fn layout(dot: &str) -> Result<Element, RenderError> {
	let viz = Viz::new().map_err(RenderError::engine)?;
	let promise = viz.render_svg_element(dot).map_err(RenderError::engine)?;
	let svg = JsFuture::from(promise).await.map_err(RenderError::engine)?;
	svg.dyn_into::<Element>().map_err(|value| {
		RenderError::Engine(format!("expected an element, got {}", describe(&value)))
	})
}

/// Clears `host` and copies the style definitions and main graph group of
/// `rendered` into it. Missing parts are skipped.
pub fn splice(host: &Element, rendered: &Element) -> Result<(), RenderError> {
	clear(host)?;
	for selector in ["defs", "g.graph"] {
		let Some(part) = rendered.query_selector(selector).map_err(RenderError::dom)? else {
			continue;
		};
		let copy = part.clone_node_with_deep(true).map_err(RenderError::dom)?;
		host.append_child(&copy).map_err(RenderError::dom)?;
	}
	Ok(())
}

fn clear(host: &Element) -> Result<(), RenderError> {
	while let Some(child) = host.first_child() {
		host.remove_child(&child).map_err(RenderError::dom)?;
	}
	Ok(())
}

/// Moves every child of `host` into a new `<g>` appended to `host`.
pub fn wrap_in_viewport(host: &Element) -> Result<Element, RenderError> {
	let document = host
		.owner_document()
		.or_else(|| web_sys::window().and_then(|w| w.document()))
		.ok_or_else(|| RenderError::Dom("no document".into()))?;
	let group = create_group(&document)?;
	while let Some(child) = host.first_child() {
		group.append_child(&child).map_err(RenderError::dom)?;
	}
	host.append_child(&group).map_err(RenderError::dom)?;
	Ok(group)
}

fn create_group(document: &Document) -> Result<Element, RenderError> {
	document
		.create_element_ns(Some(SVG_NS), "g")
		.map_err(RenderError::dom)
}

/// Sets the host's view box to its content bounds once layout has happened.
fn fit_to_content(host: &SvgsvgElement) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let host = host.clone();
	let callback = Closure::once_into_js(move || {
		if let Err(err) = apply_fit(&host) {
			warn!("Failed to fit view box: {err}");
		}
	});
	if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
		warn!("Failed to schedule view box fit: {}", describe(&err));
	}
}

pub fn apply_fit(host: &SvgsvgElement) -> Result<Option<ViewBox>, RenderError> {
	let bb = host.get_b_box().map_err(RenderError::dom)?;
	let Some(view_box) = ViewBox::fitting(
		bb.x() as f64,
		bb.y() as f64,
		bb.width() as f64,
		bb.height() as f64,
	) else {
		return Ok(None);
	};
	host.set_attribute("viewBox", &view_box.to_string())
		.map_err(RenderError::dom)?;
	host.set_attribute("preserveAspectRatio", "xMidYMid meet")
		.map_err(RenderError::dom)?;
	Ok(Some(view_box))
}
