pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 8.0;
pub const ZOOM_SENSITIVITY: f64 = 0.0015;

/// Only the primary button pans.
const PRIMARY_BUTTON: i16 = 0;

#[derive(Clone, Copy, Debug)]
pub struct PanZoomConfig {
	pub min_scale: f64,
	pub max_scale: f64,
	pub sensitivity: f64,
}

impl Default for PanZoomConfig {
	fn default() -> Self {
		Self {
			min_scale: MIN_SCALE,
			max_scale: MAX_SCALE,
			sensitivity: ZOOM_SENSITIVITY,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	/// Value for an SVG `transform` attribute.
	pub fn to_svg(&self) -> String {
		format!("translate({},{}) scale({})", self.x, self.y, self.k)
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub last_x: f64,
	pub last_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanZoomState {
	pub transform: ViewTransform,
	pub drag: DragState,
	pub config: PanZoomConfig,
}

impl PanZoomState {
	pub fn new(config: PanZoomConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Starts a pan; returns whether the pointer should be captured.
	pub fn begin_drag(&mut self, button: i16, x: f64, y: f64) -> bool {
		if button != PRIMARY_BUTTON {
			return false;
		}
		self.drag = DragState {
			active: true,
			last_x: x,
			last_y: y,
		};
		true
	}

	/// Returns whether the transform changed.
	pub fn drag_to(&mut self, x: f64, y: f64) -> bool {
		if !self.drag.active {
			return false;
		}
		self.transform.x += x - self.drag.last_x;
		self.transform.y += y - self.drag.last_y;
		self.drag.last_x = x;
		self.drag.last_y = y;
		true
	}

	pub fn end_drag(&mut self) {
		self.drag.active = false;
	}

	/// Zooms around `(px, py)`, keeping the graph point under it fixed.
	pub fn zoom_at(&mut self, px: f64, py: f64, delta_y: f64) {
		let (cx, cy) = self.screen_to_graph(px, py);
		let k = (self.transform.k * (-delta_y * self.config.sensitivity).exp())
			.clamp(self.config.min_scale, self.config.max_scale);
		self.transform = ViewTransform {
			x: px - cx * k,
			y: py - cy * k,
			k,
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn graph_to_screen(state: &PanZoomState, gx: f64, gy: f64) -> (f64, f64) {
		let t = state.transform;
		(gx * t.k + t.x, gy * t.k + t.y)
	}

	fn state_at(x: f64, y: f64, k: f64) -> PanZoomState {
		PanZoomState {
			transform: ViewTransform { x, y, k },
			..PanZoomState::default()
		}
	}

	#[test]
	fn starts_at_identity() {
		let state = PanZoomState::new(PanZoomConfig::default());
		assert_eq!(state.transform, ViewTransform::default());
		assert!(!state.drag.active);
		assert_eq!(state.transform.to_svg(), "translate(0,0) scale(1)");
	}

	#[test]
	fn zoom_keeps_cursor_point_fixed() {
		let cases = [
			(0.0, 0.0, 1.0, 100.0, 50.0, -120.0),
			(35.5, -20.0, 2.5, 300.0, 10.0, 240.0),
			(-400.0, 80.0, 0.3, 12.0, 700.0, -53.0),
			(10.0, 10.0, 7.9, 0.0, 0.0, -500.0),
		];
		for (x, y, k, px, py, delta) in cases {
			let mut state = state_at(x, y, k);
			let before = state.screen_to_graph(px, py);
			state.zoom_at(px, py, delta);
			let (sx, sy) = graph_to_screen(&state, before.0, before.1);
			assert!((sx - px).abs() < EPS, "x drifted: {sx} vs {px}");
			assert!((sy - py).abs() < EPS, "y drifted: {sy} vs {py}");
		}
	}

	#[test]
	fn zoom_in_direction_follows_wheel_sign() {
		let mut state = PanZoomState::default();
		state.zoom_at(0.0, 0.0, -100.0);
		assert!(state.transform.k > 1.0);
		state.zoom_at(0.0, 0.0, 400.0);
		assert!(state.transform.k < 1.0);
	}

	#[test]
	fn scale_is_clamped() {
		let mut state = PanZoomState::default();
		for _ in 0..200 {
			state.zoom_at(50.0, 50.0, -1000.0);
			assert!(state.transform.k <= MAX_SCALE);
		}
		assert!((state.transform.k - MAX_SCALE).abs() < EPS);

		for _ in 0..200 {
			state.zoom_at(50.0, 50.0, 1000.0);
			assert!(state.transform.k >= MIN_SCALE);
		}
		assert!((state.transform.k - MIN_SCALE).abs() < EPS);
	}

	#[test]
	fn custom_bounds_are_honoured() {
		let mut state = PanZoomState::new(PanZoomConfig {
			min_scale: 0.5,
			max_scale: 2.0,
			..PanZoomConfig::default()
		});
		state.zoom_at(0.0, 0.0, -10_000.0);
		assert_eq!(state.transform.k, 2.0);
		state.zoom_at(0.0, 0.0, 10_000.0);
		assert_eq!(state.transform.k, 0.5);
	}

	#[test]
	fn opposite_wheel_steps_restore_scale() {
		let mut state = state_at(12.0, -7.0, 1.7);
		state.zoom_at(200.0, 150.0, -100.0);
		state.zoom_at(200.0, 150.0, 100.0);
		assert!((state.transform.k - 1.7).abs() < EPS);
		assert!((state.transform.x - 12.0).abs() < 1e-6);
		assert!((state.transform.y + 7.0).abs() < 1e-6);
	}

	#[test]
	fn drag_is_additive() {
		let mut split = PanZoomState::default();
		assert!(split.begin_drag(0, 10.0, 10.0));
		split.drag_to(25.0, 3.0);
		split.drag_to(18.0, 40.0);
		split.end_drag();

		let mut single = PanZoomState::default();
		single.begin_drag(0, 10.0, 10.0);
		single.drag_to(18.0, 40.0);
		single.end_drag();

		assert_eq!(split.transform, single.transform);
		assert_eq!(split.transform.x, 8.0);
		assert_eq!(split.transform.y, 30.0);
	}

	#[test]
	fn drag_ignores_scale() {
		let mut state = state_at(0.0, 0.0, 4.0);
		state.begin_drag(0, 0.0, 0.0);
		state.drag_to(10.0, -5.0);
		assert_eq!(state.transform, ViewTransform { x: 10.0, y: -5.0, k: 4.0 });
	}

	#[test]
	fn secondary_button_does_not_drag() {
		let mut state = PanZoomState::default();
		assert!(!state.begin_drag(2, 0.0, 0.0));
		assert!(!state.drag_to(50.0, 50.0));
		assert_eq!(state.transform, ViewTransform::default());
	}

	#[test]
	fn moves_after_release_are_ignored() {
		let mut state = PanZoomState::default();
		state.begin_drag(0, 0.0, 0.0);
		state.drag_to(5.0, 5.0);
		state.end_drag();
		assert!(!state.drag_to(100.0, 100.0));
		assert_eq!(state.transform.x, 5.0);
	}

	#[test]
	fn wheel_does_not_touch_drag_state() {
		let mut state = PanZoomState::default();
		state.begin_drag(0, 1.0, 1.0);
		state.zoom_at(0.0, 0.0, -50.0);
		assert!(state.drag.active);
		assert_eq!((state.drag.last_x, state.drag.last_y), (1.0, 1.0));
	}

	#[test]
	fn transform_attribute_format() {
		let t = ViewTransform {
			x: 12.5,
			y: -3.0,
			k: 2.0,
		};
		assert_eq!(t.to_svg(), "translate(12.5,-3) scale(2)");
	}
}
