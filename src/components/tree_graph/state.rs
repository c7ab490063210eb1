use std::collections::{HashMap, HashSet};

use super::types::TreeGraph;

pub const NODE_MIN_WIDTH: f64 = 100.0;
pub const NODE_HEIGHT: f64 = 36.0;
const NODE_PADDING: f64 = 10.0;
const CHAR_WIDTH: f64 = 7.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 1.5;
pub const ZOOM_STEP: f64 = 1.2;
pub const FIT_PADDING: f64 = 0.2;
pub const SNAP_GRID: f64 = 15.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NodeView {
	pub label: String,
	pub color: &'static str,
	/// Top-left corner in graph space.
	pub x: f64,
	pub y: f64,
	pub width: f64,
}

impl NodeView {
	pub fn contains(&self, gx: f64, gy: f64) -> bool {
		gx >= self.x && gx <= self.x + self.width && gy >= self.y && gy <= self.y + NODE_HEIGHT
	}

	pub fn top_center(&self) -> (f64, f64) {
		(self.x + self.width / 2.0, self.y)
	}

	pub fn bottom_center(&self) -> (f64, f64) {
		(self.x + self.width / 2.0, self.y + NODE_HEIGHT)
	}
}

/// Estimated box width for a label, before any text is measured.
pub fn node_width(label: &str) -> f64 {
	(label.chars().count() as f64 * CHAR_WIDTH + 2.0 * NODE_PADDING).max(NODE_MIN_WIDTH)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
}

/// Everything the canvas needs to draw and interact with one tree.
pub struct TreeGraphState {
	pub nodes: Vec<NodeView>,
	pub edges: Vec<(usize, usize)>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl TreeGraphState {
	pub fn new(graph: &TreeGraph, width: f64, height: f64) -> Self {
		let mut state = Self {
			nodes: Vec::new(),
			edges: Vec::new(),
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		};
		state.load(graph);
		state
	}

	/// Replace the displayed tree and refit the view.
	pub fn load(&mut self, graph: &TreeGraph) {
		let mut id_to_idx = HashMap::new();
		self.nodes = graph
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				id_to_idx.insert(node.id.as_str(), i);
				NodeView {
					label: node.label.clone(),
					color: node.category.color(),
					x: node.x,
					y: node.y,
					width: node_width(&node.label),
				}
			})
			.collect();
		self.edges = graph
			.edges
			.iter()
			.filter_map(|edge| {
				match (id_to_idx.get(edge.source.as_str()), id_to_idx.get(edge.target.as_str())) {
					(Some(&src), Some(&tgt)) => Some((src, tgt)),
					_ => None,
				}
			})
			.collect();

		self.drag = DragState::default();
		self.pan = PanState::default();
		self.hover = HoverState::default();
		self.fit_view();
	}

	/// Graph-space bounding box as `(min_x, min_y, max_x, max_y)`.
	pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
		let first = self.nodes.first()?;
		let init = (first.x, first.y, first.x + first.width, first.y + NODE_HEIGHT);
		Some(self.nodes.iter().fold(init, |(x0, y0, x1, y1), n| {
			(x0.min(n.x), y0.min(n.y), x1.max(n.x + n.width), y1.max(n.y + NODE_HEIGHT))
		}))
	}

	/// Center the tree and zoom so it fits with [`FIT_PADDING`] to spare.
	pub fn fit_view(&mut self) {
		let Some((x0, y0, x1, y1)) = self.bounds() else {
			self.transform = ViewTransform::default();
			return;
		};
		let (bw, bh) = ((x1 - x0).max(1.0), (y1 - y0).max(1.0));
		let k = (self.width / (bw * (1.0 + FIT_PADDING)))
			.min(self.height / (bh * (1.0 + FIT_PADDING)))
			.clamp(MIN_ZOOM, MAX_ZOOM);
		self.transform = ViewTransform {
			x: self.width / 2.0 - (x0 + bw / 2.0) * k,
			y: self.height / 2.0 - (y0 + bh / 2.0) * k,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.nodes.iter().rposition(|n| n.contains(gx, gy))
	}

	/// Zoom by `factor`, keeping the graph point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn zoom_in(&mut self) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.zoom_at(self.width / 2.0, self.height / 2.0, 1.0 / ZOOM_STEP);
	}

	/// Start dragging the node under the pointer, or panning if there is none.
	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if let Some(idx) = self.node_at_position(sx, sy) {
			self.drag = DragState {
				active: true,
				node: Some(idx),
				start_x: sx,
				start_y: sy,
				node_start_x: self.nodes[idx].x,
				node_start_y: self.nodes[idx].y,
			};
		} else {
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if !self.drag.active {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
		}

		if self.drag.active {
			if let Some(idx) = self.drag.node {
				let (dx, dy) = (
					(sx - self.drag.start_x) / self.transform.k,
					(sy - self.drag.start_y) / self.transform.k,
				);
				let node = &mut self.nodes[idx];
				node.x = snap(self.drag.node_start_x + dx);
				node.y = snap(self.drag.node_start_y + dy);
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn pointer_up(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
		self.set_hover(None);
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the old highlight around so it can fade out.
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (target, speed) = if self.hover.node.is_some() {
			(1.0, 6.0)
		} else {
			(0.0, 4.0)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn snap(v: f64) -> f64 {
	(v / SNAP_GRID).round() * SNAP_GRID
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
