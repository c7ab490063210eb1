use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_HEIGHT, NodeView, TreeGraphState};

const BACKGROUND: &str = "#ffffff";
const DOT_COLOR: &str = "#9CA3AF";
const DOT_GAP: f64 = 12.0;
const DOT_SIZE: f64 = 1.0;
const EDGE_RGB: &str = "100, 116, 139";
const CORNER_RADIUS: f64 = 3.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &TreeGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_dots(state, ctx);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_dots(state: &TreeGraphState, ctx: &CanvasRenderingContext2d) {
	let gap = DOT_GAP * state.transform.k;
	if gap < 4.0 {
		return;
	}
	let size = (DOT_SIZE * state.transform.k).max(0.5);
	ctx.set_fill_style_str(DOT_COLOR);
	let mut x = state.transform.x.rem_euclid(gap);
	while x < state.width {
		let mut y = state.transform.y.rem_euclid(gap);
		while y < state.height {
			ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
			y += gap;
		}
		x += gap;
	}
}

fn draw_edges(state: &TreeGraphState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap, arrow_size) = (5.0, 5.0, 8.0);
	let dash_offset = -(state.flow_time * 20.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	for &(src, tgt) in &state.edges {
		let ((x1, y1), (x2, y2)) = (
			state.nodes[src].bottom_center(),
			state.nodes[tgt].top_center(),
		);
		let is_highlighted = state.is_highlighted(src) && state.is_highlighted(tgt);

		// Highlighted edges brighten and thicken, the rest fade back.
		let (alpha, width) = if is_highlighted {
			(0.8 + 0.2 * t, 2.0 * (1.0 + 0.3 * t))
		} else {
			(0.8 - 0.55 * t, 2.0 * (1.0 - 0.3 * t))
		};

		ctx.set_stroke_style_str(&format!("rgba({EDGE_RGB}, {alpha})"));
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let mid_y = (y1 + y2) / 2.0;
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x1, mid_y);
		ctx.line_to(x2, mid_y);
		ctx.line_to(x2, y2 - arrow_size);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!("rgba({EDGE_RGB}, {alpha})"));
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(x2 - arrow_size * 0.5, y2 - arrow_size);
		ctx.line_to(x2 + arrow_size * 0.5, y2 - arrow_size);
		ctx.close_path();
		ctx.fill();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &TreeGraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
	);

	for (idx, node) in state.nodes.iter().enumerate() {
		let highlighted = state.is_highlighted(idx);
		let alpha = if has_highlight && !highlighted {
			1.0 - 0.6 * t
		} else {
			1.0
		};
		let lift = if state.is_hovered(idx) { t } else { 0.0 };

		ctx.set_global_alpha(alpha);
		ctx.set_shadow_color(&format!("rgba(0, 0, 0, {})", 0.1 + 0.1 * lift));
		ctx.set_shadow_blur(4.0 + 4.0 * lift);
		ctx.set_shadow_offset_y(2.0 + 2.0 * lift);
		box_path(ctx, node, -lift);
		ctx.set_fill_style_str(node.color);
		ctx.fill();

		ctx.set_shadow_color("transparent");
		ctx.set_stroke_style_str("#555");
		ctx.set_line_width(1.0);
		ctx.stroke();

		let (cx, cy) = (node.x + node.width / 2.0, node.y + NODE_HEIGHT / 2.0 - lift);
		ctx.set_fill_style_str("white");
		ctx.set_font("500 12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.label, cx, cy);
	}
	ctx.set_global_alpha(1.0);
}

fn box_path(ctx: &CanvasRenderingContext2d, node: &NodeView, dy: f64) {
	let (x, y, w, h, r) = (node.x, node.y + dy, node.width, NODE_HEIGHT, CORNER_RADIUS);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}
