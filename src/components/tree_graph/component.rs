use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::callbacks::CanvasCallbacks;
use super::render;
use super::state::TreeGraphState;
use super::types::{NodeCategory, TreeGraph};

const FRAME_DT: f64 = 0.016;

type SharedState = Rc<RefCell<Option<TreeGraphState>>>;
type Callbacks = CanvasCallbacks<Closure<dyn FnMut()>>;

fn request_frame(callbacks: &Callbacks, window: &web_sys::Window) {
	if let Some(cb) = callbacks.frame.borrow().as_ref() {
		if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			callbacks.pending_frame.set(Some(id));
		}
	}
}

fn release_callbacks(callbacks: &Callbacks) {
	let window = web_sys::window();
	callbacks.release(
		|id| {
			if let Some(window) = &window {
				let _ = window.cancel_animation_frame(id);
			}
		},
		|cb| {
			if let Some(window) = &window {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		},
	);
}

fn local_position(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn parent_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

fn with_state(state: &SharedState, f: impl FnOnce(&mut TreeGraphState)) {
	if let Some(ref mut s) = *state.borrow_mut() {
		f(s);
	}
}

/// Interactive canvas view of a laid-out behavior tree.
///
/// Nodes can be dragged, the background panned and the wheel zooms. The view
/// refits whenever `data` changes.
#[component]
pub fn TreeGraphCanvas(
	#[prop(into)] data: Signal<TreeGraph>,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let callbacks = Callbacks::default();
	let (state_init, callbacks_init) = (state.clone(), callbacks.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		release_callbacks(&callbacks_init);

		let w = parent_width(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("2d canvas context unavailable");
			return;
		};
		*state_init.borrow_mut() = Some(TreeGraphState::new(&data.get_untracked(), w, height));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*callbacks_init.resize.borrow_mut() = Some(Closure::new(move || {
			let nw = parent_width(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			with_state(&state_resize, |s| s.resize(nw, height));
		}));
		if let Some(ref cb) = *callbacks_init.resize.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, callbacks_anim) = (state_init.clone(), callbacks_init.clone());
		*callbacks_init.frame.borrow_mut() = Some(Closure::new(move || {
			with_state(&state_anim, |s| {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			});
			if let Some(win) = web_sys::window() {
				request_frame(&callbacks_anim, &win);
			}
		}));
		request_frame(&callbacks_init, &window);
	});

	// The frame callback holds its own slot; unmounting must empty it.
	let callbacks_cleanup = SendWrapper::new(callbacks);
	on_cleanup(move || {
		debug!("tree graph canvas unmounted");
		release_callbacks(&callbacks_cleanup);
	});

	let state_data = state.clone();
	Effect::new(move |_| {
		let graph = data.get();
		with_state(&state_data, |s| s.load(&graph));
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some((x, y)) = local_position(canvas_ref, &ev) {
			with_state(&state_md, |s| s.pointer_down(x, y));
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some((x, y)) = local_position(canvas_ref, &ev) {
			with_state(&state_mm, |s| s.pointer_move(x, y));
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| with_state(&state_mu, TreeGraphState::pointer_up);

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| with_state(&state_ml, TreeGraphState::pointer_leave);

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some((x, y)) = local_position(canvas_ref, &ev) {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			with_state(&state_wh, |s| s.zoom_at(x, y, factor));
		}
	};

	let state_zi = state.clone();
	let state_zo = state.clone();
	let state_fit = state.clone();

	view! {
		<div class="tree-graph" style=format!("position: relative; height: {height}px;")>
			<canvas
				node_ref=canvas_ref
				class="tree-graph-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:wheel=on_wheel
				style="display: block; cursor: grab;"
			/>
			{move || {
				data.with(TreeGraph::is_empty)
					.then(|| view! { <p class="tree-graph-empty">"No behavior tree to display"</p> })
			}}
			<div class="tree-graph-controls">
				<button
					title="Zoom in"
					on:click=move |_| with_state(&state_zi, TreeGraphState::zoom_in)
				>
					"+"
				</button>
				<button
					title="Zoom out"
					on:click=move |_| with_state(&state_zo, TreeGraphState::zoom_out)
				>
					"-"
				</button>
				<button
					title="Fit view"
					on:click=move |_| with_state(&state_fit, TreeGraphState::fit_view)
				>
					"Fit"
				</button>
			</div>
			<GraphLegend />
		</div>
	}
}

/// Color key for node categories.
#[component]
fn GraphLegend() -> impl IntoView {
	view! {
		<div class="tree-graph-legend">
			<h3>"Node Types"</h3>
			<ul>
				{NodeCategory::LEGEND
					.iter()
					.map(|category| {
						view! {
							<li>
								<span
									class="tree-graph-legend__swatch"
									style=format!("background-color: {};", category.color())
								></span>
								<span>{category.label()}</span>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<div class="tree-graph-legend__tips">
				<p>"Tip: Drag nodes to rearrange"</p>
				<p>"Use mouse wheel to zoom"</p>
			</div>
		</div>
	}
}
