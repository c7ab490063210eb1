use std::time::Duration;

use leptos::prelude::*;
use log::warn;

pub const MESSAGES: [&str; 8] = [
	"Retrieving military doctrine context...",
	"Analyzing scenario requirements...",
	"Generating behavior tree structure...",
	"Validating XML output...",
	"Applying military context to nodes...",
	"Processing RAG results...",
	"Formatting tree visualization...",
	"Almost there...",
];

pub const ROTATE_EVERY: Duration = Duration::from_secs(3);

pub fn next_message(current: usize) -> usize {
	(current + 1) % MESSAGES.len()
}

/// Spinner with a status line that cycles while a tree is generated.
#[component]
pub fn LoadingMessages() -> impl IntoView {
	let current = RwSignal::new(0usize);

	match set_interval_with_handle(move || current.update(|i| *i = next_message(*i)), ROTATE_EVERY) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => warn!("loading message timer unavailable: {err:?}"),
	}

	view! {
		<div class="loading">
			<div class="loading__spinner"></div>
			<p class="loading__message">{move || MESSAGES[current.get()]}</p>
			<p class="loading__hint">"This may take a few minutes..."</p>
		</div>
	}
}

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;
