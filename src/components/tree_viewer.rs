use leptos::prelude::*;

use super::toggle_class;
use super::tree_graph::{TreeGraphCanvas, layout_xml};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum TreeView {
	#[default]
	Visual,
	Xml,
}

/// Behavior tree tab: interactive graph or the raw XML.
#[component]
pub fn TreeViewer(#[prop(into)] xml: Signal<Option<String>>) -> impl IntoView {
	let view_mode = RwSignal::new(TreeView::default());
	let graph = Memo::new(move |_| xml.with(|x| layout_xml(x.as_deref())));

	view! {
		<div class="viewer">
			<div class="viewer__toggle">
				<button
					class=move || toggle_class("toggle", view_mode.get() == TreeView::Visual)
					on:click=move |_| view_mode.set(TreeView::Visual)
				>
					"Visual"
				</button>
				<button
					class=move || toggle_class("toggle", view_mode.get() == TreeView::Xml)
					on:click=move |_| view_mode.set(TreeView::Xml)
				>
					"XML"
				</button>
			</div>
			<div class="viewer__body">
				{move || match view_mode.get() {
					TreeView::Visual => view! { <TreeGraphCanvas data=graph /> }.into_any(),
					TreeView::Xml => view! { <XmlPreview xml=xml /> }.into_any(),
				}}
			</div>
		</div>
	}
}

#[component]
fn XmlPreview(#[prop(into)] xml: Signal<Option<String>>) -> impl IntoView {
	view! {
		<pre class="xml-preview">
			<code>{move || xml.get().unwrap_or_default()}</code>
		</pre>
	}
}
