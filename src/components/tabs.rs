use leptos::prelude::*;
use serde_json::Value;

use super::metadata::MetadataViewer;
use super::toggle_class;
use super::tree_viewer::TreeViewer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
	#[default]
	BehaviorTree,
	Metadata,
}

impl Tab {
	pub const ALL: [Tab; 2] = [Tab::BehaviorTree, Tab::Metadata];

	pub fn title(self) -> &'static str {
		match self {
			Tab::BehaviorTree => "Behavior Tree",
			Tab::Metadata => "Metadata",
		}
	}
}

/// Result tabs: the tree viewer and the metadata viewer.
#[component]
pub fn TabLayout(
	#[prop(into)] xml: Signal<Option<String>>,
	#[prop(into)] metadata: Signal<Option<Value>>,
) -> impl IntoView {
	let selected = RwSignal::new(Tab::default());

	view! {
		<div class="tabs">
			<div class="tabs__list" role="tablist">
				{Tab::ALL
					.into_iter()
					.map(|tab| {
						view! {
							<button
								role="tab"
								class=move || toggle_class("tabs__tab", selected.get() == tab)
								on:click=move |_| selected.set(tab)
							>
								{tab.title()}
							</button>
						}
					})
					.collect_view()}
			</div>
			<div class="tabs__panel" role="tabpanel">
				{move || match selected.get() {
					Tab::BehaviorTree => view! { <TreeViewer xml=xml /> }.into_any(),
					Tab::Metadata => view! { <MetadataViewer metadata=metadata /> }.into_any(),
				}}
			</div>
		</div>
	}
}

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;
