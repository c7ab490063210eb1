use leptos::prelude::*;
use serde_json::Value;

use super::toggle_class;
use crate::api::Metadata;
use crate::download::metadata_json;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum MetadataView {
	#[default]
	Formatted,
	Json,
}

/// Metadata tab: labelled fields or the raw JSON document.
#[component]
pub fn MetadataViewer(#[prop(into)] metadata: Signal<Option<Value>>) -> impl IntoView {
	let view_mode = RwSignal::new(MetadataView::default());

	view! {
		<div class="viewer">
			<div class="viewer__toggle">
				<button
					class=move || toggle_class("toggle", view_mode.get() == MetadataView::Formatted)
					on:click=move |_| view_mode.set(MetadataView::Formatted)
				>
					"Formatted"
				</button>
				<button
					class=move || toggle_class("toggle", view_mode.get() == MetadataView::Json)
					on:click=move |_| view_mode.set(MetadataView::Json)
				>
					"JSON"
				</button>
			</div>
			<div class="viewer__body viewer__body--scroll">
				{move || {
					let value = metadata.get().unwrap_or(Value::Null);
					match view_mode.get() {
						MetadataView::Formatted => {
							view! { <FormattedMetadata metadata=Metadata::from_value(&value) /> }
								.into_any()
						}
						MetadataView::Json => {
							view! { <pre class="json-preview"><code>{metadata_json(&value)}</code></pre> }
								.into_any()
						}
					}
				}}
			</div>
		</div>
	}
}

#[component]
fn MetadataField(label: &'static str, value: String) -> impl IntoView {
	view! {
		<div class="metadata__field">
			<dt>{label}</dt>
			<dd>{value}</dd>
		</div>
	}
}

#[component]
fn FormattedMetadata(metadata: Metadata) -> impl IntoView {
	let params = metadata.params();
	view! {
		<dl class="metadata">
			<MetadataField label="Timestamp" value=metadata.timestamp />
			<MetadataField label="Scenario Name" value=metadata.scenario />
			<MetadataField label="Prompt" value=metadata.prompt />
			<MetadataField label="Context Chunks Used" value=metadata.context_chunks.to_string() />
			<div class="metadata__field">
				<dt>"Context Sample"</dt>
				<dd>
					<div class="metadata__context">{metadata.context_used}</div>
				</dd>
			</div>
			<div class="metadata__field">
				<dt>"Generation Parameters"</dt>
				<dd>
					<dl class="metadata__params">
						{params
							.into_iter()
							.map(|(key, value)| {
								view! {
									<div>
										<dt>{key}</dt>
										<dd>{value}</dd>
									</div>
								}
							})
							.collect_view()}
					</dl>
				</dd>
			</div>
		</dl>
	}
}
