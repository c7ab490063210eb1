use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use serde_json::Value;

use crate::api::{self, Generation};
use crate::components::loading::LoadingMessages;
use crate::components::scenario_form::{ScenarioForm, ScenarioInput};
use crate::components::tabs::TabLayout;
use crate::download;

fn save_xml(xml: Signal<Option<String>>, scenario: RwSignal<String>) {
	let Some(xml) = xml.get_untracked() else {
		return;
	};
	if let Err(err) = download::download_xml(&xml, &scenario.get_untracked()) {
		error!("XML download failed: {err:?}");
	}
}

fn save_metadata(metadata: Signal<Option<Value>>, scenario: RwSignal<String>) {
	let Some(metadata) = metadata.get_untracked() else {
		return;
	};
	if let Err(err) = download::download_metadata(&metadata, &scenario.get_untracked()) {
		error!("metadata download failed: {err:?}");
	}
}

/// Generator page: scenario form, progress, downloads and result tabs.
#[component]
pub fn Home() -> impl IntoView {
	let generation = RwSignal::new(None::<Generation>);
	let loading = RwSignal::new(false);
	let failure = RwSignal::new(None::<String>);
	let scenario_name = RwSignal::new(String::new());

	let on_submit = Callback::new(move |input: ScenarioInput| {
		loading.set(true);
		failure.set(None);
		scenario_name.set(input.name.clone());
		spawn_local(async move {
			match api::generate_behavior_tree(&input.name, &input.prompt).await {
				Ok(result) => generation.set(Some(result)),
				Err(err) => failure.set(Some(err.to_string())),
			}
			loading.set(false);
		});
	});

	let xml = Signal::derive(move || generation.with(|g| g.as_ref().map(|g| g.xml.clone())));
	let metadata =
		Signal::derive(move || generation.with(|g| g.as_ref().map(|g| g.metadata.clone())));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page">
				<div class="card">
					<header class="page__header">
						<h1>"Behavior Tree Generator"</h1>
						<p class="subtitle">"Generate military behavior trees with context-aware AI"</p>
					</header>

					<ScenarioForm on_submit=on_submit disabled=loading />
					{move || failure.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}
					<Show when=move || loading.get()>
						<LoadingMessages />
					</Show>

					<Show when=move || generation.with(Option::is_some)>
						<section class="results">
							<div class="results__downloads">
								<button class="btn btn--primary" on:click=move |_| save_xml(xml, scenario_name)>
									"Download XML"
								</button>
								<button class="btn btn--primary" on:click=move |_| save_metadata(metadata, scenario_name)>
									"Download Metadata"
								</button>
							</div>
							<TabLayout xml=xml metadata=metadata />
						</section>
					</Show>
				</div>
			</div>
		</ErrorBoundary>
	}
}
