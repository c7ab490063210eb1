use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// What the user typed into the scenario form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScenarioInput {
	pub name: String,
	pub prompt: String,
}

impl ScenarioInput {
	/// Both fields carry something other than whitespace.
	pub fn is_complete(&self) -> bool {
		!self.name.trim().is_empty() && !self.prompt.trim().is_empty()
	}
}

pub fn submit_label(busy: bool) -> &'static str {
	if busy {
		"Generating..."
	} else {
		"Generate Behavior Tree"
	}
}

fn submit_class(busy: bool) -> &'static str {
	if busy {
		"btn btn--primary btn--busy"
	} else {
		"btn btn--primary"
	}
}

#[component]
pub fn ScenarioForm(
	#[prop(into)] on_submit: Callback<ScenarioInput>,
	#[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let prompt = RwSignal::new(String::new());

	let submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let input = ScenarioInput {
			name: name.get_untracked(),
			prompt: prompt.get_untracked(),
		};
		if input.is_complete() && !disabled.get_untracked() {
			on_submit.run(input);
		}
	};

	view! {
		<form class="scenario-form" on:submit=submit>
			<div class="scenario-form__field">
				<label for="name">"Scenario Name"</label>
				<input
					type="text"
					name="name"
					id="name"
					required
					placeholder="Enter a name for your scenario (e.g., patrol_mission)"
					prop:value=move || name.get()
					on:input=move |ev| name.set(event_target_value(&ev))
					disabled=move || disabled.get()
				/>
			</div>
			<div class="scenario-form__field">
				<label for="prompt">"Scenario Prompt"</label>
				<textarea
					name="prompt"
					id="prompt"
					rows="6"
					required
					placeholder="Describe the military scenario for the behavior tree (e.g., Create a behavior tree for an infantry patrol unit...)"
					prop:value=move || prompt.get()
					on:input=move |ev| prompt.set(event_target_value(&ev))
					disabled=move || disabled.get()
				></textarea>
			</div>
			<button
				type="submit"
				class=move || submit_class(disabled.get())
				disabled=move || disabled.get()
			>
				{move || submit_label(disabled.get())}
			</button>
		</form>
	}
}

#[cfg(test)]
#[path = "scenario_form_test.rs"]
mod scenario_form_test;
