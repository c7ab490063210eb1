pub mod loading;
pub mod metadata;
pub mod scenario_form;
pub mod tabs;
pub mod tree_graph;
pub mod tree_viewer;

/// `base`, plus its `--active` modifier when `on`.
pub(crate) fn toggle_class(base: &str, on: bool) -> String {
	if on {
		format!("{base} {base}--active")
	} else {
		base.to_owned()
	}
}
