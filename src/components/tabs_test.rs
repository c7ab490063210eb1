use super::*;

#[test]
fn behavior_tree_tab_is_first_and_default() {
	assert_eq!(Tab::ALL[0], Tab::default());
	assert_eq!(Tab::default().title(), "Behavior Tree");
}

#[test]
fn tab_titles() {
	let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
	assert_eq!(titles, ["Behavior Tree", "Metadata"]);
}

#[test]
fn active_class_adds_modifier() {
	assert_eq!(toggle_class("tabs__tab", true), "tabs__tab tabs__tab--active");
	assert_eq!(toggle_class("toggle", false), "toggle");
}
