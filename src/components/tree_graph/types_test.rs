use super::*;

#[test]
fn classify_is_case_insensitive_substring() {
	assert_eq!(NodeCategory::classify("SequenceNode"), NodeCategory::Sequence);
	assert_eq!(NodeCategory::classify("ReactiveSEQUENCE"), NodeCategory::Sequence);
	assert_eq!(NodeCategory::classify("fallback"), NodeCategory::Selector);
	assert_eq!(NodeCategory::classify("PrioritySelector"), NodeCategory::Selector);
	assert_eq!(NodeCategory::classify("CheckUnitPlatformCondition"), NodeCategory::Condition);
	assert_eq!(NodeCategory::classify("Action"), NodeCategory::Action);
	assert_eq!(NodeCategory::classify("Wait"), NodeCategory::Default);
}

#[test]
fn classify_precedence() {
	assert_eq!(NodeCategory::classify("SequenceAction"), NodeCategory::Sequence);
	assert_eq!(NodeCategory::classify("FallbackCondition"), NodeCategory::Selector);
	assert_eq!(NodeCategory::classify("ConditionAction"), NodeCategory::Condition);
}

#[test]
fn legend_omits_default() {
	assert!(!NodeCategory::LEGEND.contains(&NodeCategory::Default));
	assert_eq!(NodeCategory::LEGEND.len(), 4);
}

#[test]
fn categories_have_distinct_colors() {
	let mut colors: Vec<&str> = NodeCategory::LEGEND.iter().map(|c| c.color()).collect();
	colors.push(NodeCategory::Default.color());
	colors.sort_unstable();
	colors.dedup();
	assert_eq!(colors.len(), 5);
}

#[test]
fn empty_graph_lookup() {
	let graph = TreeGraph::default();
	assert!(graph.is_empty());
	assert!(graph.node("node_0").is_none());
}
