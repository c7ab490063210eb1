use super::*;

const EXAMPLE: &str = r#"<root><BehaviorTree><Sequence name="Root"><Action ID="A1"/><Condition ID="C1"/></Sequence></BehaviorTree></root>"#;

fn positions(graph: &TreeGraph) -> Vec<(f64, f64)> {
	graph.nodes.iter().map(|n| (n.x, n.y)).collect()
}

// =============================================================
// Layout
// =============================================================

#[test]
fn example_tree_layout() {
	let graph = TreeGraph::from_xml(EXAMPLE).unwrap();

	let labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
	assert_eq!(labels, ["Root", "A1", "C1"]);
	let categories: Vec<NodeCategory> = graph.nodes.iter().map(|n| n.category).collect();
	assert_eq!(
		categories,
		[NodeCategory::Sequence, NodeCategory::Action, NodeCategory::Condition]
	);
	assert_eq!(positions(&graph), [(350.0, 50.0), (225.0, 170.0), (475.0, 170.0)]);

	assert_eq!(graph.edges.len(), 2);
	assert_eq!(graph.edges[0].source, "node_0");
	assert_eq!(graph.edges[0].target, "node_1");
	assert_eq!(graph.edges[1].source, "node_0");
	assert_eq!(graph.edges[1].target, "node_2");
	assert_eq!(graph.edges[0].id, "edge_node_0_node_1");
}

#[test]
fn ids_follow_preorder() {
	let xml = r#"<root><BehaviorTree><Sequence><Fallback><A/><B/></Fallback><C/></Sequence></BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();

	let order: Vec<(&str, &str)> = graph
		.nodes
		.iter()
		.map(|n| (n.id.as_str(), n.kind.as_str()))
		.collect();
	assert_eq!(
		order,
		[
			("node_0", "Sequence"),
			("node_1", "Fallback"),
			("node_2", "A"),
			("node_3", "B"),
			("node_4", "C"),
		]
	);
}

#[test]
fn three_children_are_centered() {
	let xml = r#"<root><BehaviorTree><Sequence><A/><B/><C/></Sequence></BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	let xs: Vec<f64> = graph.nodes[1..].iter().map(|n| n.x).collect();
	assert_eq!(xs, [100.0, 350.0, 600.0]);
	assert!(graph.nodes[1..].iter().all(|n| n.y == 170.0));
}

#[test]
fn single_child_sits_under_parent() {
	let xml = r#"<BehaviorTree><Inverter><Wait/></Inverter></BehaviorTree>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	assert_eq!(positions(&graph), [(350.0, 50.0), (350.0, 170.0)]);
}

#[test]
fn grandchildren_center_on_their_own_parent() {
	let xml = r#"<root><BehaviorTree><Sequence><Fallback><A/><B/></Fallback><C/></Sequence></BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	// Fallback at 225, its children one row down at 225 -/+ 125.
	assert_eq!(positions(&graph)[1], (225.0, 170.0));
	assert_eq!(positions(&graph)[2], (100.0, 290.0));
	assert_eq!(positions(&graph)[3], (350.0, 290.0));
	assert_eq!(positions(&graph)[4], (475.0, 170.0));
}

#[test]
fn node_and_edge_counts_match_subtree() {
	let xml = r#"<root><BehaviorTree ID="Main">
		<Sequence>
			<Condition ID="IsEnemyVisible"/>
			<Fallback>
				<Action ID="Engage"/>
				<Sequence><Action ID="Move"/><Action ID="TakeCover"/></Sequence>
			</Fallback>
			<Wait/>
		</Sequence>
	</BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	assert_eq!(graph.nodes.len(), 8);
	assert_eq!(graph.edges.len(), 7);
}

#[test]
fn edges_link_parent_and_child() {
	let xml = r#"<root><BehaviorTree><Sequence name="S"><Fallback name="F"><Action name="X"/></Fallback><Action name="Y"/></Sequence></BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	let pairs: Vec<(&str, &str)> = graph
		.edges
		.iter()
		.map(|e| {
			(
				graph.node(&e.source).unwrap().label.as_str(),
				graph.node(&e.target).unwrap().label.as_str(),
			)
		})
		.collect();
	assert_eq!(pairs, [("S", "F"), ("F", "X"), ("S", "Y")]);
}

#[test]
fn text_and_comments_are_not_nodes() {
	let xml = "<root><BehaviorTree>\n  <!-- main -->\n  <Sequence>text<Action/></Sequence>\n</BehaviorTree></root>";
	let graph = TreeGraph::from_xml(xml).unwrap();
	assert_eq!(graph.nodes.len(), 2);
	assert_eq!(graph.nodes[0].kind, "Sequence");
}

#[test]
fn only_first_top_level_child_is_laid_out() {
	let xml = r#"<root><BehaviorTree><Sequence/><Fallback/></BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	assert_eq!(graph.nodes.len(), 1);
	assert_eq!(graph.nodes[0].kind, "Sequence");
}

#[test]
fn first_behavior_tree_wins() {
	let xml = r#"<root><BehaviorTree ID="Main"><Sequence/></BehaviorTree><BehaviorTree ID="Sub"><Fallback/></BehaviorTree></root>"#;
	let graph = TreeGraph::from_xml(xml).unwrap();
	assert_eq!(graph.nodes[0].kind, "Sequence");
}

#[test]
fn behavior_tree_may_be_document_element() {
	let graph = TreeGraph::from_xml("<BehaviorTree><Action ID=\"Go\"/></BehaviorTree>").unwrap();
	assert_eq!(graph.nodes[0].label, "Go");
}

// =============================================================
// Labels
// =============================================================

#[test]
fn label_prefers_name_over_id() {
	let graph = TreeGraph::from_xml(r#"<BehaviorTree><Action name="A" ID="B"/></BehaviorTree>"#).unwrap();
	assert_eq!(graph.nodes[0].label, "A");
}

#[test]
fn label_falls_back_to_id() {
	let graph = TreeGraph::from_xml(r#"<BehaviorTree><Action ID="B"/></BehaviorTree>"#).unwrap();
	assert_eq!(graph.nodes[0].label, "B");
}

#[test]
fn label_falls_back_to_tag() {
	let graph = TreeGraph::from_xml(r#"<BehaviorTree><Action/></BehaviorTree>"#).unwrap();
	assert_eq!(graph.nodes[0].label, "Action");
}

#[test]
fn empty_name_is_skipped() {
	let graph = TreeGraph::from_xml(r#"<BehaviorTree><Action name="" ID="B"/></BehaviorTree>"#).unwrap();
	assert_eq!(graph.nodes[0].label, "B");
}

// =============================================================
// Failures
// =============================================================

#[test]
fn blank_input_is_empty_graph() {
	assert!(TreeGraph::from_xml("").unwrap().is_empty());
	assert!(TreeGraph::from_xml("  \n ").unwrap().is_empty());
}

#[test]
fn malformed_xml_is_an_error() {
	let err = TreeGraph::from_xml("<root><BehaviorTree><Sequence></root>").unwrap_err();
	assert!(matches!(err, LayoutError::Xml(_)));
}

#[test]
fn missing_behavior_tree_is_an_error() {
	let err = TreeGraph::from_xml("<root><Sequence/></root>").unwrap_err();
	assert!(matches!(err, LayoutError::MissingBehaviorTree));
}

#[test]
fn tag_match_is_case_sensitive() {
	let err = TreeGraph::from_xml("<root><behaviortree><Sequence/></behaviortree></root>").unwrap_err();
	assert!(matches!(err, LayoutError::MissingBehaviorTree));
}

#[test]
fn childless_behavior_tree_is_an_error() {
	let err = TreeGraph::from_xml("<root><BehaviorTree>only text</BehaviorTree></root>").unwrap_err();
	assert!(matches!(err, LayoutError::EmptyBehaviorTree));
}

#[test]
fn layout_xml_degrades_to_empty() {
	assert!(layout_xml(None).is_empty());
	assert!(layout_xml(Some("")).is_empty());
	assert!(layout_xml(Some("not xml at all <")).is_empty());
	assert!(layout_xml(Some("<root/>")).is_empty());
	assert!(layout_xml(Some("<root><BehaviorTree/></root>")).is_empty());
}

#[test]
fn layout_xml_passes_through_success() {
	let graph = layout_xml(Some(EXAMPLE));
	assert_eq!(graph, TreeGraph::from_xml(EXAMPLE).unwrap());
}

#[test]
fn rebuilding_restarts_ids() {
	let first = layout_xml(Some(EXAMPLE));
	let second = layout_xml(Some(EXAMPLE));
	assert_eq!(first.nodes[0].id, "node_0");
	assert_eq!(second.nodes[0].id, "node_0");
}

fn sequence_chain(depth: usize) -> String {
	format!(
		"<root><BehaviorTree>{}<Action/>{}</BehaviorTree></root>",
		"<Sequence>".repeat(depth),
		"</Sequence>".repeat(depth)
	)
}

#[test]
fn deep_nesting_is_an_error_before_parsing() {
	let err = TreeGraph::from_xml(&sequence_chain(100_000)).unwrap_err();
	assert!(matches!(err, LayoutError::TooDeep { limit: MAX_DEPTH }));
	assert!(layout_xml(Some(&sequence_chain(100_000))).is_empty());
}

#[test]
fn nesting_up_to_the_limit_lays_out() {
	// `root` and `BehaviorTree` take two levels.
	let graph = TreeGraph::from_xml(&sequence_chain(MAX_DEPTH - 2)).unwrap();
	assert_eq!(graph.nodes.len(), MAX_DEPTH - 1);
	assert_eq!(graph.nodes.last().unwrap().y, ROOT_Y + (MAX_DEPTH - 2) as f64 * V_SPACING);
	assert!(TreeGraph::from_xml(&sequence_chain(MAX_DEPTH - 1)).is_err());
}

#[test]
fn depth_scan_ignores_markup_that_is_not_an_element() {
	assert_eq!(nesting_depth("<a><b/><c></c></a>"), 2);
	assert_eq!(nesting_depth(r#"<a name="x/>"><b/></a>"#), 2);
	assert_eq!(nesting_depth("<?xml version=\"1.0\"?><!-- <x><y> --><a><![CDATA[<z>]]></a>"), 1);
	assert_eq!(nesting_depth("<!DOCTYPE a><a>text</a>"), 1);
}
