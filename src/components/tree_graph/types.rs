/// Visual class of a behavior tree node, derived from its tag name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	/// Tags containing `sequence`.
	Sequence,
	/// Tags containing `fallback` or `selector`.
	Selector,
	/// Tags containing `condition`.
	Condition,
	/// Tags containing `action`.
	Action,
	/// Anything else.
	#[default]
	Default,
}

impl NodeCategory {
	/// Categories shown in the legend, in display order.
	pub const LEGEND: [NodeCategory; 4] = [
		NodeCategory::Sequence,
		NodeCategory::Selector,
		NodeCategory::Condition,
		NodeCategory::Action,
	];

	/// Classify a tag name by case-insensitive substring; first rule wins.
	pub fn classify(tag: &str) -> Self {
		let tag = tag.to_lowercase();
		if tag.contains("sequence") {
			Self::Sequence
		} else if tag.contains("fallback") || tag.contains("selector") {
			Self::Selector
		} else if tag.contains("condition") {
			Self::Condition
		} else if tag.contains("action") {
			Self::Action
		} else {
			Self::Default
		}
	}

	/// Fill color for nodes of this category.
	pub fn color(self) -> &'static str {
		match self {
			Self::Sequence => "#4B5563",
			Self::Selector => "#1D4ED8",
			Self::Condition => "#047857",
			Self::Action => "#B91C1C",
			Self::Default => "#6B7280",
		}
	}

	/// Legend text.
	pub fn label(self) -> &'static str {
		match self {
			Self::Sequence => "Sequence",
			Self::Selector => "Selector",
			Self::Condition => "Condition",
			Self::Action => "Action",
			Self::Default => "Other",
		}
	}
}

/// One element of the tree, placed on the layout grid.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualNode {
	/// `node_N`, numbered in pre-order from zero.
	pub id: String,
	/// `name`, then `ID`, then the tag name.
	pub label: String,
	/// Source tag name.
	pub kind: String,
	/// Color class derived from `kind`.
	pub category: NodeCategory,
	/// Graph-space x of the node.
	pub x: f64,
	/// Graph-space y of the node.
	pub y: f64,
}

/// Parent-to-child link between two [`VisualNode`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualEdge {
	/// `edge_{source}_{target}`.
	pub id: String,
	/// Parent node id.
	pub source: String,
	/// Child node id.
	pub target: String,
}

/// Positioned nodes and parent-to-child edges of one behavior tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeGraph {
	/// Nodes in pre-order.
	pub nodes: Vec<VisualNode>,
	/// Edges in the order their child nodes were visited.
	pub edges: Vec<VisualEdge>,
}

impl TreeGraph {
	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Look a node up by id.
	pub fn node(&self, id: &str) -> Option<&VisualNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
