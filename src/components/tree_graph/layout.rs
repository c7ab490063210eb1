//! Grid layout of behavior tree XML.
//!
//! The walk is pre-order: each element gets a node before its children, ids
//! come from a counter owned by [`LayoutBuilder`], and children are centered
//! horizontally one row below their parent.

use log::{debug, warn};
use roxmltree::{Document, Node};

use super::types::{NodeCategory, TreeGraph, VisualEdge, VisualNode};
use crate::error::LayoutError;

/// Position of the tree root.
pub const ROOT_X: f64 = 350.0;
pub const ROOT_Y: f64 = 50.0;
/// Distance between neighboring siblings.
pub const H_SPACING: f64 = 250.0;
/// Distance between a parent and its children.
pub const V_SPACING: f64 = 120.0;
/// Deepest element nesting accepted before parsing.
pub const MAX_DEPTH: usize = 128;

const TREE_TAG: &str = "BehaviorTree";

impl TreeGraph {
	/// Lay out the tree under the first `BehaviorTree` element of `xml`.
	///
	/// Blank input is an empty graph, not an error.
	pub fn from_xml(xml: &str) -> Result<Self, LayoutError> {
		if xml.trim().is_empty() {
			return Ok(Self::default());
		}
		if nesting_depth(xml) > MAX_DEPTH {
			return Err(LayoutError::TooDeep { limit: MAX_DEPTH });
		}
		let doc = Document::parse(xml)?;
		let tree = doc
			.descendants()
			.find(|n| n.is_element() && n.tag_name().name() == TREE_TAG)
			.ok_or(LayoutError::MissingBehaviorTree)?;
		let root = tree
			.children()
			.find(Node::is_element)
			.ok_or(LayoutError::EmptyBehaviorTree)?;

		let mut builder = LayoutBuilder::default();
		builder.visit(root, None, ROOT_X, ROOT_Y);
		Ok(builder.finish())
	}
}

/// Lay out `xml` for display, degrading every failure to an empty graph.
pub fn layout_xml(xml: Option<&str>) -> TreeGraph {
	let Some(xml) = xml else {
		return TreeGraph::default();
	};
	match TreeGraph::from_xml(xml) {
		Ok(graph) => {
			debug!(
				"laid out behavior tree: {} nodes, {} edges",
				graph.nodes.len(),
				graph.edges.len()
			);
			graph
		}
		Err(err) => {
			warn!("Error processing XML: {err}");
			TreeGraph::default()
		}
	}
}

#[derive(Default)]
struct LayoutBuilder {
	next_id: usize,
	graph: TreeGraph,
}

impl LayoutBuilder {
	fn visit(&mut self, element: Node<'_, '_>, parent: Option<&str>, x: f64, y: f64) {
		let id = format!("node_{}", self.next_id);
		self.next_id += 1;

		let kind = element.tag_name().name();
		self.graph.nodes.push(VisualNode {
			id: id.clone(),
			label: label_for(element),
			kind: kind.to_owned(),
			category: NodeCategory::classify(kind),
			x,
			y,
		});

		if let Some(parent) = parent {
			self.graph.edges.push(VisualEdge {
				id: format!("edge_{parent}_{id}"),
				source: parent.to_owned(),
				target: id.clone(),
			});
		}

		let children: Vec<Node<'_, '_>> = element.children().filter(Node::is_element).collect();
		let start_x = x - children.len().saturating_sub(1) as f64 * H_SPACING / 2.0;
		for (i, child) in children.into_iter().enumerate() {
			self.visit(child, Some(&id), start_x + i as f64 * H_SPACING, y + V_SPACING);
		}
	}

	fn finish(self) -> TreeGraph {
		self.graph
	}
}

/// `name`, then `ID`, then the tag name. Empty attributes are skipped.
fn label_for(element: Node<'_, '_>) -> String {
	["name", "ID"]
		.iter()
		.find_map(|attr| element.attribute(*attr).filter(|v| !v.is_empty()))
		.unwrap_or_else(|| element.tag_name().name())
		.to_owned()
}

/// Deepest element nesting in `xml`, counted from the raw markup.
///
/// Comments, CDATA, processing instructions and declarations are skipped, and
/// `>` inside quoted attribute values does not end a tag.
fn nesting_depth(xml: &str) -> usize {
	let (mut depth, mut deepest) = (0usize, 0usize);
	let mut rest = xml;
	while let Some(start) = rest.find('<') {
		rest = &rest[start..];
		let skip_to = [("<!--", "-->"), ("<![CDATA[", "]]>"), ("<?", "?>"), ("<!", ">")]
			.into_iter()
			.find_map(|(open, close)| rest.starts_with(open).then_some(close));
		if let Some(close) = skip_to {
			let Some(end) = rest.find(close) else {
				break;
			};
			rest = &rest[end + close.len()..];
			continue;
		}
		let Some(end) = tag_end(rest) else {
			break;
		};
		let tag = &rest[..=end];
		if tag.starts_with("</") {
			depth = depth.saturating_sub(1);
		} else if !tag.ends_with("/>") {
			depth += 1;
			deepest = deepest.max(depth);
		}
		rest = &rest[end + 1..];
	}
	deepest
}

/// Byte index of the `>` closing the tag at the start of `tag`.
fn tag_end(tag: &str) -> Option<usize> {
	let mut quote = None;
	for (i, c) in tag.char_indices() {
		match (quote, c) {
			(None, '"' | '\'') => quote = Some(c),
			(Some(q), _) if q == c => quote = None,
			(None, '>') => return Some(i),
			_ => {}
		}
	}
	None
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
