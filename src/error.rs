//! Error types for tree layout and backend requests.

/// Why an XML document could not be turned into a tree graph.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
	/// The document is not well-formed XML.
	#[error("malformed behavior tree XML: {0}")]
	Xml(#[from] roxmltree::Error),

	/// No `BehaviorTree` element anywhere in the document.
	#[error("no BehaviorTree element found")]
	MissingBehaviorTree,

	/// The `BehaviorTree` element has no element child to use as root.
	#[error("BehaviorTree element has no root node")]
	EmptyBehaviorTree,

	/// Elements nest deeper than the layout will walk.
	#[error("behavior tree XML nests deeper than {limit} elements")]
	TooDeep {
		/// Deepest nesting accepted.
		limit: usize,
	},
}

/// Failure talking to the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
	/// The request never produced a response.
	#[error("{0}")]
	Network(String),

	/// The backend answered with a non-success status.
	#[error("{detail}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Message taken from the error body, or a generic one.
		detail: String,
	},

	/// The response body was not the expected JSON.
	#[error("unexpected response from server: {0}")]
	Decode(String),

	/// The response decoded but lacks the XML or metadata.
	#[error("Failed to generate behavior tree files")]
	IncompleteResponse,
}
