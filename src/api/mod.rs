//! Client for the behavior tree generation backend.
//!
//! The backend takes a batch of scenarios and answers with the generated
//! XML plus a free-form metadata document. Only the first scenario is ever
//! sent from the UI.

mod client;
mod types;

pub use client::generate_behavior_tree;
pub use types::{GenerateRequest, Generation, Metadata, Scenario};
