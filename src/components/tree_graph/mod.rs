mod callbacks;
mod component;
pub mod layout;
mod render;
pub mod state;
mod types;

pub use component::TreeGraphCanvas;
pub use layout::layout_xml;
pub use types::{NodeCategory, TreeGraph, VisualEdge, VisualNode};
