pub mod document;
pub mod view;

pub use document::{Banner, ContentBlock, DocumentData, RawDocument};
pub use view::{Adjacency, AdjacentLink, PostPage, PostState, PostSummary, PostView, RenderedBlock};
