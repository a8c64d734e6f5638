use serde::Serialize;

use crate::app::{GazetteError, Result};
use crate::domain::document::Banner;

/// A listing entry, built once per document at fetch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub published_display: String,
}

/// A content block with its body already rendered to HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBlock {
    pub heading: String,
    pub body_html: String,
}

/// The display-ready model for a single post.
///
/// `updated_display` is only present when the document was republished
/// after its first publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub banner: Option<Banner>,
    pub created_display: String,
    pub updated_display: Option<String>,
    pub duration_minutes: u32,
    pub blocks: Vec<RenderedBlock>,
}

/// Navigation target for the previous/next links on a post page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacentLink {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Adjacency {
    /// Next-older post in publication order, absent on the oldest post.
    pub prev: Option<AdjacentLink>,
    /// Next-newer post in publication order, absent on the newest post.
    pub next: Option<AdjacentLink>,
}

/// Everything a post route renders: the post plus its navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPage {
    pub post: PostView,
    pub adjacency: Adjacency,
}

/// Resolution state of a post route, for the presentation layer.
///
/// A missing document is its own state rather than an error so the host
/// can render it distinctly from both the fallback spinner and a failed
/// fetch.
#[derive(Debug, Clone, Serialize)]
pub enum PostState {
    Loading,
    Ready(Box<PostPage>),
    NotFound,
}

impl PostState {
    /// Fold a load result into a renderable state. Transient failures
    /// stay errors; only a definitive "no such document" becomes
    /// [`PostState::NotFound`].
    pub fn from_result(result: Result<PostPage>) -> Result<Self> {
        match result {
            Ok(page) => Ok(Self::Ready(Box::new(page))),
            Err(GazetteError::PostNotFound(_)) => Ok(Self::NotFound),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> PostPage {
        PostPage {
            post: PostView {
                slug: "my-first-post".into(),
                title: "My First Post".into(),
                author: "Jo Writer".into(),
                banner: None,
                created_display: "05 Jan 2021".into(),
                updated_display: None,
                duration_minutes: 1,
                blocks: Vec::new(),
            },
            adjacency: Adjacency::default(),
        }
    }

    #[test]
    fn test_post_state_ready() {
        let state = PostState::from_result(Ok(sample_page())).unwrap();
        assert!(matches!(state, PostState::Ready(_)));
    }

    #[test]
    fn test_post_state_not_found() {
        let result = Err(GazetteError::PostNotFound("missing".into()));
        let state = PostState::from_result(result).unwrap();
        assert!(matches!(state, PostState::NotFound));
    }

    #[test]
    fn test_post_state_propagates_transient_errors() {
        let result: Result<PostPage> = Err(GazetteError::Api("boom".into()));
        assert!(PostState::from_result(result).is_err());
    }
}
