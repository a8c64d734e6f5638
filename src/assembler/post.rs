//! Builds the single-post view: formatted dates, reading time, rendered
//! content and previous/next navigation.

use crate::app::Result;
use crate::client::{ContentApi, Direction, Query, SearchPage};
use crate::domain::{Adjacency, AdjacentLink, PostPage, PostView, RawDocument, RenderedBlock};
use crate::format::{estimate_duration, format_date};
use crate::richtext;

/// Fetch a post by slug and assemble its view model. A preview ref pins
/// the fetch to an unpublished revision.
pub async fn load_post(
    api: &(dyn ContentApi + Send + Sync),
    doc_type: &str,
    slug: &str,
    preview_ref: Option<&str>,
) -> Result<PostView> {
    let document = api.get_by_uid(doc_type, slug, preview_ref).await?;
    Ok(assemble_view(document))
}

/// Resolve the posts published immediately before and after the given
/// document. The two lookups are independent and run concurrently; the
/// pair is only assembled once both settle.
pub async fn load_adjacent(
    api: &(dyn ContentApi + Send + Sync),
    doc_type: &str,
    document_id: &str,
) -> Result<Adjacency> {
    let older = adjacent_query(doc_type, document_id, Direction::Desc);
    let newer = adjacent_query(doc_type, document_id, Direction::Asc);

    let (older_page, newer_page) = tokio::join!(api.query(&older), api.query(&newer));

    Ok(Adjacency {
        prev: first_link(older_page?),
        next: first_link(newer_page?),
    })
}

/// Everything the post route renders: the assembled post plus its
/// navigation links.
pub async fn load_page(
    api: &(dyn ContentApi + Send + Sync),
    doc_type: &str,
    slug: &str,
    preview_ref: Option<&str>,
) -> Result<PostPage> {
    let document = api.get_by_uid(doc_type, slug, preview_ref).await?;
    let adjacency = load_adjacent(api, doc_type, &document.id).await?;

    Ok(PostPage {
        post: assemble_view(document),
        adjacency,
    })
}

fn assemble_view(document: RawDocument) -> PostView {
    let created_display = document
        .first_publication_date
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    // Only a republished document gets an edited marker; the raw
    // timestamps are compared, not their display forms.
    let updated_display = match (&document.first_publication_date, &document.last_publication_date)
    {
        (first, Some(last)) if first.as_deref() != Some(last.as_str()) => Some(format_date(last)),
        _ => None,
    };

    let duration_minutes = estimate_duration(&document.data.content);
    let blocks = document
        .data
        .content
        .iter()
        .map(|block| RenderedBlock {
            heading: block.heading.clone(),
            body_html: richtext::as_html(&block.body),
        })
        .collect();

    PostView {
        slug: document.uid.unwrap_or_default(),
        title: document.data.title,
        author: document.data.author,
        banner: document.data.banner,
        created_display,
        updated_display,
        duration_minutes,
        blocks,
    }
}

fn adjacent_query(doc_type: &str, document_id: &str, direction: Direction) -> Query {
    Query::new()
        .at("document.type", doc_type)
        .fetch(&["post.title"])
        .order_by("document.first_publication_date", direction)
        .page_size(1)
        .after(document_id)
}

fn first_link(page: SearchPage) -> Option<AdjacentLink> {
    page.results.into_iter().next().and_then(|document| {
        let slug = document.uid?;
        Some(AdjacentLink {
            slug,
            title: document.data.title,
        })
    })
}
