use crate::app::{AppContext, Result};
use crate::assembler::{listing, post};
use crate::comments;
use crate::domain::{PostPage, PostState};

pub async fn list_posts(
    ctx: &AppContext,
    all: bool,
    page_size: Option<u32>,
    json: bool,
) -> Result<()> {
    let page_size = page_size.unwrap_or(ctx.config.api.page_size);
    let mut listing =
        listing::load_first_page(ctx.api.as_ref(), &ctx.config.api.document_type, page_size)
            .await?;

    if all {
        while listing.has_more() {
            listing = listing.load_more(ctx.api.as_ref()).await?;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&listing.summaries)?);
        return Ok(());
    }

    if listing.summaries.is_empty() {
        println!("No posts");
        return Ok(());
    }

    for summary in &listing.summaries {
        println!("{} (/post/{})", summary.title, summary.slug);
        if !summary.subtitle.is_empty() {
            println!("  {}", summary.subtitle);
        }
        println!("  {} · {}", summary.published_display, summary.author);
    }

    if listing.has_more() {
        println!("\nMore posts available; pass --all to fetch every page");
    }

    Ok(())
}

pub async fn show_post(
    ctx: &AppContext,
    slug: &str,
    preview_ref: Option<&str>,
    json: bool,
) -> Result<()> {
    let result = post::load_page(
        ctx.api.as_ref(),
        &ctx.config.api.document_type,
        slug,
        preview_ref,
    )
    .await;

    match PostState::from_result(result)? {
        PostState::Ready(page) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_page(&page, ctx);
            }
        }
        PostState::NotFound => println!("No post found for slug: {}", slug),
        // from_result never yields Loading; that state belongs to hosts
        // that render before resolution completes.
        PostState::Loading => {}
    }

    Ok(())
}

pub async fn list_slugs(ctx: &AppContext) -> Result<()> {
    let slugs = listing::load_all_slugs(ctx.api.as_ref(), &ctx.config.api.document_type).await?;

    if slugs.is_empty() {
        println!("No posts");
        return Ok(());
    }

    for slug in slugs {
        println!("{}", slug);
    }

    Ok(())
}

pub fn print_embed(ctx: &AppContext) {
    println!("{}", comments::embed_html(&ctx.config.comments));
}

fn print_page(page: &PostPage, ctx: &AppContext) {
    let post = &page.post;

    println!("{}", post.title);
    println!(
        "{} · {} · {} min read",
        post.created_display, post.author, post.duration_minutes
    );
    if let Some(updated) = &post.updated_display {
        println!("* edited {}", updated);
    }
    if let Some(banner) = &post.banner {
        println!("banner: {} ({})", banner.url, banner.alt);
    }

    for block in &post.blocks {
        println!("\n## {}", block.heading);
        println!("{}", block.body_html);
    }

    println!();
    if let Some(prev) = &page.adjacency.prev {
        println!("previous: {} (/post/{})", prev.title, prev.slug);
    }
    if let Some(next) = &page.adjacency.next {
        println!("next: {} (/post/{})", next.title, next.slug);
    }

    println!("\n{}", comments::embed_html(&ctx.config.comments));
}
