use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gazette::app::AppContext;
use gazette::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.config)?;

    match cli.command {
        Commands::List {
            all,
            page_size,
            json,
        } => {
            commands::list_posts(&ctx, all, page_size, json).await?;
        }
        Commands::Show {
            slug,
            preview_ref,
            json,
        } => {
            commands::show_post(&ctx, &slug, preview_ref.as_deref(), json).await?;
        }
        Commands::Slugs => {
            commands::list_slugs(&ctx).await?;
        }
        Commands::Embed => {
            commands::print_embed(&ctx);
        }
    }

    Ok(())
}
