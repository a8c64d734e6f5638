pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gazette")]
#[command(about = "A reader for headless-CMS blog content", long_about = None)]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List post summaries from the listing page
    List {
        /// Follow pagination until the listing is exhausted
        #[arg(long)]
        all: bool,

        /// Override the configured page size
        #[arg(long)]
        page_size: Option<u32>,

        /// Print the summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single post with its navigation links
    Show {
        /// The post's slug
        slug: String,

        /// Pin the fetch to a preview revision
        #[arg(long)]
        preview_ref: Option<String>,

        /// Print the assembled page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every post slug, newest first
    Slugs,
    /// Print the comment widget embed markup
    Embed,
}
