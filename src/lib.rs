//! # Gazette
//!
//! A reader core for a headless-CMS blog: fetches post documents from a
//! content repository's REST API and assembles display-ready view models
//! for a paginated listing and individual post pages.
//!
//! ## Architecture
//!
//! ```text
//! ContentApi → Assemblers → (date, duration, richtext) → view models
//! ```
//!
//! - [`client`]: HTTP client for the repository's search API
//! - [`assembler`]: turns raw documents into listing and post views
//! - [`format`]: date display and reading-time estimation
//! - [`richtext`]: structured rich text to HTML / plain text
//!
//! ## Quick Start
//!
//! ```bash
//! # First listing page
//! gazette list
//!
//! # Everything, slugs only
//! gazette slugs
//!
//! # A single post with navigation links
//! gazette show my-first-post
//! ```
//!
//! View models are plain values built per request; nothing is cached or
//! mutated after assembly, and dropping an in-flight load discards its
//! result without a partial update.

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the loaded configuration to a
/// content client; [`GazetteError`](app::GazetteError) is the crate-wide
/// error type.
pub mod app;

/// View-model assembly.
///
/// - [`assembler::listing`]: paginated summary listing with "load more"
/// - [`assembler::post`]: single post plus previous/next navigation
pub mod assembler;

/// Command-line interface using clap.
pub mod cli;

/// Content repository client.
///
/// - [`ContentApi`](client::ContentApi): async trait over the search API
/// - [`HttpContentApi`](client::HttpContentApi): reqwest-based implementation
/// - [`Query`](client::Query): predicate/ordering/page parameter builder
pub mod client;

/// Comment widget embedding with an idempotent mount.
pub mod comments;

/// Configuration management.
///
/// Loads from `~/.config/gazette/config.toml`: API endpoint and document
/// type, listing page size, comment widget attributes.
pub mod config;

/// Core domain models.
///
/// - [`RawDocument`](domain::RawDocument): API-shaped post document
/// - [`PostSummary`](domain::PostSummary) / [`PostView`](domain::PostView):
///   display-ready view models
/// - [`PostState`](domain::PostState): loading / ready / not-found
pub mod domain;

/// Pure display transforms: [`format_date`](format::format_date) and
/// [`estimate_duration`](format::estimate_duration).
pub mod format;

/// Structured rich text and its HTML / plain-text rendering.
pub mod richtext;
