//! Configuration for gazette.
//!
//! Read from `~/.config/gazette/config.toml` at startup. If the file
//! doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub comments: CommentsConfig,
}

/// Where and how to reach the content repository.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the repository's REST API.
    pub endpoint: String,

    /// Document type that holds blog posts.
    pub document_type: String,

    /// Summaries fetched per listing page.
    pub page_size: u32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://gazette-blog.cdn.example.com/api/v2".into(),
            document_type: "posts".into(),
            page_size: 20,
            timeout_secs: 10,
        }
    }
}

/// Fixed attributes for the embedded comment widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub script_src: String,

    /// Repository that stores the comment threads.
    pub repo: String,

    /// How widget threads are matched to pages.
    pub issue_term: String,

    /// Label applied to widget-created threads.
    pub label: String,

    pub theme: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            script_src: "https://utteranc.es/client.js".into(),
            repo: "example/blog-comments".into(),
            issue_term: "pathname".into(),
            label: "comments".into(),
            theme: "github-dark".into(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with
    /// comments. Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_config_path()?)
    }

    /// Load configuration from an explicit path, creating a commented
    /// default file there if none exists.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/gazette/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("gazette").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Gazette configuration
#
# [api] points at the blog's content repository; [comments] configures
# the third-party comment widget embedded on post pages.

[api]
# Base URL of the content repository's REST API
endpoint = "https://gazette-blog.cdn.example.com/api/v2"

# Document type that holds blog posts
document_type = "posts"

# Number of summaries fetched per listing page
page_size = 20

# Request timeout in seconds
timeout_secs = 10

[comments]
# Comment widget script
script_src = "https://utteranc.es/client.js"

# Repository that stores the comment threads
repo = "example/blog-comments"

# How widget threads are matched to pages
issue_term = "pathname"

# Label applied to widget-created threads
label = "comments"

# Widget color theme
theme = "github-dark"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
