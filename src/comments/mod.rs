//! Third-party comment widget embedding.
//!
//! The widget is a single script tag with fixed, configured attributes;
//! the host page provides an empty container and the script populates it
//! after load. The only state to manage is whether a container has been
//! populated yet.

use html_escape::encode_double_quoted_attribute;

use crate::config::CommentsConfig;

/// The script element injected into the host container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptNode {
    pub src: String,
    pub attributes: Vec<(String, String)>,
}

impl ScriptNode {
    fn from_config(config: &CommentsConfig) -> Self {
        Self {
            src: config.script_src.clone(),
            attributes: vec![
                ("repo".into(), config.repo.clone()),
                ("issue-term".into(), config.issue_term.clone()),
                ("label".into(), config.label.clone()),
                ("theme".into(), config.theme.clone()),
            ],
        }
    }

    pub fn to_html(&self) -> String {
        let mut tag = format!(
            "<script src=\"{}\" async crossorigin=\"anonymous\"",
            encode_double_quoted_attribute(&self.src)
        );
        for (name, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(name);
            tag.push_str("=\"");
            tag.push_str(&encode_double_quoted_attribute(value));
            tag.push('"');
        }
        tag.push_str("></script>");
        tag
    }
}

/// Host container for the widget on one post page.
///
/// Two states: empty and mounted. Mounting is idempotent, so a re-render
/// of the same page cannot inject a second widget. Navigation to another
/// post gets a fresh container from the host; there is no
/// cross-navigation memory here.
#[derive(Debug, Default)]
pub struct MountPoint {
    children: Vec<ScriptNode>,
}

impl MountPoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the widget script. Returns false without touching the
    /// container when it already holds a mounted child.
    pub fn mount(&mut self, config: &CommentsConfig) -> bool {
        if !self.children.is_empty() {
            return false;
        }
        self.children.push(ScriptNode::from_config(config));
        true
    }

    pub fn is_mounted(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn script_count(&self) -> usize {
        self.children.len()
    }
}

/// The embed markup for a page, as the host layer writes it out.
pub fn embed_html(config: &CommentsConfig) -> String {
    ScriptNode::from_config(config).to_html()
}
