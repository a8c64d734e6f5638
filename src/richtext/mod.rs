//! Structured rich text as delivered by the content API, with conversion
//! to HTML for display and to plain text for word counting.
//!
//! A body is an ordered list of nodes; each node carries its plain text
//! plus inline spans addressed by character offsets into that text.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub spans: Vec<Span>,
}

impl RichTextNode {
    pub fn paragraph(text: &str) -> Self {
        Self {
            kind: NodeKind::Paragraph,
            text: text.into(),
            spans: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Preformatted,
    ListItem,
    OListItem,
    #[serde(other)]
    Unknown,
}

/// Inline markup over `[start, end)` character offsets of the node text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub kind: SpanKind,
    #[serde(default)]
    pub data: Option<SpanData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanKind {
    Strong,
    Em,
    Hyperlink,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpanData {
    #[serde(default)]
    pub url: Option<String>,
}

/// Flatten a body to plain text, dropping all markup. This is what word
/// counting must run on.
pub fn as_text(nodes: &[RichTextNode]) -> String {
    let parts: Vec<&str> = nodes.iter().map(|n| n.text.as_str()).collect();
    parts.join(" ")
}

/// Render a body to HTML markup. Consecutive list items are grouped into
/// a single list element; all text and attribute values are escaped.
pub fn as_html(nodes: &[RichTextNode]) -> String {
    let mut out = String::new();
    let mut index = 0;

    while index < nodes.len() {
        let kind = nodes[index].kind;
        match kind {
            NodeKind::ListItem | NodeKind::OListItem => {
                let list_tag = if kind == NodeKind::ListItem { "ul" } else { "ol" };
                out.push('<');
                out.push_str(list_tag);
                out.push('>');
                while index < nodes.len() && nodes[index].kind == kind {
                    let node = &nodes[index];
                    out.push_str("<li>");
                    out.push_str(&render_spans(&node.text, &node.spans));
                    out.push_str("</li>");
                    index += 1;
                }
                out.push_str("</");
                out.push_str(list_tag);
                out.push('>');
            }
            _ => {
                let node = &nodes[index];
                let tag = block_tag(kind);
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(&render_spans(&node.text, &node.spans));
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                index += 1;
            }
        }
    }

    out
}

fn block_tag(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Heading1 => "h1",
        NodeKind::Heading2 => "h2",
        NodeKind::Heading3 => "h3",
        NodeKind::Heading4 => "h4",
        NodeKind::Heading5 => "h5",
        NodeKind::Heading6 => "h6",
        NodeKind::Preformatted => "pre",
        NodeKind::ListItem | NodeKind::OListItem => "li",
        NodeKind::Paragraph | NodeKind::Unknown => "p",
    }
}

/// Apply inline spans to a node's text. Spans are applied in start order;
/// a span overlapping an earlier one, or with an empty range, contributes
/// its text without markup. Offsets past the end of the text are clamped.
fn render_spans(text: &str, spans: &[Span]) -> String {
    if spans.is_empty() {
        return encode_text(text).into_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut ordered: Vec<&Span> = spans.iter().collect();
    ordered.sort_by_key(|s| (s.start, s.end));

    let mut out = String::new();
    let mut pos = 0;

    for span in ordered {
        let start = span.start.min(chars.len());
        let end = span.end.min(chars.len());
        if start < pos || end <= start {
            continue;
        }

        out.push_str(&encode_chars(&chars[pos..start]));
        let inner = encode_chars(&chars[start..end]);
        match span.kind {
            SpanKind::Strong => {
                out.push_str("<strong>");
                out.push_str(&inner);
                out.push_str("</strong>");
            }
            SpanKind::Em => {
                out.push_str("<em>");
                out.push_str(&inner);
                out.push_str("</em>");
            }
            SpanKind::Hyperlink => {
                let href = span
                    .data
                    .as_ref()
                    .and_then(|d| d.url.as_deref())
                    .unwrap_or("");
                out.push_str("<a href=\"");
                out.push_str(&encode_double_quoted_attribute(href));
                out.push_str("\">");
                out.push_str(&inner);
                out.push_str("</a>");
            }
            SpanKind::Unknown => out.push_str(&inner),
        }
        pos = end;
    }

    out.push_str(&encode_chars(&chars[pos..]));
    out
}

fn encode_chars(chars: &[char]) -> String {
    let text: String = chars.iter().collect();
    encode_text(&text).into_owned()
}
