//! Transcript line model
//!
//! A terminal session is rendered from an append-only sequence of [`Line`]s.
//! Each line carries a semantic role and a list of content nodes (plain text
//! or hyperlinks), so the same transcript can be rendered by any presentation
//! layer without re-parsing markup.

/// Semantic role of a transcript line, used by the renderer to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The session banner shown at startup (and restored by `clear`)
    Banner,
    /// Echo of a submitted prompt + input, verbatim
    PromptEcho,
    /// Output of a recognized command
    Response,
    /// Not-found message for an unrecognized command
    Error,
}

/// One content node of a line: a text segment or a labeled hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Link { label: String, url: String },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Node::Link {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// One unit of transcript content.
///
/// Equality is structural, so a line re-used across a session (the banner on
/// `clear`) compares equal to the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    nodes: Vec<Node>,
}

impl Line {
    pub fn new(kind: LineKind, nodes: Vec<Node>) -> Self {
        Self { kind, nodes }
    }

    pub fn banner(nodes: Vec<Node>) -> Self {
        Self::new(LineKind::Banner, nodes)
    }

    pub fn prompt_echo(text: impl Into<String>) -> Self {
        Self::new(LineKind::PromptEcho, vec![Node::text(text)])
    }

    pub fn response(nodes: Vec<Node>) -> Self {
        Self::new(LineKind::Response, nodes)
    }

    pub fn response_text(text: impl Into<String>) -> Self {
        Self::new(LineKind::Response, vec![Node::text(text)])
    }

    pub fn error_text(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, vec![Node::text(text)])
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Flatten the line to plain text (link labels included, URLs dropped).
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Link { label, .. } => out.push_str(label),
            }
        }
        out
    }

    /// Iterate the (label, url) pairs embedded in this line, in order.
    pub fn links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Link { label, url } => Some((label.as_str(), url.as_str())),
            Node::Text(_) => None,
        })
    }
}
