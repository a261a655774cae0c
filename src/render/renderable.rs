use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MIME_TEXT_PLAIN: &str = "text/plain";
pub const MIME_TEXT_HTML: &str = "text/html";
pub const MIME_VEGA_LITE_V5: &str = "application/vnd.vegalite.v5+json";

/// Displayable artifact handed to a host environment: an ordered MIME bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Renderable {
    bundle: IndexMap<String, String>,
}

impl Renderable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text only renderable.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new().with_mime(MIME_TEXT_PLAIN, content)
    }

    #[must_use]
    pub fn with_mime(mut self, mime_type: impl Into<String>, content: impl Into<String>) -> Self {
        self.bundle.insert(mime_type.into(), content.into());
        self
    }

    #[must_use]
    pub fn get(&self, mime_type: &str) -> Option<&str> {
        self.bundle.get(mime_type).map(String::as_str)
    }

    #[must_use]
    pub fn text_plain(&self) -> Option<&str> {
        self.get(MIME_TEXT_PLAIN)
    }

    #[must_use]
    pub fn html(&self) -> Option<&str> {
        self.get(MIME_TEXT_HTML)
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.bundle.keys().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundle.is_empty()
    }

    /// Composes renderables vertically, the way a box layout stacks children.
    ///
    /// Text forms are concatenated in order; a part without HTML contributes
    /// its escaped plain text. Any other MIME type is taken from the first part
    /// that carries it.
    #[must_use]
    pub fn stack<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a Renderable>,
    {
        let mut plain = Vec::new();
        let mut html = String::from("<div class=\"autovega\">");
        let mut stacked = Self::new();

        for part in parts {
            if let Some(text) = part.text_plain() {
                plain.push(text.to_owned());
            }
            let part_html = match (part.html(), part.text_plain()) {
                (Some(markup), _) => markup.to_owned(),
                (None, Some(text)) => format!("<pre>{}</pre>", escape_html(text)),
                (None, None) => String::new(),
            };
            html.push_str("<div>");
            html.push_str(&part_html);
            html.push_str("</div>");

            for (mime_type, content) in &part.bundle {
                if mime_type == MIME_TEXT_PLAIN || mime_type == MIME_TEXT_HTML {
                    continue;
                }
                stacked
                    .bundle
                    .entry(mime_type.clone())
                    .or_insert_with(|| content.clone());
            }
        }
        html.push_str("</div>");

        stacked.bundle.shift_insert(0, MIME_TEXT_PLAIN.to_owned(), plain.join("\n"));
        stacked.bundle.shift_insert(1, MIME_TEXT_HTML.to_owned(), html);
        stacked
    }
}

/// Escapes text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
