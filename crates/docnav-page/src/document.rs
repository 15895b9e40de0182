//! The document being rendered, as delivered by the content index.

use serde::Deserialize;

/// Frontmatter fields that feed meta tags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frontmatter {
    /// Title for `<title>` and the title meta tags.
    pub meta_title: Option<String>,
    /// Text for the description meta tags.
    pub meta_description: Option<String>,
}

impl Frontmatter {
    /// Meta title, treating an empty string as absent.
    #[must_use]
    pub fn meta_title(&self) -> Option<&str> {
        non_empty(self.meta_title.as_deref())
    }

    /// Meta description, treating an empty string as absent.
    #[must_use]
    pub fn meta_description(&self) -> Option<&str> {
        non_empty(self.meta_description.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Full record of the document being rendered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusedDocument {
    /// Document slug, e.g. `/guides/setup`.
    pub slug: String,
    /// Document title shown as the page heading.
    pub title: String,
    /// Rendered body, passed through to the renderer untouched.
    pub body: String,
    /// Table of contents artifact from the content index.
    pub table_of_contents: serde_json::Value,
    /// Frontmatter metadata.
    pub frontmatter: Frontmatter,
    /// Source file path relative to the docs root, for edit links.
    pub relative_path: String,
}
