//! Page view handed to the renderer.

use docnav_config::{Config, SiteConfig};
use docnav_core::{DocumentRecord, ForcedOrder, NavigationEntry, Pagination, order_navigation};
use serde::Serialize;

use crate::document::FocusedDocument;
use crate::meta::{MetaTag, canonical_url, edit_url, meta_tags};

/// Everything the renderer needs for one page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Site title from configuration.
    pub site_title: String,
    /// Page heading.
    pub title: String,
    /// `<title>` override from frontmatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    /// Canonical link target.
    pub canonical_url: String,
    /// Title and description meta tags.
    pub meta_tags: Vec<MetaTag>,
    /// "Edit this page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    /// Rendered body.
    pub body: String,
    /// Table of contents artifact.
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub table_of_contents: serde_json::Value,
    /// Ordered site navigation.
    pub nav: Vec<NavigationEntry>,
    /// Previous/next links for this page.
    pub pagination: Pagination,
}

/// Builds [`PageView`]s for one site configuration.
///
/// Holds the forced navigation order so it is built once per configuration
/// rather than once per page.
pub struct PageViewBuilder<'a> {
    site: &'a SiteConfig,
    forced: ForcedOrder,
}

impl<'a> PageViewBuilder<'a> {
    /// Create a builder from loaded configuration.
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            site: &config.site,
            forced: config.sidebar.forced_order(),
        }
    }

    /// Create a builder from site settings and an explicit forced order.
    #[must_use]
    pub fn with_forced_order(site: &'a SiteConfig, forced: ForcedOrder) -> Self {
        Self { site, forced }
    }

    /// Assemble the view for `document` given every document on the site.
    #[must_use]
    pub fn build(&self, records: &[DocumentRecord], document: FocusedDocument) -> PageView {
        let nav = order_navigation(records, &self.forced);
        let pagination = Pagination::locate(&nav, &document.slug);

        tracing::debug!(
            slug = %document.slug,
            entries = nav.len(),
            has_previous = pagination.previous.is_some(),
            has_next = pagination.next.is_some(),
            "Page view assembled"
        );

        PageView {
            site_title: self.site.title.clone(),
            document_title: document.frontmatter.meta_title().map(str::to_owned),
            canonical_url: canonical_url(self.site, &document.slug),
            meta_tags: meta_tags(&document.frontmatter),
            edit_url: edit_url(self.site, &document.relative_path),
            title: document.title,
            body: document.body,
            table_of_contents: document.table_of_contents,
            nav,
            pagination,
        }
    }
}
