//! Flat navigation ordering.
//!
//! Orders every document on the site into a single list for sidebar and
//! previous/next presentation. Documents are sorted by slug, then grouped by
//! a configured [`ForcedOrder`]:
//!
//! - A key equal to a slug pins that document.
//! - A `/section` key pins every slug whose first path segment is `section`.
//!
//! Forced groups are emitted in key order, followed by every remaining slug.
//!
//! # Example
//!
//! ```
//! use docnav_core::{DocumentRecord, ForcedOrder, order_navigation};
//!
//! let records = vec![
//!     DocumentRecord::new("/zzz", "Z"),
//!     DocumentRecord::new("/guides/a", "Guide A"),
//!     DocumentRecord::new("/aaa", "A"),
//! ];
//!
//! let nav = order_navigation(&records, &ForcedOrder::new(["/guides"]));
//! assert_eq!(nav[0].url.as_deref(), Some("/guides/a"));
//! assert_eq!(nav[1].url.as_deref(), Some("/aaa"));
//! assert_eq!(nav[2].url.as_deref(), Some("/zzz"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Slug of the site root page. Never part of the navigation.
pub const ROOT_SLUG: &str = "/";

/// Document as seen by the content index.
///
/// Missing fields deserialize as empty strings. Records with an empty slug
/// are ignored by [`order_navigation`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Path-like identifier, e.g. `/guides/setup`.
    #[serde(default)]
    pub slug: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
}

impl DocumentRecord {
    /// Create a record from slug and title.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
        }
    }
}

/// Navigation list entry.
///
/// Both fields are `None` for a placeholder: the slot kept for a forced key
/// that matched no documents. Placeholders serialize as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link target (the document slug).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NavigationEntry {
    /// Entry with neither title nor URL.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Check whether this entry is a placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }
}

/// Priority keys controlling navigation grouping.
///
/// Keys keep the order they were given in. A repeated key keeps its first
/// position so that no slug is emitted twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForcedOrder {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
}

impl ForcedOrder {
    /// Build from an ordered list of exact slugs and `/section` prefixes.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Self::default();
        for key in keys {
            let key = key.into();
            if order.positions.contains_key(&key) {
                continue;
            }
            order.positions.insert(key.clone(), order.keys.len());
            order.keys.push(key);
        }
        order
    }

    /// Keys in priority order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether no keys are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Position of the key that claims `slug`, if any.
    ///
    /// An exact match wins over a section prefix. A slug without a non-empty
    /// first segment can only match exactly.
    fn classify(&self, slug: &str) -> Option<usize> {
        if let Some(&position) = self.positions.get(slug) {
            return Some(position);
        }

        let segment = slug.split('/').nth(1).filter(|s| !s.is_empty())?;
        self.positions.get(&format!("/{segment}")).copied()
    }
}

/// Order all documents into a flat navigation list.
///
/// The root slug and empty slugs are skipped, duplicate slugs collapse into
/// one entry. Slugs sort by code point, so `/a10` comes before `/a2`.
///
/// Every forced key produces its group in key order. A key that matches no
/// document still occupies one slot, filled with
/// [`NavigationEntry::placeholder`]. Unclaimed slugs follow the forced groups.
#[must_use]
pub fn order_navigation(records: &[DocumentRecord], forced: &ForcedOrder) -> Vec<NavigationEntry> {
    let mut titles: HashMap<&str, &str> = HashMap::with_capacity(records.len());
    for record in records {
        titles
            .entry(record.slug.as_str())
            .or_insert(record.title.as_str());
    }

    let mut slugs: Vec<&str> = titles
        .keys()
        .copied()
        .filter(|slug| !slug.is_empty() && *slug != ROOT_SLUG)
        .collect();
    slugs.sort_unstable();

    // Every key gets a bucket up front, in key order.
    let mut buckets: Vec<(&str, Vec<&str>)> = forced
        .keys()
        .iter()
        .map(|key| (key.as_str(), Vec::new()))
        .collect();
    let mut unforced = Vec::new();

    for slug in slugs {
        match forced.classify(slug) {
            Some(position) => buckets[position].1.push(slug),
            None => unforced.push(slug),
        }
    }

    let to_entry = |slug: &str| NavigationEntry {
        title: titles.get(slug).map(|title| (*title).to_owned()),
        url: Some(slug.to_owned()),
    };

    let mut nav = Vec::with_capacity(records.len() + forced.len());
    for (key, bucket) in &buckets {
        if bucket.is_empty() {
            tracing::debug!(key = %key, "Forced navigation key matches no documents");
            nav.push(NavigationEntry::placeholder());
        } else {
            nav.extend(bucket.iter().copied().map(&to_entry));
        }
    }
    nav.extend(unforced.into_iter().map(&to_entry));

    tracing::debug!(
        records = records.len(),
        entries = nav.len(),
        forced_keys = forced.len(),
        "Navigation ordered"
    );

    nav
}
