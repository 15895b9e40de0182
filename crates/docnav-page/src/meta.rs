//! Head metadata: canonical URL, edit link and meta tags.

use docnav_config::SiteConfig;
use serde::Serialize;

use crate::document::Frontmatter;

/// Attribute a meta tag is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaAttribute {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`
    Property,
}

/// Single `<meta>` tag for the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    /// Which attribute carries `key`.
    pub attribute: MetaAttribute,
    /// Attribute value, e.g. `og:title`.
    pub key: &'static str,
    /// Tag content.
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: &str) -> Self {
        Self {
            attribute: MetaAttribute::Name,
            key,
            content: content.to_owned(),
        }
    }

    fn property(key: &'static str, content: &str) -> Self {
        Self {
            attribute: MetaAttribute::Property,
            key,
            content: content.to_owned(),
        }
    }
}

/// Canonical URL of a page.
///
/// `path_prefix` is inserted between site URL and slug unless it is `/`.
#[must_use]
pub fn canonical_url(site: &SiteConfig, slug: &str) -> String {
    let prefix = if site.path_prefix == "/" {
        ""
    } else {
        site.path_prefix.as_str()
    };
    format!("{}{prefix}{slug}", site.site_url)
}

/// "Edit this page" link, if `docs_location` is configured.
#[must_use]
pub fn edit_url(site: &SiteConfig, relative_path: &str) -> Option<String> {
    let base = site.docs_location.as_deref()?;
    Some(format!("{base}/{}", relative_path.trim_start_matches('/')))
}

/// Meta tags for title and description.
///
/// Each present field yields its plain, Open Graph and Twitter variants.
/// Absent or empty fields yield nothing.
#[must_use]
pub fn meta_tags(frontmatter: &Frontmatter) -> Vec<MetaTag> {
    let mut tags = Vec::with_capacity(6);

    if let Some(title) = frontmatter.meta_title() {
        tags.push(MetaTag::name("title", title));
        tags.push(MetaTag::property("og:title", title));
        tags.push(MetaTag::property("twitter:title", title));
    }

    if let Some(description) = frontmatter.meta_description() {
        tags.push(MetaTag::name("description", description));
        tags.push(MetaTag::property("og:description", description));
        tags.push(MetaTag::property("twitter:description", description));
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn site() -> SiteConfig {
        SiteConfig {
            site_url: "https://docs.example.com".to_owned(),
            docs_location: Some("https://github.com/example/docs/tree/main/content".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn test_canonical_url_root_prefix() {
        assert_eq!(
            canonical_url(&site(), "/guides/setup"),
            "https://docs.example.com/guides/setup"
        );
    }

    #[test]
    fn test_canonical_url_with_prefix() {
        let site = SiteConfig {
            path_prefix: "/handbook".to_owned(),
            ..site()
        };

        assert_eq!(
            canonical_url(&site, "/guides/setup"),
            "https://docs.example.com/handbook/guides/setup"
        );
    }

    #[test]
    fn test_edit_url() {
        assert_eq!(
            edit_url(&site(), "guides/setup.md").as_deref(),
            Some("https://github.com/example/docs/tree/main/content/guides/setup.md")
        );
    }

    #[test]
    fn test_edit_url_leading_slash() {
        assert_eq!(
            edit_url(&site(), "/intro.md").as_deref(),
            Some("https://github.com/example/docs/tree/main/content/intro.md")
        );
    }

    #[test]
    fn test_edit_url_without_docs_location() {
        let site = SiteConfig::default();

        assert_eq!(edit_url(&site, "intro.md"), None);
    }

    #[test]
    fn test_meta_tags_full() {
        let frontmatter = Frontmatter {
            meta_title: Some("Setup".to_owned()),
            meta_description: Some("Install steps".to_owned()),
        };

        let keys: Vec<_> = meta_tags(&frontmatter)
            .into_iter()
            .map(|tag| (tag.attribute, tag.key, tag.content))
            .collect();

        assert_eq!(
            keys,
            vec![
                (MetaAttribute::Name, "title", "Setup".to_owned()),
                (MetaAttribute::Property, "og:title", "Setup".to_owned()),
                (MetaAttribute::Property, "twitter:title", "Setup".to_owned()),
                (MetaAttribute::Name, "description", "Install steps".to_owned()),
                (MetaAttribute::Property, "og:description", "Install steps".to_owned()),
                (
                    MetaAttribute::Property,
                    "twitter:description",
                    "Install steps".to_owned()
                ),
            ]
        );
    }

    #[test]
    fn test_meta_tags_description_only() {
        let frontmatter = Frontmatter {
            meta_title: None,
            meta_description: Some("Only this".to_owned()),
        };

        let tags = meta_tags(&frontmatter);

        assert_eq!(tags.len(), 3);
        assert!(tags.iter().all(|tag| tag.key.ends_with("description")));
    }

    #[test]
    fn test_meta_tags_absent() {
        assert!(meta_tags(&Frontmatter::default()).is_empty());
    }

    #[test]
    fn test_meta_tag_serialization() {
        let json = serde_json::to_value(MetaTag::property("og:title", "Setup")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"attribute": "property", "key": "og:title", "content": "Setup"})
        );
    }
}
