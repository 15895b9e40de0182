//! Page view assembly for docnav.
//!
//! Combines the current document, the site navigation and site settings into
//! a [`PageView`] for an external renderer. No markup is produced here.
//!
//! # Quick Start
//!
//! ```
//! use docnav_config::Config;
//! use docnav_core::DocumentRecord;
//! use docnav_page::{FocusedDocument, PageViewBuilder};
//!
//! let config = Config::from_toml(r#"
//! [site]
//! site_url = "https://docs.example.com"
//!
//! [sidebar]
//! forced_nav_order = ["/start"]
//! "#).unwrap();
//!
//! let records = vec![
//!     DocumentRecord::new("/reference", "Reference"),
//!     DocumentRecord::new("/start", "Getting Started"),
//! ];
//! let document = FocusedDocument {
//!     slug: "/start".to_owned(),
//!     title: "Getting Started".to_owned(),
//!     ..Default::default()
//! };
//!
//! let view = PageViewBuilder::new(&config).build(&records, document);
//! assert_eq!(view.canonical_url, "https://docs.example.com/start");
//! assert_eq!(view.pagination.next.unwrap().title.as_deref(), Some("Reference"));
//! ```

mod document;
mod meta;
mod view;

pub use document::{FocusedDocument, Frontmatter};
pub use meta::{MetaAttribute, MetaTag, canonical_url, edit_url, meta_tags};
pub use view::{PageView, PageViewBuilder};
