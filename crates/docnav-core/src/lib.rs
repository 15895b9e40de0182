//! Navigation ordering and pagination for docnav.
//!
//! This crate provides:
//! - [`order_navigation`]: Flat navigation list ordered by a [`ForcedOrder`]
//! - [`Pagination`]: Previous/next neighbours of a page in that list
//!
//! # Quick Start
//!
//! ```
//! use docnav_core::{DocumentRecord, ForcedOrder, Pagination, order_navigation};
//!
//! let records = vec![
//!     DocumentRecord::new("/", "Home"),
//!     DocumentRecord::new("/guides/setup", "Setup"),
//!     DocumentRecord::new("/api", "API"),
//! ];
//! let forced = ForcedOrder::new(["/guides"]);
//!
//! let nav = order_navigation(&records, &forced);
//! let urls: Vec<_> = nav.iter().filter_map(|entry| entry.url.as_deref()).collect();
//! assert_eq!(urls, ["/guides/setup", "/api"]);
//!
//! let pagination = Pagination::locate(&nav, "/guides/setup");
//! assert!(pagination.previous.is_none());
//! assert_eq!(pagination.next.unwrap().title.as_deref(), Some("API"));
//! ```

mod navigation;
mod pagination;

pub use navigation::{DocumentRecord, ForcedOrder, NavigationEntry, ROOT_SLUG, order_navigation};
pub use pagination::Pagination;
