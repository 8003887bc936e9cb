// storefront page logic
//
// everything here is independent of the DOM so that the webapp can stay a thin layer
// of components and event handlers, and so the behavior can be tested on the host
pub mod catalog;
pub mod config;
pub mod contact;
pub mod explorer;
pub mod nav;
pub mod scroll;

pub use catalog::{Catalog, Category, Subcategory};
pub use config::{Site, SiteConfig, bundled_site, read_site};
