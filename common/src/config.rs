use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::catalog::Catalog;

// the site document shipped with the webapp
pub const BUNDLED_SITE: &str = include_str!("../assets/site.toml");

pub const DEFAULT_SCROLL_OFFSET: f64 = 120.0;
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 980.0;
pub const DEFAULT_MAILTO_DELAY_MS: u32 = 500;

// storefront configuration
//
// the parts of the page that are not catalog data: who enquiries go to, how the
// navigation behaves, and how long the contact form waits before handing off
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
    // shown in the header and footer
    pub company: String,

    // fixed phrase in the enquiry subject, i.e. "Enquiry from <sender> — ..."
    pub sender: String,

    // mailto recipient
    pub recipient: String,

    #[serde(default)]
    pub nav: NavConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // added to window.scrollY before testing section bounds, roughly the header height
    pub scroll_offset: f64,

    // viewports at or below this width use the collapsible menu
    pub mobile_breakpoint: f64,

    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            links: Vec::new(),
        }
    }
}

// a nav entry pointing at section[id=target]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ContactConfig {
    pub mailto_delay_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            mailto_delay_ms: DEFAULT_MAILTO_DELAY_MS,
        }
    }
}

// everything the page needs, constructed once at startup and handed to the
// component tree
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
}

// the document keeps the configuration in its own [config] table so that the
// catalog can live alongside it
#[derive(Debug, Deserialize)]
struct SiteFile {
    config: SiteConfig,
    #[serde(default)]
    catalog: Catalog,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_site(doc: &str) -> Result<Site> {
    debug!("parsing site document");

    let file: SiteFile = toml::from_str(doc).context("failed to parse site document")?;

    file.catalog
        .validate()
        .context("site document has an invalid catalog")?;

    debug!(
        { categories = file.catalog.len() },
        "successfully parsed site document"
    );

    Ok(Site {
        config: file.config,
        catalog: file.catalog,
    })
}

pub fn bundled_site() -> Result<Site> {
    read_site(BUNDLED_SITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [config]
        company = "Acme"
        sender = "Acme website"
        recipient = "sales@acme.test"
    "#;

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let site = read_site(MINIMAL).unwrap();

        assert_eq!(site.config.nav.scroll_offset, DEFAULT_SCROLL_OFFSET);
        assert_eq!(site.config.nav.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
        assert!(site.config.nav.links.is_empty());
        assert_eq!(site.config.contact.mailto_delay_ms, DEFAULT_MAILTO_DELAY_MS);
        assert!(site.catalog.is_empty());
    }

    #[test]
    fn partial_nav_table_keeps_other_defaults() {
        let doc = format!("{MINIMAL}\n[config.nav]\nscroll_offset = 64.0\n");
        let site = read_site(&doc).unwrap();

        assert_eq!(site.config.nav.scroll_offset, 64.0);
        assert_eq!(site.config.nav.mobile_breakpoint, DEFAULT_MOBILE_BREAKPOINT);
    }

    #[test]
    fn missing_config_table_is_an_error() {
        let err = read_site("[catalog]\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse site document"));
    }

    #[test]
    fn duplicate_category_keys_are_rejected() {
        let doc = format!(
            "{MINIMAL}
            [[catalog.categories]]
            key = \"mobiles\"
            title = \"Mobiles\"
            note = \"\"

            [[catalog.categories]]
            key = \"mobiles\"
            title = \"Phones\"
            note = \"\"
            "
        );

        let err = read_site(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate category key"));
    }

    #[test]
    fn nav_link_href_points_at_section() {
        let link = NavLink {
            label: String::from("Products"),
            target: String::from("products"),
        };
        assert_eq!(link.href(), "#products");
    }
}
