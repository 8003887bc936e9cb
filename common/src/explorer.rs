use tracing::debug;

use crate::catalog::{Catalog, Category, Subcategory};

// the product tabs
//
// the active key is kept even if it names no category, so that an unknown
// data-category renders an empty container rather than falling back silently
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explorer {
    active: String,
}

impl Explorer {
    pub fn new(catalog: &Catalog) -> Self {
        Explorer {
            active: catalog.initial_key().to_owned(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn select(&mut self, key: &str) {
        debug!({ category = key }, "selecting product tab");
        self.active = key.to_owned();
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }

    pub fn tab_class(&self, key: &str) -> &'static str {
        if self.is_active(key) {
            "tab-bora active"
        } else {
            "tab-bora"
        }
    }

    pub fn aria_selected(&self, key: &str) -> &'static str {
        if self.is_active(key) { "true" } else { "false" }
    }

    pub fn category<'c>(&self, catalog: &'c Catalog) -> Option<&'c Category> {
        catalog.get(&self.active)
    }

    // one card per subcategory of the active tab, in authored order
    pub fn cards<'c>(&self, catalog: &'c Catalog) -> &'c [Subcategory] {
        self.category(catalog)
            .map(|c| c.subcategories.as_slice())
            .unwrap_or(&[])
    }
}

// the product detail modal
//
// holds a copy of the subcategory on display; None means hidden
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductModal {
    shown: Option<Subcategory>,
}

impl ProductModal {
    pub fn open(&mut self, sub: &Subcategory) {
        debug!({ brand = %sub.brand }, "opening product modal");
        self.shown = Some(sub.clone());
    }

    pub fn close(&mut self) {
        self.shown = None;
    }

    pub fn is_open(&self) -> bool {
        self.shown.is_some()
    }

    pub fn shown(&self) -> Option<&Subcategory> {
        self.shown.as_ref()
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() { "false" } else { "true" }
    }

    pub fn class(&self) -> &'static str {
        if self.is_open() {
            "product-modal open"
        } else {
            "product-modal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;

    #[test]
    fn initial_tab_uses_default_when_none_marked() {
        let catalog = sample();
        let explorer = Explorer::new(&catalog);

        assert_eq!(explorer.active(), "mobiles");
        assert_eq!(explorer.tab_class("mobiles"), "tab-bora active");
        assert_eq!(explorer.aria_selected("printers"), "false");
    }

    #[test]
    fn initial_tab_uses_marked_category() {
        let mut catalog = sample();
        catalog.categories[1].active = true;

        assert_eq!(Explorer::new(&catalog).active(), "printers");
    }

    #[test]
    fn selecting_a_tab_yields_its_cards_in_order() {
        let catalog = sample();
        let mut explorer = Explorer::new(&catalog);

        explorer.select("printers");
        let brands: Vec<_> = explorer
            .cards(&catalog)
            .iter()
            .map(|s| s.brand.as_str())
            .collect();

        assert_eq!(brands, vec!["Canon", "HP", "Epson"]);
        assert_eq!(explorer.aria_selected("printers"), "true");
        assert_eq!(explorer.aria_selected("mobiles"), "false");
    }

    #[test]
    fn unknown_tab_renders_nothing() {
        let catalog = sample();
        let mut explorer = Explorer::new(&catalog);

        explorer.select("ecommerce");
        assert!(explorer.category(&catalog).is_none());
        assert!(explorer.cards(&catalog).is_empty());
    }

    #[test]
    fn modal_shows_exactly_the_chosen_subcategory() {
        let catalog = sample();
        let chosen = &catalog.categories[1].subcategories[1];
        let mut modal = ProductModal::default();

        assert_eq!(modal.aria_hidden(), "true");

        modal.open(chosen);
        assert!(modal.is_open());
        assert_eq!(modal.aria_hidden(), "false");
        assert_eq!(modal.class(), "product-modal open");

        let shown = modal.shown().unwrap();
        assert_eq!(shown.brand, "HP");
        assert_eq!(shown.desc, chosen.desc);
        assert_eq!(shown.types, vec!["HP LaserJet", "HP OfficeJet"]);
    }

    #[test]
    fn close_returns_modal_to_hidden() {
        let catalog = sample();
        let mut modal = ProductModal::default();

        modal.open(&catalog.categories[0].subcategories[0]);
        modal.close();

        assert!(!modal.is_open());
        assert!(modal.shown().is_none());
        assert_eq!(modal.aria_hidden(), "true");
        assert_eq!(modal.class(), "product-modal");

        // closing twice is harmless, e.g. Escape with nothing open
        modal.close();
        assert!(!modal.is_open());
    }
}
