//! Filter controllers for the portfolio and blog regions.
//!
//! One controller per region. Selecting a key activates exactly one
//! button and shows the items whose tags contain that key; the `all` key
//! shows everything. Pure view-state manipulation, no network.

/// Key that shows every item.
pub const ALL_KEY: &str = "all";

/// View binding for one filterable region.
pub trait FilterView {
    /// Mark this key's button as the only active one.
    fn set_active(&mut self, key: &str);

    /// Show or hide one item.
    fn set_item_visible(&mut self, item_id: &str, visible: bool);
}

/// An item in a filterable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    pub id: String,
    pub tags: Vec<String>,
}

impl FilterItem {
    pub fn new(id: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Controller for one filter region.
pub struct FilterGroup<V: FilterView> {
    view: V,
    items: Vec<FilterItem>,
    keys: Vec<String>,
}

impl<V: FilterView> FilterGroup<V> {
    /// Create a controller over a region's items and its filter keys.
    pub fn new(view: V, items: Vec<FilterItem>, keys: Vec<String>) -> Self {
        Self { view, items, keys }
    }

    /// Activate one filter key. Keys without a button are ignored.
    pub fn select(&mut self, key: &str) {
        if !self.keys.iter().any(|k| k == key) {
            return;
        }

        self.view.set_active(key);
        for item in &self.items {
            let visible = key == ALL_KEY || item.tags.iter().any(|tag| tag == key);
            self.view.set_item_visible(&item.id, visible);
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
