//! Product browser state
//!
//! Backs the paginated, multi-filter, sortable product listing. Every
//! change re-issues a full fetch (no cursor); while one fetch is
//! outstanding a second is rejected, mirroring the disabled refresh
//! control in the UI. No request is cancelled once issued.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use bazaar_client::{ApiClient, ClientError};
use shared::models::{Product, ProductStatus, SavedProductQuery, SortOrder};
use shared::response::Paginated;

#[derive(Debug, Error)]
pub enum BrowseError {
    /// A fetch is already outstanding
    #[error("A refresh is already in progress")]
    RequestPending,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Query state and the last fetched page
#[derive(Debug)]
pub struct ProductBrowser {
    query: Mutex<SavedProductQuery>,
    in_flight: AtomicBool,
    page: Mutex<Option<Paginated<Product>>>,
}

impl Default for ProductBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductBrowser {
    pub fn new() -> Self {
        let query = SavedProductQuery {
            page: Some(1),
            limit: Some(20),
            ..Default::default()
        };
        Self {
            query: Mutex::new(query),
            in_flight: AtomicBool::new(false),
            page: Mutex::new(None),
        }
    }

    /// Snapshot of the current query
    pub fn query(&self) -> SavedProductQuery {
        self.query.lock().expect("query lock").clone()
    }

    /// Last fetched page, if any
    pub fn current_page(&self) -> Option<Paginated<Product>> {
        self.page.lock().expect("page lock").clone()
    }

    /// Any filter change restarts from page 1
    fn edit_filters(&self, apply: impl FnOnce(&mut SavedProductQuery)) {
        let mut query = self.query.lock().expect("query lock");
        apply(&mut query);
        query.page = Some(1);
    }

    pub fn set_search(&self, search: Option<String>) {
        self.edit_filters(|q| q.search = search);
    }

    pub fn set_status(&self, status: Option<ProductStatus>) {
        self.edit_filters(|q| q.status = status);
    }

    pub fn set_category(&self, category_id: Option<i64>) {
        self.edit_filters(|q| q.category_id = category_id);
    }

    pub fn set_tag(&self, tag_id: Option<i64>) {
        self.edit_filters(|q| q.tag_id = tag_id);
    }

    pub fn set_page(&self, page: u32) {
        self.query.lock().expect("query lock").page = Some(page.max(1));
    }

    /// Clicking a column header: same key flips the direction, a new
    /// key starts descending. Either way the listing restarts at
    /// page 1.
    pub fn toggle_sort(&self, key: &str) {
        self.edit_filters(|q| {
            if q.sort_by.as_deref() == Some(key) {
                let current = q.sort_order.unwrap_or(SortOrder::Desc);
                q.sort_order = Some(current.flipped());
            } else {
                q.sort_by = Some(key.to_string());
                q.sort_order = Some(SortOrder::Desc);
            }
        });
    }

    /// Re-fetch the listing with the current query
    pub async fn refresh(&self, client: &ApiClient) -> Result<Paginated<Product>, BrowseError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(BrowseError::RequestPending);
        }
        let query = self.query();
        let result = client.saved_products(&query).await;
        self.in_flight.store(false, Ordering::SeqCst);

        let page = result?
            .data
            .ok_or_else(|| BrowseError::InvalidResponse("Missing product page".into()))?;
        *self.page.lock().expect("page lock") = Some(page.clone());
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_change_resets_page() {
        let browser = ProductBrowser::new();
        browser.set_page(4);
        assert_eq!(browser.query().page, Some(4));

        browser.set_status(Some(ProductStatus::Inactive));
        assert_eq!(browser.query().page, Some(1));
    }

    #[test]
    fn test_toggle_sort_flips_then_resets() {
        let browser = ProductBrowser::new();

        browser.toggle_sort("price");
        let query = browser.query();
        assert_eq!(query.sort_by.as_deref(), Some("price"));
        assert_eq!(query.sort_order, Some(SortOrder::Desc));

        browser.toggle_sort("price");
        assert_eq!(browser.query().sort_order, Some(SortOrder::Asc));

        browser.toggle_sort("rating_star");
        let query = browser.query();
        assert_eq!(query.sort_by.as_deref(), Some("rating_star"));
        assert_eq!(query.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_page_floor_is_one() {
        let browser = ProductBrowser::new();
        browser.set_page(0);
        assert_eq!(browser.query().page, Some(1));
    }
}
