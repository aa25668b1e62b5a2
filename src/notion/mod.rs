//! Notion database access: wire types, the blocking HTTP client and the
//! cursor-driven pagination helper.

pub mod client;
pub mod pages;
pub mod types;

use crate::errors::AppResult;
use types::{Filter, Page, PropertyMap, QueryPage};

/// The two remote operations the job needs.
///
/// `NotionClient` talks to the real API; tests plug in an in-memory store.
pub trait DatabaseApi {
    /// Fetch one page of records matching `filter`, continuing from
    /// `start_cursor` when given.
    fn query(
        &self,
        database_id: &str,
        filter: &Filter,
        start_cursor: Option<&str>,
    ) -> AppResult<QueryPage>;

    /// Create one record in `database_id` with the given properties.
    fn create_page(&self, database_id: &str, properties: &PropertyMap) -> AppResult<Page>;
}

pub use client::NotionClient;
pub use pages::{Pages, query_all};
