//! Cursor-driven pagination over a database query.

use super::DatabaseApi;
use super::types::{Filter, Page};
use crate::errors::AppResult;
use tracing::debug;

/// Lazy sequence of result pages for one query.
///
/// Each `Pages` value starts its own cursor chain; iteration stops after
/// the first page without a continuation cursor, or right after an error.
pub struct Pages<'a, A: DatabaseApi + ?Sized> {
    api: &'a A,
    database_id: &'a str,
    filter: &'a Filter,
    cursor: Option<String>,
    done: bool,
}

impl<'a, A: DatabaseApi + ?Sized> Pages<'a, A> {
    pub fn new(api: &'a A, database_id: &'a str, filter: &'a Filter) -> Self {
        Self {
            api,
            database_id,
            filter,
            cursor: None,
            done: false,
        }
    }
}

impl<A: DatabaseApi + ?Sized> Iterator for Pages<'_, A> {
    type Item = AppResult<Vec<Page>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self
            .api
            .query(self.database_id, self.filter, self.cursor.as_deref())
        {
            Ok(page) => {
                self.cursor = page.next_cursor.filter(|c| !c.is_empty());
                self.done = self.cursor.is_none();
                debug!(
                    database = self.database_id,
                    results = page.results.len(),
                    more = !self.done,
                    "fetched query page"
                );
                Some(Ok(page.results))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Run a query to exhaustion and return every record, in server order.
pub fn query_all<A: DatabaseApi + ?Sized>(
    api: &A,
    database_id: &str,
    filter: &Filter,
) -> AppResult<Vec<Page>> {
    let mut results = Vec::new();
    for page in Pages::new(api, database_id, filter) {
        results.extend(page?);
    }
    Ok(results)
}
