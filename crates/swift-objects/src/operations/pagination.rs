//! Marker pagination over container listings.

use futures::Stream;

use super::objects::{ListPage, ObjectOperations};
use crate::Result;
use crate::types::ListOpts;

/// Walks a container listing page by page.
///
/// Each page is fetched with the marker set to the last name of the previous
/// page; an empty page ends the walk. Created via
/// [`ObjectOperations::pages`].
#[derive(Debug)]
pub struct ObjectPager {
    operations: ObjectOperations,
    container: String,
    opts: ListOpts,
    done: bool,
}

impl ObjectPager {
    pub(crate) fn new(
        operations: ObjectOperations,
        container: impl Into<String>,
        opts: ListOpts,
    ) -> Self {
        Self {
            operations,
            container: container.into(),
            opts,
            done: false,
        }
    }

    /// Fetches the next page, or `None` once the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying list request fails or a page body
    /// is malformed.
    pub async fn next_page(&mut self) -> Result<Option<ListPage>> {
        if self.done {
            return Ok(None);
        }

        let page = self.operations.list(&self.container, &self.opts).await?;
        match page.next_marker()? {
            Some(marker) => {
                self.opts.marker = Some(marker);
                Ok(Some(page))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }

    /// Converts the pager into a stream of pages.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<ListPage>> {
        async_stream::try_stream! {
            while let Some(page) = self.next_page().await? {
                yield page;
            }
        }
    }
}
