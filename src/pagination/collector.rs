//! Paginated collector
//!
//! Follows continuation tokens until the upstream stops returning one.

use super::types::{Collection, CollectionStats, CollectorConfig, PageSource};
use crate::error::{Error, Result};
use crate::types::Page;
use futures::stream::{self, Stream};
use std::future::Future;
use tracing::{debug, info};

/// Where a page stream is in its walk over the upstream
enum PageCursor {
    Start,
    Next(String),
    LimitReached(usize),
    Done,
}

/// Collects item ids from a paginated upstream
///
/// Each run owns its own accumulator; a `Collector` can be reused for any
/// number of runs.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    config: CollectorConfig,
}

impl Collector {
    /// Create a collector with no page limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector with custom configuration
    pub fn with_config(config: CollectorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Collect every item id from `source`
    pub async fn collect<S>(&self, source: &S) -> Result<Vec<String>>
    where
        S: PageSource + ?Sized,
    {
        Ok(self.collect_with_stats(source).await?.into_ids())
    }

    /// Collect every item id from `source`, keeping the run counters
    pub async fn collect_with_stats<S>(&self, source: &S) -> Result<Collection>
    where
        S: PageSource + ?Sized,
    {
        self.run(move |token: Option<String>| async move {
            source.list_page(token.as_deref()).await
        })
        .await
    }

    /// Collect every item id using a closure as the listing capability
    pub async fn collect_with<F, Fut>(&self, list_page: F) -> Result<Vec<String>>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page>>,
    {
        Ok(self.run(list_page).await?.into_ids())
    }

    async fn run<F, Fut>(&self, mut list_page: F) -> Result<Collection>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page>>,
    {
        let mut ids = Vec::new();
        let mut stats = CollectionStats::new();
        let mut token: Option<String> = None;

        loop {
            let page_number = stats.pages_fetched + 1;
            let page = list_page(token.take())
                .await
                .map_err(|e| Error::upstream(page_number, e))?;

            stats.add_page(page.len());
            debug!(
                page = page_number,
                items = page.len(),
                has_more = !page.is_last(),
                "Fetched page"
            );

            let next = page.continuation().map(str::to_owned);
            ids.extend(page.items.into_iter().map(|item| item.id));

            match next {
                Some(_) if self.config.limit_reached(stats.pages_fetched) => {
                    return Err(Error::MaxPagesExceeded {
                        max_pages: stats.pages_fetched,
                    });
                }
                Some(next) => token = Some(next),
                None => break,
            }
        }

        info!(
            pages = stats.pages_fetched,
            items = stats.items_collected,
            "Collection complete"
        );

        Ok(Collection { ids, stats })
    }

    /// Lazily walk the upstream one page at a time
    ///
    /// Nothing is fetched until the stream is polled, and dropping the stream
    /// between items abandons the walk. Failures are wrapped the same way as
    /// in [`Collector::collect`]; the stream ends after the first error.
    pub fn pages<'a, S>(&'a self, source: &'a S) -> impl Stream<Item = Result<Page>> + 'a
    where
        S: PageSource + ?Sized,
    {
        stream::unfold(
            (PageCursor::Start, 0usize),
            move |(cursor, fetched)| async move {
                let token = match cursor {
                    PageCursor::Start => None,
                    PageCursor::Next(token) => Some(token),
                    PageCursor::LimitReached(max_pages) => {
                        let err = Error::MaxPagesExceeded { max_pages };
                        return Some((Err(err), (PageCursor::Done, fetched)));
                    }
                    PageCursor::Done => return None,
                };

                let page_number = fetched + 1;
                match source.list_page(token.as_deref()).await {
                    Ok(page) => {
                        let next = match page.continuation() {
                            None => PageCursor::Done,
                            Some(_) if self.config.limit_reached(page_number) => {
                                PageCursor::LimitReached(page_number)
                            }
                            Some(token) => PageCursor::Next(token.to_owned()),
                        };
                        Some((Ok(page), (next, page_number)))
                    }
                    Err(e) => Some((
                        Err(Error::upstream(page_number, e)),
                        (PageCursor::Done, page_number),
                    )),
                }
            },
        )
    }
}

/// Collect every item id from `source` with no page limit
pub async fn collect<S>(source: &S) -> Result<Vec<String>>
where
    S: PageSource + ?Sized,
{
    Collector::new().collect(source).await
}

/// Collect every item id, calling `list_page` with each continuation token
///
/// ```rust,ignore
/// let ids = collect_fn(|token| async move { api.list(token).await }).await?;
/// ```
pub async fn collect_fn<F, Fut>(list_page: F) -> Result<Vec<String>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page>>,
{
    Collector::new().collect_with(list_page).await
}
