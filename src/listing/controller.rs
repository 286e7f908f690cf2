//! The filtered list view controller shared by every list screen.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::Backend;
use crate::backend::errors::BackendResult;
use crate::domain::types::PageSize;
use crate::listing::filters::{FilterError, FilterState};
use crate::listing::request::{RequestDescriptor, ResponseShape};
use crate::listing::screens::ScreenConfig;
use crate::listing::state::{ResultState, Rows};
use crate::pagination::Pager;

/// What happened to the response of one [`ListViewController::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response was written to the result state.
    Settled,
    /// A later search was issued first; the response was dropped.
    Stale,
}

/// Renderable snapshot of a controller.
#[derive(Clone, Debug, Serialize)]
pub struct ListView<R> {
    pub filters: FilterState,
    pub page: u32,
    pub size: PageSize,
    pub result: ResultState<R>,
    pub pager: Pager,
}

struct Inner<R> {
    draft: FilterState,
    committed: FilterState,
    page: u32,
    size: PageSize,
    result: ResultState<R>,
    issued: u64,
}

/// Draft/committed filters, the page cursor and the last settled result of
/// one screen.
///
/// The state lock is never held across a backend call. Each search takes a
/// sequence number when it starts and only the latest issued search may
/// write the result.
pub struct ListViewController<R, B: ?Sized = dyn Backend> {
    screen: &'static ScreenConfig,
    backend: Arc<B>,
    inner: Mutex<Inner<R>>,
    _rows: PhantomData<fn() -> R>,
}

impl<R, B> ListViewController<R, B>
where
    R: DeserializeOwned + Clone,
    B: Backend + ?Sized,
{
    pub fn new(screen: &'static ScreenConfig, backend: Arc<B>) -> Self {
        Self {
            screen,
            backend,
            inner: Mutex::new(Inner {
                draft: FilterState::new(),
                committed: FilterState::new(),
                page: 0,
                size: PageSize::DEFAULT,
                result: ResultState::default(),
                issued: 0,
            }),
            _rows: PhantomData,
        }
    }

    pub fn screen(&self) -> &'static ScreenConfig {
        self.screen
    }

    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Edits the draft; a blank value unsets the field.
    pub fn set_filter(&self, name: &str, value: &str) -> Result<(), FilterError> {
        let value = self.screen.normalize(name, value)?;
        self.lock().draft.set(name, value.as_deref().unwrap_or_default());
        Ok(())
    }

    pub fn draft(&self) -> FilterState {
        self.lock().draft.clone()
    }

    pub fn committed(&self) -> FilterState {
        self.lock().committed.clone()
    }

    /// Seeds draft, committed filters and cursor without fetching.
    ///
    /// Every pair is validated before anything is changed.
    pub fn restore<'a>(
        &self,
        filters: impl IntoIterator<Item = (&'a str, &'a str)>,
        page: u32,
        size: PageSize,
    ) -> Result<(), FilterError> {
        let mut restored = FilterState::new();
        for (name, value) in filters {
            if let Some(value) = self.screen.normalize(name, value)? {
                restored.set(name, &value);
            }
        }

        let mut inner = self.lock();
        inner.draft = restored.clone();
        inner.committed = restored;
        inner.page = page;
        inner.size = size;
        Ok(())
    }

    /// Commits the draft and searches from the first page.
    pub async fn submit(&self) -> SearchOutcome {
        {
            let mut inner = self.lock();
            inner.committed = inner.draft.clone();
            inner.page = 0;
        }
        self.search().await
    }

    /// Empties draft and committed filters and searches from the first page.
    pub async fn clear(&self) -> SearchOutcome {
        {
            let mut inner = self.lock();
            inner.draft.clear();
            inner.committed.clear();
            inner.page = 0;
        }
        self.search().await
    }

    pub async fn set_page(&self, page: u32) -> SearchOutcome {
        self.lock().page = page;
        self.search().await
    }

    /// Changes the size and searches again; the page is kept as is.
    pub async fn set_size(&self, size: PageSize) -> SearchOutcome {
        self.lock().size = size;
        self.search().await
    }

    /// Moves forward when the pager allows it, `None` otherwise.
    pub async fn next_page(&self) -> Option<SearchOutcome> {
        let next = self.pager().next_page?;
        Some(self.set_page(next).await)
    }

    /// Moves back when the pager allows it, `None` otherwise.
    pub async fn prev_page(&self) -> Option<SearchOutcome> {
        let prev = self.pager().prev_page?;
        Some(self.set_page(prev).await)
    }

    /// Descriptor the next search would issue.
    pub fn descriptor(&self) -> RequestDescriptor {
        let inner = self.lock();
        self.screen.describe(&inner.committed, inner.page, inner.size)
    }

    /// Issues one request for the committed filters at the current cursor.
    pub async fn search(&self) -> SearchOutcome {
        let (sequence, descriptor) = {
            let mut inner = self.lock();
            inner.issued += 1;
            let page = inner.page;
            inner.result.begin(page);
            let descriptor = self.screen.describe(&inner.committed, page, inner.size);
            (inner.issued, descriptor)
        };

        log::debug!("{} search #{sequence}: GET {descriptor}", self.screen.key);
        let fetched = self.fetch(&descriptor).await;

        let mut inner = self.lock();
        if inner.issued != sequence {
            log::debug!(
                "{} search #{sequence} superseded by #{}",
                self.screen.key,
                inner.issued
            );
            return SearchOutcome::Stale;
        }

        match fetched {
            Ok(rows) => inner.result.settle(rows),
            Err(message) => {
                log::warn!("{} search failed: {message}", self.screen.key);
                inner.result.fail(message);
            }
        }
        SearchOutcome::Settled
    }

    async fn fetch(&self, descriptor: &RequestDescriptor) -> Result<Rows<R>, String> {
        let response: BackendResult<_> = self
            .backend
            .get_json(descriptor.endpoint_path(), descriptor.query_params())
            .await;

        match response {
            Ok(body) => Rows::from_body(descriptor.shape(), body).map_err(|e| e.to_string()),
            Err(err) if descriptor.shape() == ResponseShape::Single && err.is_not_found() => {
                Ok(Rows::empty())
            }
            Err(err) => Err(err.to_string()),
        }
    }

    pub fn result(&self) -> ResultState<R> {
        self.lock().result.clone()
    }

    pub fn pager(&self) -> Pager {
        let inner = self.lock();
        Pager::new(inner.page, inner.result.total_pages, inner.result.loading)
    }

    pub fn snapshot(&self) -> ListView<R> {
        let inner = self.lock();
        ListView {
            filters: inner.draft.clone(),
            page: inner.page,
            size: inner.size,
            result: inner.result.clone(),
            pager: Pager::new(inner.page, inner.result.total_pages, inner.result.loading),
        }
    }
}
