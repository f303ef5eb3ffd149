//! Generic repository contract shared by the specialized repositories.
//!
//! Each repository is a plain struct bound to a pool plus the configured
//! limits; the trait gives every entity the same create/read/update/delete
//! surface without inheritance. Specialized operations live on the concrete
//! types and compose these primitives.

use crate::types::{StoreError, StoreLimits, StoreResult};

/// Validated offset-based pagination window.
///
/// Limits above the configured maximum are rejected here, at the boundary,
/// never silently truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: i64,
    limit: i64,
}

impl Page {
    /// Build a page from explicit `skip`/`limit` values.
    pub fn new(skip: i64, limit: i64, limits: &StoreLimits) -> StoreResult<Self> {
        if skip < 0 {
            return Err(StoreError::validation("skip must not be negative"));
        }
        if limit <= 0 {
            return Err(StoreError::validation("limit must be positive"));
        }
        if limit > limits.max_page_size {
            return Err(StoreError::validation(format!(
                "limit {limit} exceeds maximum page size {}",
                limits.max_page_size
            )));
        }
        Ok(Self { skip, limit })
    }

    /// Build a page, falling back to the configured default page size.
    pub fn or_default(skip: i64, limit: Option<i64>, limits: &StoreLimits) -> StoreResult<Self> {
        Self::new(skip, limit.unwrap_or(limits.default_page_size), limits)
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

/// Uniform CRUD primitives parameterized by entity and payload shapes.
///
/// Every operation runs in its own transaction scope: single statements are
/// atomic in the store, multi-statement operations open an explicit
/// transaction and roll back before surfacing an error.
#[allow(async_fn_in_trait)]
pub trait Repository {
    type Entity;
    type Create;
    type Update;

    /// Persist a new row from a validated payload, returning the full entity.
    async fn create(&self, payload: Self::Create) -> StoreResult<Self::Entity>;

    /// Single-row lookup by primary key.
    async fn get(&self, id: i64) -> StoreResult<Option<Self::Entity>>;

    /// Bounded, offset-based listing in the entity's default order.
    async fn get_multi(&self, page: Page) -> StoreResult<Vec<Self::Entity>>;

    /// Whole-entity overwrite after re-validation; not-found if no row.
    async fn update(&self, id: i64, payload: Self::Update) -> StoreResult<Self::Entity>;

    /// Remove a row; returns whether a row existed.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
