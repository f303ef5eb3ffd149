//! Shared types for the storage layer

pub mod errors;

pub use errors::{StoreError, StoreResult};

use parley_config::{PaginationConfig, ValidationConfig};

/// Bounds consumed by the repositories: page sizes and field lengths.
///
/// Constructed from configuration once and passed to each repository, so
/// every validation path uses the same limits.
#[derive(Debug, Clone, Copy)]
pub struct StoreLimits {
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub max_title_length: usize,
    pub max_text_length: usize,
}

impl StoreLimits {
    pub fn new(pagination: PaginationConfig, validation: ValidationConfig) -> Self {
        Self {
            default_page_size: pagination.default_page_size,
            max_page_size: pagination.max_page_size,
            max_title_length: validation.max_title_length,
            max_text_length: validation.max_text_length,
        }
    }
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self::new(PaginationConfig::default(), ValidationConfig::default())
    }
}
