//! Pagination query parameters.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, serde_as};

use super::analytics::PaginationMeta;
use crate::error::AppError;

const DEFAULT_PAGE_SIZE: u32 = 100;
const MAX_PAGE_SIZE: u32 = 1000;

/// Pagination query parameters.
///
/// Query strings carry numbers as text, so both fields go through
/// `DisplayFromStr`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Validates the parameters and resolves defaults.
    ///
    /// `page` defaults to 1 and `page_size` to 100 (max 1000).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` is 0 or `page_size` is out
    /// of range.
    pub fn window(&self) -> Result<PageWindow, AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        Ok(PageWindow { page, page_size })
    }
}

/// A validated page over an in-memory sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
}

impl PageWindow {
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }

    /// Keeps only the items that fall on this page.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size as usize)
            .collect()
    }

    pub fn meta(&self, total_items: usize) -> PaginationMeta {
        PaginationMeta {
            page: self.page,
            page_size: self.page_size,
            total_items,
            total_pages: total_items.div_ceil(self.page_size as usize) as u32,
        }
    }
}
