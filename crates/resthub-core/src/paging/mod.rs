//! Offset paging: page requests and result pages

use serde::Serialize;

use crate::error::DomainError;

/// A validated pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Create a page request
    ///
    /// `page` is zero-based and must be non-negative; `size` must be > 0.
    /// The resulting offset must fit in an `i64`.
    pub fn new(page: i64, size: i64) -> Result<Self, DomainError> {
        let page = u32::try_from(page)
            .map_err(|_| DomainError::InvalidPageRequest(format!("invalid page number: {page}")))?;
        let size = u32::try_from(size)
            .ok()
            .filter(|s| *s > 0)
            .ok_or_else(|| DomainError::InvalidPageRequest(format!("invalid page size: {size}")))?;
        if i64::try_from(u64::from(page) * u64::from(size)).is_err() {
            return Err(DomainError::InvalidPageRequest(format!(
                "page window out of range: page {page}, size {size}"
            )));
        }
        Ok(Self { page, size })
    }

    /// Zero-based page number
    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of elements in the page
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of elements to skip
    #[inline]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results plus the paging metadata needed to navigate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// Build a page from its content and the total number of matching elements
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    /// Total number of pages for the current size
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    /// Check if a following page exists
    pub fn has_next(&self) -> bool {
        u64::from(self.number) + 1 < self.total_pages()
    }

    /// Check if a preceding page exists
    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    /// Number of elements in this page
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if this page has no elements
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert the page content, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}
