use serde::{Deserialize, Deserializer, Serialize};

/// Page coordinates sent with every paginated fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Items per page, always > 0.
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Index of the first item of this page across the whole collection.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// Paging metadata nested inside a Spring Data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u32,
    pub page_size: u32,
}

/// Page envelope returned by paginated endpoints.
///
/// The backend speaks Spring Data, where the page coordinates live under
/// `pageable` (or `"INSTANCE"` for unpaged results) and are repeated as
/// `number`/`size`. Flat `pageNumber`/`pageSize` are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(
        default,
        deserialize_with = "lenient_pageable",
        skip_serializing_if = "Option::is_none"
    )]
    pub pageable: Option<Pageable>,
    #[serde(default, alias = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, alias = "pageSize", skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Build an envelope for `request` holding `content`, out of
    /// `total_elements` items overall.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            pageable: Some(Pageable {
                page_number: request.page,
                page_size: request.size,
            }),
            number: Some(request.page),
            size: Some(request.size),
            total_elements,
            total_pages: total_pages_for(total_elements, request.size).unwrap_or(0),
        }
    }

    pub fn page_number(&self) -> Option<u32> {
        self.pageable.map(|p| p.page_number).or(self.number)
    }

    pub fn page_size(&self) -> Option<u32> {
        self.pageable.map(|p| p.page_size).or(self.size)
    }
}

/// `ceil(total_elements / page_size)`, or `None` for a zero page size.
pub(crate) fn total_pages_for(total_elements: u64, page_size: u32) -> Option<u32> {
    if page_size == 0 {
        return None;
    }
    let pages = total_elements.div_ceil(u64::from(page_size));
    Some(u32::try_from(pages).unwrap_or(u32::MAX))
}

fn lenient_pageable<'de, D>(deserializer: D) -> Result<Option<Pageable>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
