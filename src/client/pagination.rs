//! Listing parameters for GitHub repository endpoints

/// Largest `per_page` value the GitHub API honours
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters for a single repository listing page.
///
/// # Example
/// ```ignore
/// let params = ListParams::new(15).sort_by("updated").descending();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Number of items requested (capped at [`MAX_PAGE_SIZE`])
    pub per_page: u32,
    /// Sort field ("created", "updated", "pushed", "full_name")
    pub sort: Option<String>,
    /// Ask for `direction=desc` instead of the endpoint's default order
    pub descending: bool,
}

impl ListParams {
    /// Request `per_page` items, capped at the API maximum.
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
            sort: None,
            descending: false,
        }
    }

    /// Most recently updated first; the ordering GitGrab always uses.
    pub fn recently_updated(per_page: u32) -> Self {
        Self::new(per_page)
            .sort_by("updated")
            .descending()
    }

    /// Set the sort field.
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }

    /// Sort newest or largest first.
    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Convert to `(key, value)` query pairs using GitHub parameter names.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("per_page", self.per_page.to_string())];

        if let Some(ref field) = self.sort {
            params.push(("sort", field.clone()));
        }

        if self.descending {
            params.push(("direction", "desc".to_string()));
        }

        params
    }
}
