use serde::Serialize;

use crate::models::news::{NewsResult, ResultStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayState {
    Articles,
    /// Nothing matched; distinct from a failed request.
    Empty,
}

/// What a renderer needs: the result as-is plus derived pagination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    #[serde(flatten)]
    pub result: NewsResult,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub display: DisplayState,
}

/// `ceil(total_results / page_size)`, never below one page.
pub fn total_pages(total_results: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total_results.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub fn present(result: NewsResult, page_size_used: u32) -> ViewModel {
    let total_pages = total_pages(result.total_results, page_size_used);
    let display = if result.status == ResultStatus::Success && !result.articles.is_empty() {
        DisplayState::Articles
    } else {
        DisplayState::Empty
    };

    ViewModel {
        has_previous: result.page > 1,
        has_next: result.page < total_pages,
        total_pages,
        display,
        result,
    }
}
