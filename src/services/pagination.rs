use serde::Serialize;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// 1-based page of `items`. Page 0 and pages past the end are empty.
pub fn slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let pages = total_pages(total, page_size);
    let window: &[T] = if page == 0 || page > pages {
        &[]
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total);
        &items[start..end]
    };
    Page {
        items: window.to_vec(),
        page,
        total,
        total_pages: pages,
    }
}
