/// Number of items on every page of every listing endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the items that fall on a 1-based page
///
/// A page past the end yields an empty vector. Page 0 is treated as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    items[start..end].to_vec()
}
