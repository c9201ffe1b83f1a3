use serde::{Deserialize, Deserializer};

// page numbers come straight from the query string; anything that is not a
// positive integer falls back to the first page instead of rejecting the request
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1))
}

fn first_page() -> usize {
    1
}

/// `?page=N` query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: first_page() }
    }
}
