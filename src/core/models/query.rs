use serde::Deserialize;

pub const DEFAULT_SKIP: usize = 0;
pub const DEFAULT_LIMIT: usize = 50;

/// Paging window for user listings, newest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ListOptions {
    #[serde(default = "default_skip")]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_skip() -> usize {
    DEFAULT_SKIP
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListOptions {
    pub fn new(skip: usize, limit: usize) -> Self {
        ListOptions { skip, limit }
    }
}
