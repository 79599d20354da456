use serde::Deserialize;

pub const USER_AGENT: &str = concat!("shopdesk/", env!("CARGO_PKG_VERSION"));

/// List endpoints answer either with a bare array or with an object that
/// wraps the array in `items`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    /// `[...]`
    Bare(Vec<T>),
    /// `{"items": [...], ...}`, or any object without `items`
    Envelope { items: Option<Vec<T>> },
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Envelope { items } => items.unwrap_or_default(),
        }
    }
}
