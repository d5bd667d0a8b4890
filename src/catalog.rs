use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;

use crate::models::food::FoodItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("catalog document malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read-only source of the menu data. Every `load` re-reads the document,
/// so edits to the file show up on the next request.
#[derive(Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<FoodItem>, CatalogError> {
        let raw = fs::read_to_string(&self.path).await?;
        let items = serde_json::from_str::<Vec<FoodItem>>(&raw)?;
        Ok(items)
    }
}

/// Items flagged popular, in document order.
pub fn select_popular(items: Vec<FoodItem>) -> Vec<FoodItem> {
    items.into_iter().filter(|item| item.popular).collect()
}

/// Items whose category matches exactly (case-sensitive), in document
/// order. An unknown category yields an empty list.
pub fn select_by_category(items: Vec<FoodItem>, category: &str) -> Vec<FoodItem> {
    items
        .into_iter()
        .filter(|item| item.category == category)
        .collect()
}
