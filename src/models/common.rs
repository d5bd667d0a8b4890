use serde::Deserialize;

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}
