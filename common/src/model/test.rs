use serde::{Deserialize, Serialize};

use super::Category;

/// An exam document record.
///
/// `views` is owned by the server: the client only asks for it to be
/// incremented and never adjusts the value locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub id: u64,
    pub name: String,
    pub pdf_url: String,
    pub category: Category,
    #[serde(default)]
    pub views: u64,
}

impl Test {
    /// Whether this test is tagged with the category `category_id`.
    pub fn is_of_category(&self, category_id: u64) -> bool {
        self.category.id == category_id
    }
}
