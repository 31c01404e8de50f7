use serde::{Deserialize, Serialize};

use business::domain::category::model::Category;
use business::domain::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntity {
    pub id: u64,
    pub name: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Result<Category, RepositoryError> {
        Category::new(self.id, self.name).map_err(RepositoryError::invalid_record)
    }
}

impl From<&Category> for CategoryEntity {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}
