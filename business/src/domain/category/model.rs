use super::errors::CategoryError;

/// A validated category that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Result<Self, CategoryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }

        Ok(Self { name })
    }

    /// Attaches the id handed out by the store.
    pub fn into_category(self, id: u64) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Result<Self, CategoryError> {
        Ok(NewCategory::new(name)?.into_category(id))
    }
}
