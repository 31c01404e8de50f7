use super::errors::ProductError;

/// A validated product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    /// Name of the category the product belongs to.
    pub category: String,
    pub price: f64,
}

pub struct NewProductProps {
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl NewProduct {
    /// Prices must be strictly positive; the same bound applies to requests
    /// and to records read back from the store.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        if !props.price.is_finite() || props.price <= 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            name: props.name,
            category: props.category,
            price: props.price,
        })
    }

    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, props: NewProductProps) -> Result<Self, ProductError> {
        Ok(NewProduct::new(props)?.into_product(id))
    }
}
