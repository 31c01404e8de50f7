use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Product::new(
            self.id,
            NewProductProps {
                name: self.name,
                category: self.category,
                price: self.price,
            },
        )
        .map_err(RepositoryError::invalid_record)
    }
}

impl From<&Product> for ProductEntity {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_through_domain() {
        let entity = ProductEntity {
            id: 3,
            name: "Dune".to_string(),
            category: "Books".to_string(),
            price: 9.99,
        };

        let product = entity.clone().into_domain().unwrap();

        assert_eq!(ProductEntity::from(&product), entity);
    }

    #[test]
    fn should_reject_record_with_negative_price() {
        let entity = ProductEntity {
            id: 3,
            name: "Dune".to_string(),
            category: "Books".to_string(),
            price: -2.0,
        };

        assert!(matches!(
            entity.into_domain().unwrap_err(),
            RepositoryError::InvalidRecord(reason) if reason == "product.invalid_price"
        ));
    }
}
