use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Name of an existing category
    pub category: String,
    /// Unit price, strictly positive
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
        }
    }
}
