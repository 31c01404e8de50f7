use super::errors::FavoriteError;

/// Marks a product as favorite for a user. The pair is the natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Favorite {
    pub user_id: u64,
    pub product_id: u64,
}

impl Favorite {
    pub fn new(user_id: u64, product_id: u64) -> Result<Self, FavoriteError> {
        if user_id == 0 {
            return Err(FavoriteError::InvalidUserId);
        }

        if product_id == 0 {
            return Err(FavoriteError::InvalidProductId);
        }

        Ok(Self {
            user_id,
            product_id,
        })
    }
}
