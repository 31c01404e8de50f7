use poem_openapi::Object;

use business::domain::favorite::model::Favorite;

/// Identifies a (user, product) pair; used to add and to remove a favorite.
#[derive(Debug, Clone, Object)]
pub struct FavoriteRequest {
    pub user_id: u64,
    pub product_id: u64,
}

#[derive(Debug, Clone, Object)]
pub struct FavoriteResponse {
    pub user_id: u64,
    pub product_id: u64,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            user_id: favorite.user_id,
            product_id: favorite.product_id,
        }
    }
}
