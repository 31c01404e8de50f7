use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::Favorite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntity {
    pub user_id: u64,
    pub product_id: u64,
}

impl FavoriteEntity {
    pub fn into_domain(self) -> Result<Favorite, RepositoryError> {
        Favorite::new(self.user_id, self.product_id).map_err(RepositoryError::invalid_record)
    }

    pub fn matches(&self, favorite: &Favorite) -> bool {
        self.user_id == favorite.user_id && self.product_id == favorite.product_id
    }
}

impl From<&Favorite> for FavoriteEntity {
    fn from(favorite: &Favorite) -> Self {
        Self {
            user_id: favorite.user_id,
            product_id: favorite.product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_through_domain() {
        let entity = FavoriteEntity {
            user_id: 7,
            product_id: 2,
        };

        let favorite = entity.into_domain().unwrap();

        assert_eq!(FavoriteEntity::from(&favorite), entity);
        assert!(entity.matches(&favorite));
    }

    #[test]
    fn should_reject_record_with_zero_user() {
        let entity = FavoriteEntity {
            user_id: 0,
            product_id: 2,
        };

        assert!(matches!(
            entity.into_domain().unwrap_err(),
            RepositoryError::InvalidRecord(reason) if reason == "favorite.invalid_user_id"
        ));
    }
}
