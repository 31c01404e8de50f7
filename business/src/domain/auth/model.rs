use crate::domain::user::model::UserProfile;

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub user: UserProfile,
}
