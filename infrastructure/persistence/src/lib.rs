pub mod store;
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
