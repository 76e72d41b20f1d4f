#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.invalid_page")]
    InvalidPage,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
