#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.invalid_name")]
    InvalidName,
    #[error("item.invalid_price")]
    InvalidPrice,
    #[error("item.invalid_page")]
    InvalidPage,
    #[error("item.not_found")]
    NotFound,
    #[error("item.not_modified")]
    NotModified,
    #[error("item.delete_via_patch")]
    DeleteViaPatch,
    #[error("item.invalid_field: {0}")]
    InvalidField(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
