pub mod item {
    pub mod repository;
}
pub mod cart {
    pub mod repository;
}
