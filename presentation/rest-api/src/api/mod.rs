pub mod cart {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod error;
pub mod health {
    pub mod routes;
}
pub mod item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
