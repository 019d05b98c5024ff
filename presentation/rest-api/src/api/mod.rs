pub mod error;
pub mod health {
    pub mod routes;
}
pub mod review {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod tags;
