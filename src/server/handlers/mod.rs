pub mod auth;
pub mod places;
pub mod restaurants;
pub mod routes;
