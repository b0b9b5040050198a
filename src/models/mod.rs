//! Database models bridging the Diesel schema and the domain layer.

pub mod auth;
pub mod character;
pub mod config;
pub mod episode;
pub mod notification;
pub mod season;
pub mod user;
