pub mod models;
pub mod repositories;
pub mod sqlite_repository;
