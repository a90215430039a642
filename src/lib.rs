pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
