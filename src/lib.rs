pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod model;
pub mod models;
pub mod pages;
pub mod routes;
pub mod utils;
