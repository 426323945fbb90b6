pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;
pub mod theme;
pub mod view;
