pub mod api;
pub mod db;
pub mod generator;
pub mod models;
pub mod prompts;
pub mod service;
