pub mod agent;
pub mod auth;
pub mod config;
pub mod cpf;
pub mod error;
pub mod prelude;
pub mod principal;
pub mod seed;
pub mod store;
pub mod user;
pub mod validate;
pub mod web;
