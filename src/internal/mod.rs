pub mod auth;
pub mod config;
pub mod error;
pub mod path;
pub mod resource;
pub mod session;
pub mod webdav;
