pub mod credentials;
pub mod webdav_auth;
