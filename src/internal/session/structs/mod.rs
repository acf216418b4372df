pub mod webdav_session;
