pub mod path_resolver;
pub mod working_directory_guard;
