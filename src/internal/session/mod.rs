mod impl_directory;
mod impl_listing;
mod impl_transfer;
pub mod structs;

pub use impl_listing::MAX_REDIRECT_HOPS;
pub use impl_transfer::DOWNLOAD_CHUNK_SIZE;
