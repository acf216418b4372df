pub mod impl_multi_status;
pub mod multi_status;
