pub mod send_request;
