pub mod check_port;
