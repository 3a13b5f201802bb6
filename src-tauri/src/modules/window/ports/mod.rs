// Window Ports Layer

pub mod window_port;

pub use window_port::*;
