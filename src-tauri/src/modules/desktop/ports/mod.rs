// Desktop Ports Layer

pub mod desktop_port;

pub use desktop_port::*;
