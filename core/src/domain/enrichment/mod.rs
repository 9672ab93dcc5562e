pub mod entities;
pub mod ports;
pub mod prompt;
pub mod services;
