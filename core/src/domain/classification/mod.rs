pub mod entities;
pub mod ports;
pub mod services;

/// Fixed spatial input size of the classifier.
pub const INPUT_WIDTH: u32 = 224;
pub const INPUT_HEIGHT: u32 = 224;
pub const INPUT_CHANNELS: usize = 3;
