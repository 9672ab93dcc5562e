pub mod classification;
pub mod common;
pub mod enrichment;
pub mod recognition;
