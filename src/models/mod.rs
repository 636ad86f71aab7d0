pub mod configuration;
pub mod download;
pub mod image;
