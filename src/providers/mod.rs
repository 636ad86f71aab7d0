
pub mod api_client;
pub mod edge_client;

pub mod downloader;
pub mod streaming_downloader;

pub mod checksum;
pub mod image_resolver;
pub mod progress;
