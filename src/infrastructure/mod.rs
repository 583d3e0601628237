// Infrastructure layer - Configuration, sample data and HTTP adapters
pub mod config;
pub mod http_response;
pub mod sample_data;
pub mod view_mapper;
