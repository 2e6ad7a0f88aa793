pub mod inspect_config;
pub mod list_clouds;
pub mod resolve_cloud;
