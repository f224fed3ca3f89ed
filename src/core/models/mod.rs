pub mod app_configs;
pub mod app_name;
pub mod merged_config;
pub mod subnet;
pub mod variable_record;
