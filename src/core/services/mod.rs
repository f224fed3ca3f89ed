pub mod config_merger;
pub mod topology_service;
pub mod value_encoder;
pub mod variable_export;
pub mod variable_flattener;
