pub mod json_file_source;
pub mod runway_dir_source;
