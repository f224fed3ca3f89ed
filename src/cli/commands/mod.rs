pub mod subnets;
pub mod write_variables;
