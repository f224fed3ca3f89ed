pub mod gate_subnet_source;
pub mod sample_subnet_source;
