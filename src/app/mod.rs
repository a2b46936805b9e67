pub mod harvest_use_case;
pub mod ports;
