pub mod a001_gas_meter_reading;
pub mod common;
