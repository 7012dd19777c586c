pub mod common;
pub mod geometry;
pub mod heat_sources;
pub mod material_properties;
pub mod room;
pub mod thermal_balance;
pub mod units;
