pub const SECONDS_PER_MINUTE: u32 = 60;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const MILLIMETRES_IN_METRE: u32 = 1_000;
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;
/// Watts delivered by one BTU per hour of capacity.
pub const WATTS_PER_BTU_PER_HOUR: f64 = 0.29307107;

pub fn btu_per_hour_to_watts(btu_per_hour: f64) -> f64 {
    btu_per_hour * WATTS_PER_BTU_PER_HOUR
}

pub fn millimetres_to_metres(millimetres: f64) -> f64 {
    millimetres / MILLIMETRES_IN_METRE as f64
}
