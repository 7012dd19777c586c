use crate::compare_floats::clamp_magnitude;
use crate::core::heat_sources::HeatSource;
use crate::core::room::{Opening, RoomDimensions, WallLayer};
use crate::core::units::SECONDS_PER_HOUR;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

// This module estimates the interior temperature of a single room after one hour, treating the
// room air as one lumped capacitance heated or cooled by the net load of its heat sources.

/// Nominal thickness assumed for every door or window, in m
pub const GAP_THICKNESS_OPENING: f64 = 0.02;
/// Combined convective and radiative surface coefficient, in W/(m2.K)
pub const COMBINED_FILM_COEFFICIENT: f64 = 15.0;
/// Volumetric heat capacity of room air, in J/(m3.K)
pub const AIR_VOLUMETRIC_HEAT_CAPACITY: f64 = 1200.;
/// Length of the simulated period, in s
pub const SIMULATION_DURATION: f64 = SECONDS_PER_HOUR as f64;
/// Largest change of temperature the estimate may report, in K
pub const MAX_TEMPERATURE_CHANGE: f64 = 30.;

#[derive(Debug, Error, PartialEq)]
#[error("openings area exceeds total envelope area ({openings_area} m2 of openings in an envelope of {envelope_area} m2)")]
pub struct OpeningsExceedEnvelopeError {
    openings_area: f64,
    envelope_area: f64,
}

/// Every intermediate quantity of one thermal balance calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThermalBalance {
    /// in m2
    pub envelope_area: f64,
    /// in m3
    pub volume: f64,
    /// in m2
    pub openings_area: f64,
    /// opaque envelope area left after openings, in m2
    pub wall_area: f64,
    /// in K/W
    pub wall_resistance: f64,
    /// in K/W
    pub openings_resistance: f64,
    /// in K/W
    pub surface_resistance: f64,
    /// in K/W
    pub total_resistance: f64,
    /// net heat added by all sources, in W
    pub net_heat_load: f64,
    /// in K
    pub unclamped_temperature_change: f64,
    /// in K
    pub temperature_change: f64,
    /// in deg C
    pub exterior_temperature: f64,
    /// in deg C
    pub interior_temperature: f64,
    pub is_clamped: bool,
}

/// Calculate the thermal balance of the room over one hour
///
/// The series resistance of the envelope is calculated and reported, but the temperature change
/// depends only on the net heat load, the air volume and its heat capacity.
///
/// Arguments:
/// * `wall_layers` - layers of the wall cross-section, applied over the opaque area
/// * `openings` - doors and windows in the envelope
/// * `heat_sources` - internal gains and active cooling
/// * `exterior_temperature` - in deg C
/// * `dimensions` - internal dimensions of the room
pub fn calculate_thermal_balance(
    wall_layers: &[WallLayer],
    openings: &[Opening],
    heat_sources: &[HeatSource],
    exterior_temperature: f64,
    dimensions: &RoomDimensions,
) -> Result<ThermalBalance, OpeningsExceedEnvelopeError> {
    let envelope_area = dimensions.envelope_area();
    let volume = dimensions.volume();

    let openings_area: f64 = openings.iter().map(Opening::area).sum();
    if openings_area >= envelope_area {
        return Err(OpeningsExceedEnvelopeError {
            openings_area,
            envelope_area,
        });
    }
    let wall_area = envelope_area - openings_area;

    // layers in series, each spread over the whole opaque area
    let wall_resistance: f64 = wall_layers
        .iter()
        .map(|layer| layer.material().slab_resistance(layer.thickness(), wall_area))
        .sum();

    // summed rather than combined in parallel
    let openings_resistance: f64 = openings
        .iter()
        .map(|opening| {
            opening
                .material()
                .slab_resistance(GAP_THICKNESS_OPENING, opening.area())
        })
        .sum();

    let surface_resistance = 1. / (COMBINED_FILM_COEFFICIENT * envelope_area);
    let total_resistance = wall_resistance + openings_resistance + surface_resistance;

    let net_heat_load: f64 = heat_sources
        .iter()
        .map(HeatSource::net_thermal_contribution)
        .sum();

    let unclamped_temperature_change =
        net_heat_load * SIMULATION_DURATION / (AIR_VOLUMETRIC_HEAT_CAPACITY * volume);
    let is_clamped = unclamped_temperature_change.abs() > MAX_TEMPERATURE_CHANGE;
    let temperature_change =
        clamp_magnitude(unclamped_temperature_change, MAX_TEMPERATURE_CHANGE);
    if is_clamped {
        warn!(
            unclamped_temperature_change,
            "Temperature change limited to {temperature_change} K"
        );
    }

    let balance = ThermalBalance {
        envelope_area,
        volume,
        openings_area,
        wall_area,
        wall_resistance,
        openings_resistance,
        surface_resistance,
        total_resistance,
        net_heat_load,
        unclamped_temperature_change,
        temperature_change,
        exterior_temperature,
        interior_temperature: exterior_temperature + temperature_change,
        is_clamped,
    };
    debug!(?balance, "Calculated thermal balance");

    Ok(balance)
}

/// Estimate the interior temperature of the room after one hour, in deg C
pub fn estimate_interior_temperature(
    wall_layers: &[WallLayer],
    openings: &[Opening],
    heat_sources: &[HeatSource],
    exterior_temperature: f64,
    dimensions: &RoomDimensions,
) -> Result<f64, OpeningsExceedEnvelopeError> {
    calculate_thermal_balance(
        wall_layers,
        openings,
        heat_sources,
        exterior_temperature,
        dimensions,
    )
    .map(|balance| balance.interior_temperature)
}
