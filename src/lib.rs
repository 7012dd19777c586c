mod compare_floats;
pub mod core;
pub mod errors;
pub mod input;
pub mod output;

#[cfg(test)]
mod tests;

pub use crate::core::thermal_balance::{estimate_interior_temperature, ThermalBalance};
use crate::core::geometry::{room_geometry, RoomGeometry};
use crate::core::heat_sources::heat_sources;
use crate::core::material_properties::materials;
use crate::errors::{OutputError, RoomError};
use crate::input::{ingest_for_processing, Input};
use crate::output::Output;
use bitflags::bitflags;
use csv::WriterBuilder;
use serde_json::json;
use std::io::{Read, Write};
use tracing::{debug, instrument};

bitflags! {
    /// Optional extras written alongside the results file.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ProjectFlags: u8 {
        /// write the room box and opening polygons as JSON
        const GEOMETRY = 0b1;
        /// write a text listing of the material and heat source catalogs
        const CATALOG = 0b10;
    }
}

/// What a single run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomResults {
    pub input: Input,
    pub thermal_balance: ThermalBalance,
    pub geometry: Option<RoomGeometry>,
}

impl RoomResults {
    /// in deg C
    pub fn interior_temperature(&self) -> f64 {
        self.thermal_balance.interior_temperature
    }
}

#[instrument(skip_all)]
pub fn run_project(
    input: impl Read,
    output: impl Output,
    flags: &ProjectFlags,
) -> Result<RoomResults, RoomError> {
    let input = ingest_for_processing(input)?;
    let room = input.room()?;
    debug!(
        wall_layers = room.wall_layers.len(),
        openings = room.openings.len(),
        heat_sources = room.heat_sources.len(),
        "Built room from input"
    );
    for source in &room.heat_sources {
        debug!(
            kind = %source.kind(),
            quantity = source.quantity(),
            switched_on = source.is_on(),
            watts = source.net_thermal_contribution(),
            "Heat source"
        );
    }

    let thermal_balance = room.thermal_balance()?;

    let geometry = flags
        .contains(ProjectFlags::GEOMETRY)
        .then(|| room_geometry(&room.dimensions, &room.openings));

    if !output.is_noop() {
        write_results_file(&output, &thermal_balance).map_err(output_error)?;
        if let Some(geometry) = &geometry {
            write_geometry_file(&output, &thermal_balance, geometry).map_err(output_error)?;
        }
        if flags.contains(ProjectFlags::CATALOG) {
            write_catalog(output.writer_for_location_key("catalog", "txt").map_err(output_error)?)
                .map_err(output_error)?;
        }
    }

    Ok(RoomResults {
        input,
        thermal_balance,
        geometry,
    })
}

fn output_error(error: anyhow::Error) -> RoomError {
    RoomError::ErrorInOutput(OutputError::new(error))
}

const RESULTS_COLUMNS: [(&str, &str); 14] = [
    ("Exterior temp", "[deg C]"),
    ("Interior temp", "[deg C]"),
    ("Temperature change", "[K]"),
    ("Unclamped temperature change", "[K]"),
    ("Net heat load", "[W]"),
    ("Envelope area", "[m2]"),
    ("Openings area", "[m2]"),
    ("Wall area", "[m2]"),
    ("Volume", "[m3]"),
    ("Wall resistance", "[K/W]"),
    ("Openings resistance", "[K/W]"),
    ("Surface resistance", "[K/W]"),
    ("Total resistance", "[K/W]"),
    ("Clamped", "[bool]"),
];

fn write_results_file(
    output: &impl Output,
    thermal_balance: &ThermalBalance,
) -> anyhow::Result<()> {
    debug!("writing out results");
    let writer = output.writer_for_location_key("results", "csv")?;
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    writer.write_record(RESULTS_COLUMNS.iter().map(|(heading, _)| heading))?;
    writer.write_record(RESULTS_COLUMNS.iter().map(|(_, unit)| unit))?;

    let ThermalBalance {
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
        interior_temperature,
        is_clamped,
    } = *thermal_balance;
    let mut row = [
        exterior_temperature,
        interior_temperature,
        temperature_change,
        unclamped_temperature_change,
        net_heat_load,
        envelope_area,
        openings_area,
        wall_area,
        volume,
        wall_resistance,
        openings_resistance,
        surface_resistance,
        total_resistance,
    ]
    .iter()
    .map(|value| value.to_string())
    .collect::<Vec<_>>();
    row.push(is_clamped.to_string());
    writer.write_record(&row)?;

    debug!("flushing out CSV");
    writer.flush()?;

    Ok(())
}

fn write_geometry_file(
    output: &impl Output,
    thermal_balance: &ThermalBalance,
    geometry: &RoomGeometry,
) -> anyhow::Result<()> {
    let mut writer = output.writer_for_location_key("geometry", "json")?;
    serde_json::to_writer_pretty(
        &mut writer,
        &json!({
            "exterior_temperature": thermal_balance.exterior_temperature,
            "interior_temperature": thermal_balance.interior_temperature,
            "geometry": geometry,
        }),
    )?;
    writer.flush()?;

    Ok(())
}

/// Write the material and heat source catalogs as plain text tables.
pub fn write_catalog(mut writer: impl Write) -> anyhow::Result<()> {
    let rule = "-".repeat(60);

    writeln!(writer, "Available materials:")?;
    writeln!(writer, "{rule}")?;
    writeln!(
        writer,
        "{:<15} {:<20} {:<15} Description",
        "Code", "Material", "Conductivity"
    )?;
    writeln!(writer, "{rule}")?;
    for (key, material) in materials() {
        writeln!(
            writer,
            "{:<15} {:<20} {:<15.3} {}",
            key.to_string(),
            material.name(),
            material.conductivity(),
            material.description()
        )?;
    }
    writeln!(writer, "{rule}")?;

    writeln!(writer)?;
    writeln!(writer, "Heat gains and losses:")?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "{:<20} Power (W) / BTU", "Source")?;
    writeln!(writer, "{rule}")?;
    for (kind, nominal_power) in heat_sources() {
        match nominal_power {
            Some(power) => writeln!(writer, "{:<20} {power} W", kind.to_string())?,
            None => writeln!(writer, "{:<20} Supplied by user", kind.to_string())?,
        }
    }
    writeln!(writer, "{rule}")?;
    writer.flush()?;

    Ok(())
}
