use crate::core::common::ValidationError;
use crate::core::heat_sources::{HeatSource, HeatSourceKind};
use crate::core::material_properties::MaterialKey;
use crate::core::room::{Opening, OpeningKind, Room, RoomDimensions, WallLayer};
use crate::core::units::{millimetres_to_metres, ABSOLUTE_ZERO_CELSIUS};
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::io::{BufReader, Read};

pub fn ingest_for_processing(json: impl Read) -> Result<Input, anyhow::Error> {
    let reader = BufReader::new(json);

    let input: Input = serde_json::from_reader(reader)?;
    input
        .validate()
        .map_err(|errors| anyhow!("Input failed validation: {errors}"))?;

    Ok(input)
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Input {
    #[validate]
    pub dimensions: DimensionsInput,
    /// in deg C
    pub exterior_temperature: f64,
    #[serde(default)]
    #[validate]
    pub wall_layers: Vec<WallLayerInput>,
    #[serde(default)]
    #[validate]
    pub openings: Vec<OpeningInput>,
    #[serde(default)]
    #[validate]
    pub heat_sources: Vec<HeatSourceInput>,
}

/// Internal dimensions of the room, in m
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct DimensionsInput {
    #[validate(exclusive_minimum = 0.0)]
    pub width: f64,
    #[validate(exclusive_minimum = 0.0)]
    pub height: f64,
    #[validate(exclusive_minimum = 0.0)]
    pub depth: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct WallLayerInput {
    pub material: MaterialKey,
    /// in m
    #[validate(exclusive_minimum = 0.0)]
    pub thickness: Option<f64>,
    /// in mm, as an alternative to `thickness`
    #[validate(exclusive_minimum = 0.0)]
    pub thickness_mm: Option<f64>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct OpeningInput {
    pub kind: OpeningKind,
    /// in m
    #[validate(exclusive_minimum = 0.0)]
    pub width: f64,
    /// in m
    #[validate(exclusive_minimum = 0.0)]
    pub height: f64,
    pub material: MaterialKey,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(deny_unknown_fields)]
pub struct HeatSourceInput {
    pub kind: HeatSourceKind,
    #[serde(default = "default_quantity")]
    #[validate(minimum = 1)]
    pub quantity: u32,
    /// heat emitted per source, in W; the catalog value is used when absent
    #[validate(minimum = 0.0)]
    pub power: Option<f64>,
    /// cooling capacity per air conditioner, in BTU/h
    #[validate(minimum = 0.0)]
    pub btu: Option<f64>,
    #[serde(default = "default_switched_on")]
    pub switched_on: bool,
}

fn default_quantity() -> u32 {
    1
}

fn default_switched_on() -> bool {
    true
}

impl Input {
    /// Resolve catalog keys and build the room the calculation runs on.
    pub fn room(&self) -> Result<Room<'static>, ValidationError> {
        let DimensionsInput {
            width,
            height,
            depth,
        } = self.dimensions;

        if !self.exterior_temperature.is_finite() {
            return Err(ValidationError::NonFinite {
                quantity: "exterior temperature",
                value: self.exterior_temperature,
            });
        }
        if self.exterior_temperature < ABSOLUTE_ZERO_CELSIUS {
            return Err(ValidationError::BelowAbsoluteZero {
                temperature: self.exterior_temperature,
            });
        }

        Ok(Room {
            dimensions: RoomDimensions::new(width, height, depth)?,
            wall_layers: self
                .wall_layers
                .iter()
                .map(WallLayerInput::wall_layer)
                .collect::<Result<_, _>>()?,
            openings: self
                .openings
                .iter()
                .map(OpeningInput::opening)
                .collect::<Result<_, _>>()?,
            heat_sources: self
                .heat_sources
                .iter()
                .map(HeatSourceInput::heat_source)
                .collect::<Result<_, _>>()?,
            exterior_temperature: self.exterior_temperature,
        })
    }
}

impl WallLayerInput {
    fn wall_layer(&self) -> Result<WallLayer<'static>, ValidationError> {
        let thickness = match (self.thickness, self.thickness_mm) {
            (Some(thickness), None) => thickness,
            (None, Some(thickness_mm)) => millimetres_to_metres(thickness_mm),
            _ => {
                return Err(ValidationError::AmbiguousThickness {
                    material: self.material.to_string(),
                })
            }
        };

        WallLayer::new(self.material.material(), thickness)
    }
}

impl OpeningInput {
    fn opening(&self) -> Result<Opening<'static>, ValidationError> {
        Opening::new(
            self.kind,
            self.width,
            self.height,
            self.material.material(),
        )
    }
}

impl HeatSourceInput {
    fn heat_source(&self) -> Result<HeatSource, ValidationError> {
        Ok(HeatSource::new(self.kind, self.quantity, self.power, self.btu)?
            .switched_on(self.switched_on))
    }
}
