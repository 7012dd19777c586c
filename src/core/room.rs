use crate::core::common::{ensure_positive, ValidationError};
use crate::core::heat_sources::HeatSource;
use crate::core::material_properties::Material;
use crate::core::thermal_balance::{
    calculate_thermal_balance, OpeningsExceedEnvelopeError, ThermalBalance,
};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Internal dimensions of a rectangular room, in m.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoomDimensions {
    width: f64,
    height: f64,
    depth: f64,
}

impl RoomDimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            width: ensure_positive("room width", width)?,
            height: ensure_positive("room height", height)?,
            depth: ensure_positive("room depth", depth)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Total area of the six faces of the room, in m2
    pub fn envelope_area(&self) -> f64 {
        2. * (self.width * self.height + self.width * self.depth + self.height * self.depth)
    }

    /// Volume of air enclosed by the room, in m3
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

/// One layer of the wall cross-section. Layers act in series over the whole opaque area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallLayer<'a> {
    material: &'a Material,
    thickness: f64,
}

impl<'a> WallLayer<'a> {
    /// Arguments:
    /// * `material` - material the layer is made of
    /// * `thickness` - thickness of the layer, in m
    pub fn new(material: &'a Material, thickness: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            material,
            thickness: ensure_positive("wall layer thickness", thickness)?,
        })
    }

    pub fn material(&self) -> &'a Material {
        self.material
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OpeningKind {
    Door,
    Window,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Opening<'a> {
    kind: OpeningKind,
    width: f64,
    height: f64,
    material: &'a Material,
}

impl<'a> Opening<'a> {
    /// Arguments:
    /// * `kind` - door or window
    /// * `width` - width of the opening, in m
    /// * `height` - height of the opening, in m
    /// * `material` - material filling the opening
    pub fn new(
        kind: OpeningKind,
        width: f64,
        height: f64,
        material: &'a Material,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            kind,
            width: ensure_positive("opening width", width)?,
            height: ensure_positive("opening height", height)?,
            material,
        })
    }

    pub fn kind(&self) -> OpeningKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn material(&self) -> &'a Material {
        self.material
    }

    /// Area of the opening, in m2
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Everything needed for one thermal balance calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct Room<'a> {
    pub dimensions: RoomDimensions,
    pub wall_layers: Vec<WallLayer<'a>>,
    pub openings: Vec<Opening<'a>>,
    pub heat_sources: Vec<HeatSource>,
    /// in deg C
    pub exterior_temperature: f64,
}

impl Room<'_> {
    pub fn thermal_balance(&self) -> Result<ThermalBalance, OpeningsExceedEnvelopeError> {
        calculate_thermal_balance(
            &self.wall_layers,
            &self.openings,
            &self.heat_sources,
            self.exterior_temperature,
            &self.dimensions,
        )
    }
}
