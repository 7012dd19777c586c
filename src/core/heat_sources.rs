use crate::core::common::{ensure_non_negative, UnknownCatalogKeyError, ValidationError};
use crate::core::units::btu_per_hour_to_watts;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

// This module provides objects to represent the internal gains (people, appliances) and active
// cooling (air conditioners) that add heat to or remove heat from the room.

#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HeatSourceKind {
    Person,
    Computer,
    Lamp,
    AirConditioner,
    Printer,
    Refrigerator,
    Microwave,
}

impl HeatSourceKind {
    /// Nominal heat emitted by one source, in W. Air conditioners have no nominal value as their
    /// cooling capacity must be supplied.
    pub fn nominal_power(&self) -> Option<f64> {
        match self {
            HeatSourceKind::Person => Some(115.),
            HeatSourceKind::Computer => Some(250.),
            HeatSourceKind::Lamp => Some(70.),
            HeatSourceKind::AirConditioner => None,
            HeatSourceKind::Printer => Some(320.),
            HeatSourceKind::Refrigerator => Some(180.),
            HeatSourceKind::Microwave => Some(1500.),
        }
    }

    pub fn is_cooling(&self) -> bool {
        matches!(self, HeatSourceKind::AirConditioner)
    }
}

/// Look up a catalog heat source by its key, e.g. "air_conditioner".
pub fn heat_source_kind_for_key(key: &str) -> Result<HeatSourceKind, UnknownCatalogKeyError> {
    HeatSourceKind::from_str(key).map_err(|_| UnknownCatalogKeyError::new("heat source", key))
}

/// All catalog heat sources with their nominal power, in catalog order.
pub fn heat_sources() -> impl Iterator<Item = (HeatSourceKind, Option<f64>)> {
    HeatSourceKind::iter().map(|kind| (kind, kind.nominal_power()))
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum HeatOutput {
    /// heat emitted per source, in W
    Emitting { power: f64 },
    /// heat removed per source, in BTU/h
    Cooling { capacity: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatSource {
    kind: HeatSourceKind,
    quantity: u32,
    output: HeatOutput,
    switched_on: bool,
}

impl HeatSource {
    /// Construct a heat source
    ///
    /// Arguments:
    /// * `kind` - catalog entry this source is an instance of
    /// * `quantity` - number of identical sources, at least 1
    /// * `power` - heat emitted per source, in W; the catalog value is used when absent
    /// * `cooling_capacity` - heat removed per source, in BTU/h; required for air conditioners
    ///                        and not allowed for anything else
    pub fn new(
        kind: HeatSourceKind,
        quantity: u32,
        power: Option<f64>,
        cooling_capacity: Option<f64>,
    ) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity {
                source_kind: kind.to_string(),
            });
        }

        let output = match (kind.is_cooling(), power, cooling_capacity) {
            (true, Some(_), _) => return Err(ValidationError::UnexpectedPower),
            (true, None, Some(capacity)) => HeatOutput::Cooling {
                capacity: ensure_non_negative("cooling capacity", capacity)?,
            },
            (true, None, None) => {
                return Err(ValidationError::MissingCoolingCapacity {
                    source_kind: kind.to_string(),
                })
            }
            (false, _, Some(_)) => {
                return Err(ValidationError::UnexpectedCoolingCapacity {
                    source_kind: kind.to_string(),
                })
            }
            (false, power, None) => HeatOutput::Emitting {
                power: ensure_non_negative("power", power.or(kind.nominal_power()).unwrap_or(0.))?,
            },
        };

        Ok(Self {
            kind,
            quantity,
            output,
            switched_on: true,
        })
    }

    /// A source emitting its catalog nominal power.
    pub fn nominal(kind: HeatSourceKind, quantity: u32) -> Result<Self, ValidationError> {
        Self::new(kind, quantity, None, None)
    }

    pub fn air_conditioner(quantity: u32, cooling_capacity: f64) -> Result<Self, ValidationError> {
        Self::new(
            HeatSourceKind::AirConditioner,
            quantity,
            None,
            Some(cooling_capacity),
        )
    }

    /// Returns this source with its on/off state set. A source that is off contributes nothing.
    pub fn switched_on(self, switched_on: bool) -> Self {
        Self {
            switched_on,
            ..self
        }
    }

    pub fn kind(&self) -> HeatSourceKind {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_on(&self) -> bool {
        self.switched_on
    }

    /// Return the signed heat added to the room by all sources of this entry, in W.
    /// Cooling is negative.
    pub fn net_thermal_contribution(&self) -> f64 {
        if !self.switched_on {
            return 0.;
        }

        let quantity = self.quantity as f64;
        match self.output {
            HeatOutput::Emitting { power } => power * quantity,
            HeatOutput::Cooling { capacity } => -btu_per_hour_to_watts(capacity) * quantity,
        }
    }
}
