use crate::core::common::{ensure_positive, UnknownCatalogKeyError, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

// This module contains the conductive properties of construction materials, and the fixed
// catalog of materials that wall layers and openings can be made from.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    name: &'static str,
    conductivity: f64, // W/(m.K)
    description: &'static str,
}

impl Material {
    /// Arguments:
    /// * `name` - display name of the material
    /// * `conductivity` - thermal conductivity, in W/(m.K)
    /// * `description` - free text shown alongside the name when listing materials
    pub fn new(
        name: &'static str,
        conductivity: f64,
        description: &'static str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name,
            conductivity: ensure_positive("thermal conductivity", conductivity)?,
            description,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn conductivity(&self) -> f64 {
        self.conductivity
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Return the thermal resistance of a slab of this material, in K/W
    ///
    /// Arguments:
    /// * `thickness` - thickness of the slab, in m
    /// * `area` - area of the slab face through which heat flows, in m2
    pub fn slab_resistance(&self, thickness: f64, area: f64) -> f64 {
        thickness / (self.conductivity * area)
    }
}

#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumIter, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MaterialKey {
    Concrete,
    Brick,
    Wood,
    Styrofoam,
    SingleGlass,
    DoubleGlass,
    Pvc,
    Masonry,
    Drywall,
    Ceramic,
}

const CONCRETE: Material = Material {
    name: "Concrete",
    conductivity: 1.75,
    description: "Normal concrete",
};
const BRICK: Material = Material {
    name: "Brick",
    conductivity: 0.72,
    description: "Ceramic brick",
};
const WOOD: Material = Material {
    name: "Wood",
    conductivity: 0.15,
    description: "Solid wood",
};
const STYROFOAM: Material = Material {
    name: "Styrofoam",
    conductivity: 0.04,
    description: "EPS - expanded polystyrene",
};
const SINGLE_GLASS: Material = Material {
    name: "Single Glass",
    conductivity: 1.0,
    description: "Ordinary 6mm glass",
};
const DOUBLE_GLASS: Material = Material {
    name: "Double Glass",
    conductivity: 0.32,
    description: "Double glazing with air gap",
};
const PVC: Material = Material {
    name: "PVC",
    conductivity: 0.20,
    description: "Rigid PVC",
};
const MASONRY: Material = Material {
    name: "Masonry",
    conductivity: 0.90,
    description: "Brick masonry",
};
const DRYWALL: Material = Material {
    name: "Drywall",
    conductivity: 0.35,
    description: "Plasterboard",
};
const CERAMIC: Material = Material {
    name: "Ceramic",
    conductivity: 1.3,
    description: "Ceramic tile",
};

impl MaterialKey {
    pub fn material(&self) -> &'static Material {
        match self {
            MaterialKey::Concrete => &CONCRETE,
            MaterialKey::Brick => &BRICK,
            MaterialKey::Wood => &WOOD,
            MaterialKey::Styrofoam => &STYROFOAM,
            MaterialKey::SingleGlass => &SINGLE_GLASS,
            MaterialKey::DoubleGlass => &DOUBLE_GLASS,
            MaterialKey::Pvc => &PVC,
            MaterialKey::Masonry => &MASONRY,
            MaterialKey::Drywall => &DRYWALL,
            MaterialKey::Ceramic => &CERAMIC,
        }
    }
}

/// Look up a catalog material by its key, e.g. "double_glass".
pub fn material_for_key(key: &str) -> Result<&'static Material, UnknownCatalogKeyError> {
    MaterialKey::from_str(key)
        .map(|material_key| material_key.material())
        .map_err(|_| UnknownCatalogKeyError::new("material", key))
}

/// All catalog materials, in catalog order.
pub fn materials() -> impl Iterator<Item = (MaterialKey, &'static Material)> {
    MaterialKey::iter().map(|key| (key, key.material()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    pub fn material() -> Material {
        Material::new("Test board", 0.5, "A board used for testing").unwrap()
    }

    #[rstest]
    pub fn should_have_correct_conductivity(material: Material) {
        assert_eq!(material.conductivity(), 0.5, "incorrect conductivity returned");
        assert_eq!(material.name(), "Test board");
        assert_eq!(material.description(), "A board used for testing");
    }

    #[rstest]
    #[case(0.)]
    #[case(-0.2)]
    pub fn should_reject_non_positive_conductivity(#[case] conductivity: f64) {
        assert!(Material::new("Bad", conductivity, "").is_err());
    }

    #[rstest]
    pub fn should_calculate_slab_resistance(material: Material) {
        // 0.1 / (0.5 * 4.0)
        assert_relative_eq!(material.slab_resistance(0.1, 4.0), 0.05);
    }

    #[rstest]
    #[case("concrete", 1.75)]
    #[case("brick", 0.72)]
    #[case("wood", 0.15)]
    #[case("styrofoam", 0.04)]
    #[case("single_glass", 1.0)]
    #[case("double_glass", 0.32)]
    #[case("pvc", 0.20)]
    #[case("masonry", 0.90)]
    #[case("drywall", 0.35)]
    #[case("ceramic", 1.3)]
    pub fn should_look_up_catalog_material(#[case] key: &str, #[case] conductivity: f64) {
        assert_eq!(material_for_key(key).unwrap().conductivity(), conductivity);
    }

    #[rstest]
    pub fn should_fail_lookup_of_unknown_material() {
        let error = material_for_key("granite").unwrap_err();
        assert_eq!(error.to_string(), "'granite' is not a known material key");
    }

    #[rstest]
    pub fn should_enumerate_materials_in_catalog_order() {
        let keys = materials()
            .map(|(key, _)| key.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "concrete",
                "brick",
                "wood",
                "styrofoam",
                "single_glass",
                "double_glass",
                "pvc",
                "masonry",
                "drywall",
                "ceramic"
            ]
        );
    }

    #[rstest]
    pub fn should_have_only_positive_catalog_conductivities() {
        for (key, material) in materials() {
            assert!(
                material.conductivity() > 0.,
                "{key} has a non-positive conductivity"
            );
        }
    }

    #[rstest]
    pub fn should_deserialize_material_key_from_snake_case() {
        let key: MaterialKey = serde_json::from_str("\"single_glass\"").unwrap();
        assert_eq!(key, MaterialKey::SingleGlass);
    }
}
