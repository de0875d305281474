use serde::{Deserialize, Serialize};
use std::fmt;

/// Documents every submission must include, in checklist order.
pub const BASE_REQUIREMENTS: [&str; 3] = [
    "Environmental Impact Assessment",
    "Carbon Footprint Analysis",
    "Sustainability Plan Document",
];

/// Known green-investment project types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "Solar Energy")]
    SolarEnergy,
    #[serde(rename = "Wind Energy")]
    WindEnergy,
    #[serde(rename = "Green Building")]
    GreenBuilding,
    #[serde(rename = "Electric Vehicles")]
    ElectricVehicles,
    #[serde(rename = "Waste Management")]
    WasteManagement,
}

impl ProjectCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::SolarEnergy,
            Self::WindEnergy,
            Self::GreenBuilding,
            Self::ElectricVehicles,
            Self::WasteManagement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SolarEnergy => "Solar Energy",
            Self::WindEnergy => "Wind Energy",
            Self::GreenBuilding => "Green Building",
            Self::ElectricVehicles => "Electric Vehicles",
            Self::WasteManagement => "Waste Management",
        }
    }

    /// Exact, case-sensitive match against the category labels.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == raw)
    }

    pub const fn additional_documents(self) -> &'static [&'static str] {
        match self {
            Self::SolarEnergy => &["Solar Panel Specifications", "Energy Output Projections"],
            Self::WindEnergy => &["Wind Turbine Certifications", "Environmental Clearance"],
            Self::GreenBuilding => &["LEED/BREEAM Certification", "Energy Efficiency Report"],
            Self::ElectricVehicles => &["EV Fleet Details", "Charging Infrastructure Plan"],
            Self::WasteManagement => &[
                "Waste Reduction Metrics",
                "Recycling Process Documentation",
            ],
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checklist for a project category. Unrecognized categories get the base set only.
pub fn required_documents(project_category: &str) -> Vec<&'static str> {
    let additional: &[&'static str] = match ProjectCategory::parse(project_category) {
        Some(category) => category.additional_documents(),
        None => &[],
    };

    BASE_REQUIREMENTS
        .iter()
        .chain(additional.iter())
        .copied()
        .collect()
}
