use serde::{Deserialize, Serialize};
use std::fmt;

/// Rated operating voltage of a piece of equipment.
///
/// Catalog entries carry either a plain number (`220`) or a free-form label
/// such as `"Bivolt"` or `"220V"`, so both shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VoltageRating {
    Volts(f64),
    Label(String),
}

impl VoltageRating {
    /// Numeric voltage, if the rating carries one.
    pub fn nominal_volts(&self) -> Option<f64> {
        match self {
            VoltageRating::Volts(v) => Some(*v),
            VoltageRating::Label(label) => {
                let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
                digits.parse::<f64>().ok()
            }
        }
    }
}

impl fmt::Display for VoltageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoltageRating::Volts(v) => write!(f, "{}", v),
            VoltageRating::Label(label) => f.write_str(label),
        }
    }
}

impl From<f64> for VoltageRating {
    fn from(v: f64) -> Self {
        VoltageRating::Volts(v)
    }
}

impl From<&str> for VoltageRating {
    fn from(label: &str) -> Self {
        VoltageRating::Label(label.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    Lighting,
    Sound,
    Video,
    Effects,
    Structure,
    Power,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

/// Catalog entry for a piece of electrical equipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub category: EquipmentCategory,
    /// Rated active power (W)
    pub watts: f64,
    pub voltage: VoltageRating,
    /// Derived from watts, voltage and power factor; display only
    #[serde(default)]
    pub amperes: f64,
    #[serde(default)]
    pub power_factor: Option<f64>,
    #[serde(default)]
    pub quantity_owned: u32,
    #[serde(default)]
    pub status: EquipmentStatus,
}

impl Equipment {
    /// Power factor used in every calculation.
    ///
    /// Missing, zero, negative and NaN values all fall back to 1 so that no
    /// division downstream can blow up.
    pub fn effective_power_factor(&self) -> f64 {
        match self.power_factor {
            Some(pf) if pf > 0.0 => pf,
            _ => 1.0,
        }
    }

    /// Copy with `amperes` recomputed from the rated values.
    pub fn with_recomputed_amperes(&self) -> Self {
        let amperes = match self.voltage.nominal_volts() {
            Some(volts) if volts > 0.0 => self.watts / (volts * self.effective_power_factor()),
            _ => 0.0,
        };
        Self {
            amperes,
            ..self.clone()
        }
    }
}

/// One line of a circuit: an equipment snapshot and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationItem {
    pub equipment_id: String,
    pub quantity: u32,
    pub equipment: Equipment,
}

impl CalculationItem {
    pub fn new(equipment: Equipment, quantity: u32) -> Self {
        Self {
            equipment_id: equipment.id.clone(),
            quantity,
            equipment,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}
