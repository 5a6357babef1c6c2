use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{CalculationItem, Equipment, VoltageRating};
use crate::electrical::voltage::is_compatible;
use crate::error::{DistributionError, Result};

/// A named circuit ("port") fed by a single breaker.
///
/// A port never stores its own load; every total is recomputed from `items`
/// against the system voltage supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Port {
    pub id: String,
    #[validate(length(min = 1, message = "circuit name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 5, message = "abbreviation must be 1 to 5 characters"))]
    pub abbreviation: String,
    #[serde(default)]
    pub color: String,
    #[validate(range(exclusive_min = 0.0, message = "breaker rating must be positive"))]
    pub breaker_amps: f64,
    #[serde(default)]
    pub items: Vec<CalculationItem>,
}

impl Port {
    pub fn new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        color: impl Into<String>,
        breaker_amps: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            abbreviation: abbreviation.into(),
            color: color.into(),
            breaker_amps,
            items: Vec::new(),
        }
    }

    pub fn quantity_of(&self, equipment_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.equipment_id == equipment_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    /// Copy with the equipment's line set to `quantity`; 0 removes the line.
    pub fn with_item_quantity(&self, equipment: &Equipment, quantity: u32) -> Self {
        let mut items = self.items.clone();
        match items.iter_mut().find(|item| item.equipment_id == equipment.id) {
            Some(item) => item.quantity = quantity,
            None => items.push(CalculationItem::new(equipment.clone(), quantity)),
        }
        Self {
            items,
            ..self.clone()
        }
        .pruned()
    }

    /// Adds `quantity` units after checking the equipment against the system voltage.
    pub fn add_equipment(
        &self,
        equipment: &Equipment,
        quantity: u32,
        system_voltage: &VoltageRating,
    ) -> Result<Self> {
        if !is_compatible(system_voltage, &equipment.voltage) {
            tracing::warn!(
                port = %self.id,
                equipment = %equipment.id,
                system_voltage = %system_voltage,
                equipment_voltage = %equipment.voltage,
                "rejected incompatible equipment"
            );
            return Err(DistributionError::IncompatibleVoltage {
                system: system_voltage.to_string(),
                equipment: equipment.voltage.to_string(),
            });
        }
        let current = self.quantity_of(&equipment.id);
        Ok(self.with_item_quantity(equipment, current.saturating_add(quantity)))
    }

    /// Copy without zero-quantity lines
    pub fn pruned(self) -> Self {
        Self {
            items: self.items.into_iter().filter(|item| !item.is_empty()).collect(),
            ..self
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::equipment::fixtures::equipment;

    /// Port drawing `amps` at 100 V with a single unity-pf item.
    pub fn port_with_amps(id: &str, amps: f64) -> Port {
        let eq = equipment(&format!("{}-eq", id), amps * 100.0, 100.0, None);
        Port {
            id: id.to_string(),
            name: format!("Circuit {}", id),
            abbreviation: "C".to_string(),
            color: "blue".to_string(),
            breaker_amps: 32.0,
            items: vec![CalculationItem::new(eq, 1)],
        }
    }
}
