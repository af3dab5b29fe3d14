//! Catalog items and packing units.

use nalgebra::Vector3;

use crate::fragility::Fragility;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Product category, used only for downstream display coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Category {
    Automotive,
    Electronics,
    Machinery,
    Medical,
    Energy,
    Infrastructure,
    Meat,
    Dairy,
    Produce,
    Processed,
    Frozen,
    Grain,
    Hazardous,
    #[default]
    General,
}

impl Category {
    /// Hex color used by rendering surfaces. Placement logic never reads
    /// this.
    pub fn display_color(self) -> &'static str {
        match self {
            Category::Automotive => "#3B82F6",
            Category::Electronics => "#8B5CF6",
            Category::Machinery => "#6366F1",
            Category::Medical => "#EC4899",
            Category::Energy => "#F59E0B",
            Category::Infrastructure => "#6B7280",
            Category::Meat => "#EF4444",
            Category::Dairy => "#10B981",
            Category::Produce => "#84CC16",
            Category::Processed => "#F97316",
            Category::Frozen => "#06B6D4",
            Category::Grain => "#D97706",
            Category::Hazardous => "#DC2626",
            Category::General => "#9CA3AF",
        }
    }
}

/// Temperature requirement of a catalog item.
///
/// Consulted by post-plan verification, not by placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TemperatureRequirement {
    #[default]
    Ambient,
    Refrigerated,
    Frozen,
    Hot,
}

/// A catalog product that can be loaded into a cargo volume.
///
/// Dimensions are in centimetres: width spans the lateral axis, height the
/// vertical axis, depth the advance (depth-of-travel) axis. Weight is in
/// kilograms.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogItem {
    /// Unique identifier.
    id: String,

    /// Human-readable name, used in loading instructions.
    name: String,

    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,

    /// Weight of one unit.
    weight: f64,

    /// Fragility level.
    fragility: Fragility,

    /// Whether other items may rest on top of this one.
    stackable: bool,

    /// Explicit maximum stack height. Values of 1 or less defer to the
    /// fragility-derived default.
    max_stack_height: Option<u32>,

    /// Display category.
    category: Category,

    /// Temperature requirement.
    temperature: TemperatureRequirement,

    /// Number of physical units to place.
    quantity: usize,
}

impl CatalogItem {
    /// Creates a new item with the given id, dimensions and weight.
    ///
    /// The name defaults to the id; quantity defaults to 1.
    pub fn new(id: impl Into<String>, width: f64, height: f64, depth: f64, weight: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            dimensions: Vector3::new(width, height, depth),
            weight,
            fragility: Fragility::default(),
            stackable: true,
            max_stack_height: None,
            category: Category::default(),
            temperature: TemperatureRequirement::default(),
            quantity: 1,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the fragility level.
    pub fn with_fragility(mut self, fragility: Fragility) -> Self {
        self.fragility = fragility;
        self
    }

    /// Sets whether items can be stacked on top.
    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    /// Sets the explicit maximum stack height.
    pub fn with_max_stack_height(mut self, levels: u32) -> Self {
        self.max_stack_height = Some(levels);
        self
    }

    /// Sets the display category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the temperature requirement.
    pub fn with_temperature(mut self, temperature: TemperatureRequirement) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the quantity to place.
    pub fn with_quantity(mut self, n: usize) -> Self {
        self.quantity = n;
        self
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the lateral extent.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the vertical extent.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the advance extent.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the weight of one unit.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the fragility level.
    pub fn fragility(&self) -> Fragility {
        self.fragility
    }

    /// Returns whether items can rest on top of this one.
    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Returns the display category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the temperature requirement.
    pub fn temperature(&self) -> TemperatureRequirement {
        self.temperature
    }

    /// Returns the quantity to place.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Returns the footprint volume of one unit.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Effective maximum stack height: the explicit override when it is
    /// greater than 1, otherwise the fragility-derived default.
    pub fn effective_max_stack_height(&self) -> u32 {
        match self.max_stack_height {
            Some(levels) if levels > 1 => levels,
            _ => self.fragility.default_stack_height(),
        }
    }

    /// Validates the item, rejecting degenerate inputs before they reach
    /// the engine.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x <= 0.0 || self.dimensions.y <= 0.0 || self.dimensions.z <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.weight <= 0.0 {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' must be positive",
                self.id
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidItem(format!(
                "Quantity for '{}' must be at least 1",
                self.id
            )));
        }

        Ok(())
    }
}

/// One physical instance of a catalog item to place.
///
/// Items with quantity > 1 expand into one unit per copy; each unit is
/// placed independently.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingUnit {
    /// The source catalog item.
    pub item: CatalogItem,
    /// Instance ordinal within the item's quantity (0-based).
    pub instance: usize,
}

impl PackingUnit {
    /// Creates a unit for one instance of an item.
    pub fn new(item: CatalogItem, instance: usize) -> Self {
        Self { item, instance }
    }

    /// Expands catalog items into individual units by quantity.
    pub fn expand(items: &[CatalogItem]) -> Vec<PackingUnit> {
        let mut units = Vec::new();
        for item in items {
            for instance in 0..item.quantity() {
                units.push(PackingUnit::new(item.clone(), instance));
            }
        }
        units
    }

    /// Unique id of this unit, `"{item id}-{instance}"`.
    pub fn unit_id(&self) -> String {
        format!("{}-{}", self.item.id(), self.instance)
    }
}
