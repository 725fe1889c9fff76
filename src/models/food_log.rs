use serde::{Deserialize, Serialize};

use crate::constants::EGG_UNIT_GRAMS;
use crate::error::{MealError, Result};

/// One consumed food item.
///
/// `number` is a food code kept as text so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub number: String,

    /// Grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Weight includes the inedible part of the food.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_refuse: Option<bool>,
}

impl FoodEntry {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            weight: None,
            price: None,
            class: None,
            include_refuse: None,
        }
    }
}

/// Ordered log of consumed foods.
///
/// All `set_last_*` calls target the most recently appended entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry with no weight.
    pub fn append(&mut self, number: impl Into<String>) -> &mut Self {
        self.entries.push(FoodEntry::new(number));
        self
    }

    /// Set the weight (grams) of the last entry, overwriting any prior value.
    pub fn set_last_weight(&mut self, grams: f64) -> Result<&mut Self> {
        self.last_mut("weight")?.weight = Some(grams);
        Ok(self)
    }

    /// Set the weight of the last entry from a count of units of known weight.
    pub fn set_last_weight_by_unit_count(
        &mut self,
        count: f64,
        unit_gram_weight: f64,
    ) -> Result<&mut Self> {
        self.set_last_weight(count * unit_gram_weight)
    }

    /// Set the weight of the last entry as a number of whole eggs.
    pub fn set_last_weight_in_eggs(&mut self, count: f64) -> Result<&mut Self> {
        self.set_last_weight_by_unit_count(count, EGG_UNIT_GRAMS)
    }

    pub fn set_last_price(&mut self, price: f64) -> Result<&mut Self> {
        self.last_mut("price")?.price = Some(price);
        Ok(self)
    }

    /// Price the last entry by its weight. No-op if the entry has no weight yet.
    pub fn set_last_price_per_gram(&mut self, price_per_gram: f64) -> Result<&mut Self> {
        let entry = self.last_mut("price")?;
        match entry.weight {
            Some(weight) => entry.price = Some(price_per_gram * weight),
            None => tracing::debug!(
                number = %entry.number,
                "price per gram ignored: entry has no weight"
            ),
        }
        Ok(self)
    }

    pub fn set_last_class(&mut self, class: impl Into<String>) -> Result<&mut Self> {
        self.last_mut("class")?.class = Some(class.into());
        Ok(self)
    }

    pub fn set_last_include_refuse(&mut self, include_refuse: bool) -> Result<&mut Self> {
        self.last_mut("include_refuse")?.include_refuse = Some(include_refuse);
        Ok(self)
    }

    /// A new log with every weight and price multiplied by `rate`.
    ///
    /// Only `number`, `weight` and `price` are carried over.
    pub fn scaled(&self, rate: f64) -> FoodLog {
        let entries = self
            .entries
            .iter()
            .map(|e| FoodEntry {
                weight: e.weight.map(|w| w * rate),
                price: e.price.map(|p| p * rate),
                ..FoodEntry::new(e.number.clone())
            })
            .collect();
        FoodLog { entries }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn last_mut(&mut self, field: &'static str) -> Result<&mut FoodEntry> {
        self.entries
            .last_mut()
            .ok_or(MealError::EmptyFoodLog(field))
    }
}

impl From<Vec<FoodEntry>> for FoodLog {
    fn from(entries: Vec<FoodEntry>) -> Self {
        Self { entries }
    }
}
