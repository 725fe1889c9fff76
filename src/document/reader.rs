use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::document::builder::DocumentOptions;
use crate::error::Result;
use crate::models::{BodyAttributes, FoodEntry, FoodLog};

/// A food the calculator has no table row for, keyed by its number.
///
/// `data` maps nutrient labels to values, both as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserDefinitionFood {
    pub weight: f64,

    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

/// A written document read back into typed form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParsedDocument {
    pub foods: Vec<FoodEntry>,
    pub body: BodyAttributes,

    #[serde(default)]
    pub name_list: Option<Vec<String>>,

    #[serde(default)]
    pub combination: Option<Vec<usize>>,

    #[serde(default)]
    pub options: Option<DocumentOptions>,

    #[serde(default)]
    pub user_definition_foods: Option<BTreeMap<String, UserDefinitionFood>>,
}

impl ParsedDocument {
    pub fn food_log(&self) -> FoodLog {
        FoodLog::from(self.foods.clone())
    }

    /// Sum of all known weights in grams.
    pub fn total_weight(&self) -> f64 {
        self.foods.iter().filter_map(|f| f.weight).sum()
    }
}

pub fn parse_document(text: &str) -> Result<ParsedDocument> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_document<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    let content = fs::read_to_string(path)?;
    parse_document(&content)
}
