use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::{FoodEntry, FoodLog};

/// One CSV row. Columns other than `number` may be missing or empty.
#[derive(Debug, Deserialize)]
struct FoodRow {
    number: String,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    class: Option<String>,
    #[serde(default)]
    include_refuse: Option<bool>,
}

impl From<FoodRow> for FoodEntry {
    fn from(row: FoodRow) -> Self {
        FoodEntry {
            number: row.number,
            weight: row.weight,
            price: row.price,
            class: row.class.filter(|c| !c.is_empty()),
            include_refuse: row.include_refuse,
        }
    }
}

/// Read a food log from CSV with a header row. Rows keep file order.
pub fn read_food_log<R: Read>(reader: R) -> Result<FoodLog> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    for row in rdr.deserialize::<FoodRow>() {
        entries.push(FoodEntry::from(row?));
    }

    tracing::debug!(count = entries.len(), "food log imported");
    Ok(FoodLog::from(entries))
}

pub fn load_food_log_csv<P: AsRef<Path>>(path: P) -> Result<FoodLog> {
    let file = std::fs::File::open(path)?;
    read_food_log(file)
}
