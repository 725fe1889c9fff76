//! The reference document: one person, two foods, intake standard labels.

use crate::constants::INTAKE_STANDARD;
use crate::document::DocumentBuilder;
use crate::error::Result;
use crate::models::{FoodLog, Profile};

pub fn reference_profile() -> Profile {
    let mut profile = Profile::new();
    profile
        .set_age(19)
        .set_weight(53.0)
        .set_height(160.0)
        .set_gender("male")
        .set_activity_level(1);
    profile
}

/// Four eggs of `04047` and 300 g of `01088`.
pub fn reference_food_log() -> Result<FoodLog> {
    let mut log = FoodLog::new();
    log.append("04047")
        .set_last_weight_in_eggs(4.0)?
        .append("01088")
        .set_last_weight(300.0)?;
    Ok(log)
}

pub fn reference_document() -> Result<DocumentBuilder> {
    let profile = reference_profile();
    let foods = reference_food_log()?;

    let mut doc = DocumentBuilder::new();
    doc.attach_name_list(INTAKE_STANDARD)
        .attach_foods(&foods)
        .attach_body(&profile);
    Ok(doc)
}
