use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::constants::INTAKE_STANDARD;
use crate::error::{MealError, Result};
use crate::models::{FoodLog, Profile};

/// Prompt for a number. An empty answer returns `None`.
fn prompt_optional_number<T: FromStr>(prompt: &str) -> Result<Option<T>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    input
        .parse()
        .map(Some)
        .map_err(|_| MealError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for a yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(result)
}

/// Prompt for body attributes. Empty answers leave fields unset.
pub fn prompt_profile() -> Result<Profile> {
    let mut profile = Profile::new();

    if let Some(age) = prompt_optional_number::<u32>("Age (years)")? {
        profile.set_age(age);
    }
    if let Some(weight) = prompt_optional_number::<f64>("Weight (kg)")? {
        profile.set_weight(weight);
    }
    if let Some(height) = prompt_optional_number::<f64>("Height (cm)")? {
        profile.set_height(height);
    }

    let genders = ["female", "male", "(skip)"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&genders)
        .default(2)
        .interact()?;
    profile.set_gender(genders[selection]);

    let levels = ["low", "moderate", "high", "(skip)"];
    let selection = Select::new()
        .with_prompt("Physical activity level")
        .items(&levels)
        .default(3)
        .interact()?;
    profile.set_activity_level(levels[selection]);

    if let Some(days) = prompt_optional_number::<u32>("Days covered by the food log")? {
        profile.set_days(days);
    }

    Ok(profile)
}

/// Prompt for food entries until an empty food number is entered.
pub fn prompt_food_log() -> Result<FoodLog> {
    let mut log = FoodLog::new();

    loop {
        let number: String = Input::new()
            .with_prompt("Food number (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let number = number.trim();
        if number.is_empty() {
            break;
        }

        log.append(number);
        if let Some(grams) = prompt_optional_number::<f64>("Weight (g)")? {
            log.set_last_weight(grams)?;
        }
        if let Some(price) = prompt_optional_number::<f64>("Price")? {
            log.set_last_price(price)?;
        }
    }

    Ok(log)
}

/// Ask whether to attach the intake reference standard label list.
pub fn prompt_name_list() -> Result<Option<&'static str>> {
    let attach = prompt_yes_no(
        &format!("Attach the {} nutrient label list?", INTAKE_STANDARD),
        true,
    )?;
    Ok(attach.then_some(INTAKE_STANDARD))
}
