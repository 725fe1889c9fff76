use std::collections::BTreeMap;

use crate::document::{ParsedDocument, UserDefinitionFood};
use crate::models::{ActivityLevel, BodyAttributes, FoodEntry, Gender};

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{}{}", v, unit))
        .unwrap_or_else(|| "-".to_string())
}

fn gender_label(gender: Option<Gender>) -> &'static str {
    match gender {
        Some(Gender::Female) => "female",
        Some(Gender::Male) => "male",
        None => "-",
    }
}

fn activity_label(level: Option<ActivityLevel>) -> &'static str {
    match level {
        Some(ActivityLevel::Low) => "low",
        Some(ActivityLevel::Moderate) => "moderate",
        Some(ActivityLevel::High) => "high",
        None => "-",
    }
}

/// Column width for food numbers, in characters.
fn number_width<'a>(numbers: impl Iterator<Item = &'a str>) -> usize {
    numbers.map(|n| n.chars().count()).max().unwrap_or(5)
}

/// Display body attributes.
pub fn display_body(body: &BodyAttributes) {
    println!("=== Body ===");
    println!(
        "  age: {}",
        body.age.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
    );
    println!("  weight: {}", format_optional(body.weight, " kg"));
    println!("  height: {}", format_optional(body.height, " cm"));
    println!("  gender: {}", gender_label(body.gender));
    println!("  pal: {}", activity_label(body.activity_level));
    if let Some(days) = body.days {
        println!("  days: {}", days);
    }
    println!();
}

/// Display food entries in a formatted table.
pub fn display_food_entries(foods: &[FoodEntry]) {
    if foods.is_empty() {
        println!("Foods: (none)");
        return;
    }

    println!("=== Foods ({} items) ===", foods.len());

    let max_number_len = number_width(foods.iter().map(|f| f.number.as_str()));

    for (i, food) in foods.iter().enumerate() {
        let mut tags = Vec::new();
        if let Some(price) = food.price {
            tags.push(format!("price {}", price));
        }
        if let Some(class) = &food.class {
            tags.push(format!("class {}", class));
        }
        if food.include_refuse == Some(true) {
            tags.push("incl. refuse".to_string());
        }

        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  [{}]", tags.join(", "))
        };

        println!(
            "{:>3}. {:<width$} {:>10}{}",
            i + 1,
            food.number,
            format_optional(food.weight, " g"),
            tags_str,
            width = max_number_len
        );
    }
    println!();
}

/// Display a summary of a loaded document.
pub fn display_document(doc: &ParsedDocument) {
    println!();
    display_body(&doc.body);
    display_food_entries(&doc.foods);

    println!("--- Summary ---");
    println!("Total weight: {:.1} g", doc.total_weight());
    match &doc.name_list {
        Some(names) => println!("Name list: {} labels", names.len()),
        None => println!("Name list: (none)"),
    }
    if let Some(comb) = &doc.combination {
        println!("Combination: {:?}", comb);
    }
    if let Some(options) = &doc.options {
        println!("Show status: {}", options.show_status);
    }
    if let Some(udf) = &doc.user_definition_foods {
        display_user_definition_foods(udf);
    }
    println!();
}

/// Display user-defined foods with their nutrient values.
pub fn display_user_definition_foods(foods: &BTreeMap<String, UserDefinitionFood>) {
    println!();
    println!("=== User-defined foods ({} items) ===", foods.len());

    let width = number_width(foods.keys().map(String::as_str));
    for (number, food) in foods {
        let data = food
            .data
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>();
        let data_str = if data.is_empty() {
            String::new()
        } else {
            format!("  [{}]", data.join(", "))
        };
        println!(
            "  {:<width$} {:>10}{}",
            number,
            format!("{} g", food.weight),
            data_str,
            width = width
        );
    }
}
