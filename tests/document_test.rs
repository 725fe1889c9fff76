#[macro_use]
extern crate assert_float_eq;

use std::fs;

use serde_json::{json, Value};
use tempfile::tempdir;

use meal_builder_rs::document::{load_document, parse_document, DocumentBuilder};
use meal_builder_rs::error::MealError;
use meal_builder_rs::models::{ActivityLevel, FoodLog, Gender, Profile};
use meal_builder_rs::reference::{reference_document, reference_food_log, reference_profile};

#[test]
fn test_reference_profile_attributes() {
    let profile = reference_profile();
    let body = serde_json::to_value(profile.attributes()).unwrap();

    assert_eq!(
        body,
        json!({
            "age": 19,
            "weight": 53.0,
            "height": 160.0,
            "gender": "male",
            "pal": "low"
        })
    );
}

#[test]
fn test_reference_food_log_entries() {
    let log = reference_food_log().unwrap();
    let foods = serde_json::to_value(log.entries()).unwrap();

    assert_eq!(
        foods,
        json!([
            {"number": "04047", "weight": 200.0},
            {"number": "01088", "weight": 300.0}
        ])
    );
}

#[test]
fn test_reference_document_written_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.json");

    reference_document().unwrap().write(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    let obj = value.as_object().unwrap();

    let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3);
    assert!(text.starts_with(r#"{"name_list":"#));

    let names = obj["name_list"].as_array().unwrap();
    assert_eq!(names.len(), 35);
    assert_eq!(names[0], "食品番号");
    assert_eq!(names[34], "モリブデン");

    assert_eq!(obj["foods"][0]["number"], "04047");
    assert_float_absolute_eq!(obj["foods"][0]["weight"].as_f64().unwrap(), 200.0, 1e-9);
    assert_eq!(obj["foods"][1]["number"], "01088");
    assert_float_absolute_eq!(obj["foods"][1]["weight"].as_f64().unwrap(), 300.0, 1e-9);

    assert_eq!(obj["body"]["age"], 19);
    assert_eq!(obj["body"]["pal"], "low");
}

#[test]
fn test_round_trip_preserves_contents() {
    let mut profile = Profile::new();
    profile
        .set_age(30)
        .set_weight(61.5)
        .set_height(170.0)
        .set_gender("female")
        .set_activity_level("high")
        .set_days(2);

    let mut log = FoodLog::new();
    log.append("01001")
        .set_last_weight(200.0)
        .unwrap()
        .append("01004")
        .set_last_weight(50.0)
        .unwrap()
        .set_last_price_per_gram(3.0)
        .unwrap()
        .append("02001")
        .set_last_weight(50.0)
        .unwrap()
        .set_last_include_refuse(true)
        .unwrap()
        .append("u2")
        .set_last_class("テスト")
        .unwrap();

    let mut doc = DocumentBuilder::new();
    doc.attach_body(&profile)
        .attach_foods(&log)
        .attach_name_list("摂取基準")
        .attach_combination(vec![1, 2])
        .set_show_status(true);

    let parsed = parse_document(&doc.serialize().unwrap()).unwrap();

    assert_eq!(parsed.foods, log.entries());
    assert_eq!(&parsed.body, profile.attributes());
    assert_eq!(parsed.body.gender, Some(Gender::Female));
    assert_eq!(parsed.body.activity_level, Some(ActivityLevel::High));
    assert_eq!(
        parsed.name_list.unwrap(),
        meal_builder_rs::document::INTAKE_STANDARD_NAMES.to_vec()
    );
    assert_eq!(parsed.combination, Some(vec![1, 2]));
    assert!(parsed.options.unwrap().show_status);
    assert_float_absolute_eq!(parsed.foods[1].price.unwrap(), 150.0, 1e-9);
}

#[test]
fn test_pretty_output_parses_the_same() {
    let dir = tempdir().unwrap();
    let compact = dir.path().join("compact.json");
    let pretty = dir.path().join("pretty.json");

    let mut doc = reference_document().unwrap();
    doc.write(&compact).unwrap().write_pretty(&pretty).unwrap();

    assert_eq!(load_document(&compact).unwrap(), load_document(&pretty).unwrap());
    assert!(fs::read_to_string(&pretty).unwrap().contains('\n'));
}

#[test]
fn test_write_to_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("test.json");

    let result = reference_document().unwrap().write(&path).map(|_| ());
    assert!(matches!(result, Err(MealError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.json");
    fs::write(&path, "previous contents that are longer than the new document").unwrap();

    let mut doc = DocumentBuilder::new();
    doc.attach_foods(&FoodLog::new());
    doc.write(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"foods":[]}"#);
}

#[test]
fn test_empty_log_weight_error_leaves_log_untouched() {
    let mut log = FoodLog::new();
    let err = log.set_last_weight(100.0).map(|_| ()).unwrap_err();

    assert!(matches!(err, MealError::EmptyFoodLog("weight")));
    assert!(err.to_string().contains("weight"));
    assert!(log.is_empty());
}

#[test]
fn test_float_age_from_other_writers_is_accepted() {
    let doc = parse_document(r#"{"foods":[],"body":{"age":19.0,"weight":53.0}}"#).unwrap();

    assert_eq!(doc.body.age, Some(19));
    assert_eq!(doc.body.weight, Some(53.0));
    assert!(doc.foods.is_empty());
}

#[test]
fn test_loading_missing_document_is_io_error() {
    let dir = tempdir().unwrap();
    let result = load_document(dir.path().join("absent.json"));
    assert!(matches!(result, Err(MealError::Io(_))));
}
