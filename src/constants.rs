/// Output path used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "test.json";

/// Grams per whole egg.
pub const EGG_UNIT_GRAMS: f64 = 50.0;

/// Name of the intake reference standard label list.
pub const INTAKE_STANDARD: &str = "摂取基準";

// ─────────────────────────────────────────────────────────────────────────────
// Document keys
// ─────────────────────────────────────────────────────────────────────────────

pub const KEY_FOODS: &str = "foods";
pub const KEY_BODY: &str = "body";
pub const KEY_NAME_LIST: &str = "name_list";
pub const KEY_COMBINATION: &str = "combination";
pub const KEY_OPTIONS: &str = "options";
