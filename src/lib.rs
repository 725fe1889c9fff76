pub mod cli;
pub mod constants;
pub mod document;
pub mod error;
pub mod import;
pub mod interface;
pub mod logging;
pub mod models;
pub mod reference;

pub use document::{DocumentBuilder, ParsedDocument};
pub use error::{MealError, Result};
pub use models::{ActivityLevel, BodyAttributes, FoodEntry, FoodLog, Gender, Profile};
