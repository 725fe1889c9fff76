pub mod food_log;
pub mod profile;

pub use food_log::{FoodEntry, FoodLog};
pub use profile::{
    ActivityLevel, ActivityLevelInput, BodyAttributes, Gender, GenderInput, Profile,
};
