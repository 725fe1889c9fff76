use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Parse a canonical label. Anything else is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "female" => Some(Gender::Female),
            "male" => Some(Gender::Male),
            _ => None,
        }
    }
}

/// Physical activity level (PAL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "low" => Some(ActivityLevel::Low),
            "moderate" => Some(ActivityLevel::Moderate),
            "high" => Some(ActivityLevel::High),
            _ => None,
        }
    }

    /// Numeric codes 1, 2, 3 map to low, moderate, high.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(ActivityLevel::Low),
            2 => Some(ActivityLevel::Moderate),
            3 => Some(ActivityLevel::High),
            _ => None,
        }
    }
}

/// Input accepted by [`Profile::set_gender`].
pub trait GenderInput {
    fn to_gender(&self) -> Option<Gender>;
}

impl GenderInput for Gender {
    fn to_gender(&self) -> Option<Gender> {
        Some(*self)
    }
}

impl GenderInput for &str {
    fn to_gender(&self) -> Option<Gender> {
        Gender::from_label(self)
    }
}

impl GenderInput for String {
    fn to_gender(&self) -> Option<Gender> {
        Gender::from_label(self)
    }
}

/// Input accepted by [`Profile::set_activity_level`]: a label or a numeric code.
pub trait ActivityLevelInput {
    fn to_activity_level(&self) -> Option<ActivityLevel>;
}

impl ActivityLevelInput for ActivityLevel {
    fn to_activity_level(&self) -> Option<ActivityLevel> {
        Some(*self)
    }
}

impl ActivityLevelInput for &str {
    fn to_activity_level(&self) -> Option<ActivityLevel> {
        ActivityLevel::from_label(self)
    }
}

impl ActivityLevelInput for String {
    fn to_activity_level(&self) -> Option<ActivityLevel> {
        ActivityLevel::from_label(self)
    }
}

macro_rules! impl_activity_code {
    ($($t:ty),*) => {
        $(
            impl ActivityLevelInput for $t {
                fn to_activity_level(&self) -> Option<ActivityLevel> {
                    ActivityLevel::from_code(i64::from(*self))
                }
            }
        )*
    };
}

impl_activity_code!(u8, u16, u32, i8, i16, i32, i64);

/// The set fields of a [`Profile`]. Unset fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyAttributes {
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u32>,

    /// Kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(rename = "pal", default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,

    /// Number of days the food log covers.
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub days: Option<u32>,
}

/// Accept any JSON number and truncate it toward zero. Negative values become 0.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.map(|n| n as u32))
}

/// Body and activity attributes of one person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    attributes: BodyAttributes,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_age(&mut self, age: u32) -> &mut Self {
        self.attributes.age = Some(age);
        self
    }

    pub fn set_weight(&mut self, kg: f64) -> &mut Self {
        self.attributes.weight = Some(kg);
        self
    }

    pub fn set_height(&mut self, cm: f64) -> &mut Self {
        self.attributes.height = Some(cm);
        self
    }

    /// Only `female` and `male` are stored. Any other value is ignored
    /// and the field keeps its previous state.
    pub fn set_gender(&mut self, gender: impl GenderInput) -> &mut Self {
        match gender.to_gender() {
            Some(g) => self.attributes.gender = Some(g),
            None => tracing::debug!("unrecognized gender ignored"),
        }
        self
    }

    /// Accepts `low`/`moderate`/`high` or the codes 1/2/3. Any other value
    /// is ignored and the field keeps its previous state.
    pub fn set_activity_level(&mut self, level: impl ActivityLevelInput) -> &mut Self {
        match level.to_activity_level() {
            Some(l) => self.attributes.activity_level = Some(l),
            None => tracing::debug!("unrecognized activity level ignored"),
        }
        self
    }

    pub fn set_days(&mut self, days: u32) -> &mut Self {
        self.attributes.days = Some(days);
        self
    }

    pub fn attributes(&self) -> &BodyAttributes {
        &self.attributes
    }
}
