//! Wire model shared by the state machine and the transport client.
//!
//! Response types are deliberately lenient: every section of a generated plan
//! is optional, and a section whose shape does not match is treated as absent.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use planner_logging::planner_warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const MIN_SERVINGS: u8 = 1;
pub const MAX_SERVINGS: u8 = 12;
pub const DEFAULT_SERVINGS: u8 = 4;

/// Meal suggestions used until the backend list has been loaded.
pub const DEFAULT_MEAL_SUGGESTIONS: [&str; 10] = [
    "Chicken Stir Fry",
    "Paneer Butter Masala",
    "Pasta Carbonara",
    "Beef Tacos",
    "Vegetarian Pizza",
    "Salmon Teriyaki",
    "Thai Green Curry",
    "Mediterranean Bowl",
    "Chicken Tikka Masala",
    "Caesar Salad with Grilled Chicken",
];

pub const DIETARY_OPTIONS: [&str; 7] = [
    "vegetarian",
    "vegan",
    "gluten-free",
    "dairy-free",
    "nut-free",
    "low-carb",
    "keto",
];

/// Number of people a plan is for, always within `MIN_SERVINGS..=MAX_SERVINGS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Servings(u8);

impl Servings {
    /// Clamps `value` into the supported range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(MIN_SERVINGS, MAX_SERVINGS))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Servings {
    fn default() -> Self {
        Self(DEFAULT_SERVINGS)
    }
}

impl From<u8> for Servings {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Servings> for u8 {
    fn from(value: Servings) -> Self {
        value.0
    }
}

impl fmt::Display for Servings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookingSkill {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CookingSkill {
    pub const ALL: [CookingSkill; 3] = [
        CookingSkill::Beginner,
        CookingSkill::Intermediate,
        CookingSkill::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CookingSkill::Beginner => "beginner",
            CookingSkill::Intermediate => "intermediate",
            CookingSkill::Advanced => "advanced",
        }
    }

    /// Rough preparation time the level is aimed at.
    pub fn time_hint(self) -> &'static str {
        match self {
            CookingSkill::Beginner => "<30 min",
            CookingSkill::Intermediate => "30-60 min",
            CookingSkill::Advanced => "60+ min",
        }
    }
}

impl fmt::Display for CookingSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cooking skill: {0}")]
pub struct UnknownCookingSkill(pub String);

impl FromStr for CookingSkill {
    type Err = UnknownCookingSkill;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(CookingSkill::Beginner),
            "intermediate" => Ok(CookingSkill::Intermediate),
            // The backend advertises "advance" in its capability list.
            "advanced" | "advance" => Ok(CookingSkill::Advanced),
            _ => Err(UnknownCookingSkill(s.to_string())),
        }
    }
}

/// Preferences submitted to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealPlanRequest {
    pub meal_name: String,
    pub servings: Servings,
    pub budget: String,
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<String>,
    #[serde(default)]
    pub cooking_skill: CookingSkill,
}

impl MealPlanRequest {
    /// True when both required free-text fields carry something other than whitespace.
    pub fn has_required_fields(&self) -> bool {
        !self.meal_name.trim().is_empty() && !self.budget.trim().is_empty()
    }
}

/// A generated plan. Every section is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "ResultEnvelope")]
pub struct MealPlanResult {
    pub summary: Option<String>,
    pub task_outputs: TaskOutputs,
    pub request_info: Option<RequestInfo>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultEnvelope {
    Wrapped {
        data: PlanPayload,
        #[serde(default)]
        request_info: Option<RequestInfo>,
    },
    Bare(PlanPayload),
}

#[derive(Deserialize)]
struct PlanPayload {
    #[serde(default, deserialize_with = "lenient_text")]
    summary: Option<String>,
    #[serde(default)]
    task_outputs: Option<TaskOutputs>,
}

impl From<ResultEnvelope> for MealPlanResult {
    fn from(envelope: ResultEnvelope) -> Self {
        let (payload, request_info) = match envelope {
            ResultEnvelope::Wrapped { data, request_info } => (data, request_info),
            ResultEnvelope::Bare(payload) => (payload, None),
        };
        Self {
            summary: payload.summary,
            task_outputs: payload.task_outputs.unwrap_or_default(),
            request_info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TaskOutputs {
    #[serde(default, deserialize_with = "lenient_section")]
    pub meal_planning: Option<MealPlanningOutput>,
    #[serde(default, deserialize_with = "lenient_section")]
    pub shopping: Option<ShoppingOutput>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub leftover: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MealPlanningOutput {
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub researched_ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ShoppingOutput {
    #[serde(default)]
    pub total_budget: Option<String>,
    #[serde(default, rename = "shopping_sections")]
    pub sections: Vec<ShoppingSection>,
    #[serde(default)]
    pub shopping_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ShoppingSection {
    #[serde(default, rename = "section_name")]
    pub name: String,
    #[serde(default)]
    pub estimated_total: String,
    #[serde(default)]
    pub items: Vec<GroceryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct GroceryItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub estimated_price: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Echo of the request the backend actually processed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RequestInfo {
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub cooking_skill: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Enveloped<ApiConfigBody>")]
pub struct ApiConfig {
    pub api_version: Option<String>,
    pub supported_features: Vec<String>,
    pub serper_configured: bool,
    pub anthropic_configured: bool,
}

#[derive(Deserialize)]
struct ApiConfigBody {
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    supported_features: Vec<String>,
    #[serde(default)]
    serper_configured: bool,
    #[serde(default)]
    anthropic_configured: bool,
}

impl From<Enveloped<ApiConfigBody>> for ApiConfig {
    fn from(envelope: Enveloped<ApiConfigBody>) -> Self {
        let body = envelope.into_inner();
        Self {
            api_version: body.api_version,
            supported_features: body.supported_features,
            serper_configured: body.serper_configured,
            anthropic_configured: body.anthropic_configured,
        }
    }
}

/// Suggestions the form can offer. The backend may answer with a bare list of
/// names or with a detailed object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Enveloped<SupportedMealsBody>")]
pub struct SupportedMeals {
    pub supported_meals: Vec<String>,
    pub cooking_skills: Vec<String>,
    pub common_dietary_restrictions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SupportedMealsBody {
    Names(Vec<String>),
    Detailed {
        #[serde(default)]
        supported_meals: Vec<String>,
        #[serde(default)]
        cooking_skills: Vec<String>,
        #[serde(default)]
        common_dietary_restrictions: Vec<String>,
    },
}

impl From<Enveloped<SupportedMealsBody>> for SupportedMeals {
    fn from(envelope: Enveloped<SupportedMealsBody>) -> Self {
        match envelope.into_inner() {
            SupportedMealsBody::Names(supported_meals) => Self {
                supported_meals,
                ..Self::default()
            },
            SupportedMealsBody::Detailed {
                supported_meals,
                cooking_skills,
                common_dietary_restrictions,
            } => Self {
                supported_meals,
                cooking_skills,
                common_dietary_restrictions,
            },
        }
    }
}

/// `{"status": ..., "data": T}` or a bare `T`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Enveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Enveloped<T> {
    fn into_inner(self) -> T {
        match self {
            Enveloped::Wrapped { data } => data,
            Enveloped::Bare(inner) => inner,
        }
    }
}

/// Decodes a structured section, treating null or a mismatched shape as absent.
fn lenient_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match serde_json::from_value(value) {
            Ok(section) => Ok(Some(section)),
            Err(err) => {
                planner_warn!(
                    "Dropping task output section with unexpected shape ({}): {}",
                    std::any::type_name::<T>(),
                    err
                );
                Ok(None)
            }
        },
    }
}

/// Decodes narrative text. Structured values are kept as pretty-printed JSON.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string())),
    })
}
