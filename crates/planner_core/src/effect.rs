use crate::MealPlanRequest;

/// Side effects requested by [`crate::update`]; executed by the embedding app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CheckHealth,
    FetchConfig,
    FetchSupportedMeals,
    GenerateMealPlan(MealPlanRequest),
}
