use crate::{ApiConfig, CookingSkill, HealthStatus, MealPlanRequest, MealPlanResult, ResultTab, SupportedMeals};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application loaded; probe the backend.
    SessionStarted,
    /// Health probe completed. Failures only mark the backend offline.
    HealthChecked(Result<HealthStatus, String>),
    /// Backend configuration arrived.
    ConfigLoaded(Result<ApiConfig, String>),
    /// Backend meal suggestions arrived.
    SupportedMealsLoaded(Result<SupportedMeals, String>),
    /// User left the landing screen.
    GetStartedClicked,
    /// Collaborator submitted a fully built request. Ignored while loading, or
    /// when the meal name or budget is empty or whitespace only.
    PlanSubmitted(MealPlanRequest),
    /// User submitted the current form draft.
    FormSubmitted,
    /// Generation request completed.
    PlanGenerated(Result<MealPlanResult, String>),
    /// User asked to plan another meal from the results view.
    StartNewClicked,
    /// User pressed "Try Again" on the error screen.
    RetryClicked,
    /// User closed the error screen.
    ErrorDismissed,
    /// User switched result tabs.
    TabSelected(ResultTab),
    MealNameChanged(String),
    /// User picked a suggestion by its position in the suggestion list.
    MealSuggestionPicked(usize),
    ServingsIncremented,
    ServingsDecremented,
    ServingsSet(u8),
    BudgetChanged(String),
    DietaryToggled(String),
    SkillSelected(CookingSkill),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
