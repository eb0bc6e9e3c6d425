use planner_logging::{planner_debug, planner_info, planner_warn};

use crate::{AppState, Effect, FormDraft, MealPlanRequest, Msg, Servings};

const GENERIC_FAILURE: &str = "Meal plan request failed";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => vec![
            Effect::CheckHealth,
            Effect::FetchConfig,
            Effect::FetchSupportedMeals,
        ],
        Msg::HealthChecked(outcome) => {
            if let Err(err) = &outcome {
                planner_info!("Backend not available: {}", err);
            }
            state.record_health(outcome);
            Vec::new()
        }
        Msg::ConfigLoaded(outcome) => {
            match outcome {
                Ok(config) => state.set_api_config(config),
                Err(err) => planner_warn!("Failed to load backend config: {}", err),
            }
            Vec::new()
        }
        Msg::SupportedMealsLoaded(outcome) => {
            match outcome {
                Ok(meals) if !meals.supported_meals.is_empty() => {
                    state.set_supported_meals(meals.supported_meals);
                }
                Ok(_) => planner_debug!("Backend returned no meal suggestions; keeping defaults"),
                Err(err) => planner_warn!("Failed to load meal suggestions: {}", err),
            }
            Vec::new()
        }
        Msg::GetStartedClicked => {
            state.show_form();
            Vec::new()
        }
        Msg::PlanSubmitted(request) => submit(&mut state, request),
        Msg::FormSubmitted => {
            let request = state.form().to_request();
            submit(&mut state, request)
        }
        Msg::PlanGenerated(outcome) => {
            // Only one generation may be outstanding; anything else is stale.
            if !state.is_loading() {
                planner_debug!("Ignoring generation result with no request in flight");
                return (state, Vec::new());
            }
            match outcome {
                Ok(result) => state.accept_result(result),
                Err(message) if message.trim().is_empty() => {
                    state.fail_generation(GENERIC_FAILURE.to_string());
                }
                Err(message) => state.fail_generation(message),
            }
            Vec::new()
        }
        Msg::StartNewClicked => {
            state.start_new();
            Vec::new()
        }
        Msg::RetryClicked => {
            state.clear_error();
            vec![Effect::CheckHealth]
        }
        Msg::ErrorDismissed => {
            state.dismiss_error();
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            state.select_tab(tab);
            Vec::new()
        }
        Msg::MealNameChanged(name) => edit_form(&mut state, |form| {
            form.meal_name = name;
            true
        }),
        Msg::MealSuggestionPicked(index) => {
            let picked = state.meal_suggestions().into_iter().nth(index);
            match picked {
                Some(meal) => edit_form(&mut state, |form| {
                    form.meal_name = meal;
                    true
                }),
                None => Vec::new(),
            }
        }
        Msg::ServingsIncremented => edit_form(&mut state, |form| {
            form.servings = form.servings.increment();
            true
        }),
        Msg::ServingsDecremented => edit_form(&mut state, |form| {
            form.servings = form.servings.decrement();
            true
        }),
        Msg::ServingsSet(servings) => edit_form(&mut state, |form| {
            form.servings = Servings::new(servings);
            true
        }),
        Msg::BudgetChanged(budget) => edit_form(&mut state, |form| {
            form.budget = budget;
            true
        }),
        Msg::DietaryToggled(tag) => edit_form(&mut state, |form| form.toggle_dietary(&tag)),
        Msg::SkillSelected(skill) => edit_form(&mut state, |form| {
            form.cooking_skill = skill;
            true
        }),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState, request: MealPlanRequest) -> Vec<Effect> {
    if state.is_loading() {
        planner_debug!("Ignoring submission while a meal plan is being generated");
        return Vec::new();
    }
    if !request.has_required_fields() {
        planner_debug!("Ignoring submission without meal name or budget");
        return Vec::new();
    }
    planner_info!(
        "Requesting meal plan for {:?} (servings={}, skill={})",
        request.meal_name,
        request.servings,
        request.cooking_skill
    );
    state.begin_generation();
    vec![Effect::GenerateMealPlan(request)]
}

/// Form edits are locked while a request is in flight.
fn edit_form(state: &mut AppState, edit: impl FnOnce(&mut FormDraft) -> bool) -> Vec<Effect> {
    if state.is_loading() {
        return Vec::new();
    }
    if edit(state.form_mut()) {
        state.mark_dirty();
    }
    Vec::new()
}
