use std::sync::Once;

use planner_core::{
    update, AppState, BackendStatus, CookingSkill, Effect, HealthStatus, MealPlanResult, Msg,
    ResultTab, Screen, SupportedMeals, View, DEFAULT_MEAL_SUGGESTIONS, MAX_SERVINGS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(planner_logging::initialize_for_tests);
}

fn apply(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> AppState {
    msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
}

fn state_with_error(view_msgs: Vec<Msg>) -> AppState {
    let mut msgs = view_msgs;
    msgs.extend([
        Msg::MealNameChanged("Beef Tacos".to_string()),
        Msg::BudgetChanged("$20".to_string()),
        Msg::FormSubmitted,
        Msg::PlanGenerated(Err("Internal server error".to_string())),
    ]);
    apply(AppState::new(), msgs)
}

#[test]
fn session_start_requests_health_config_and_meals() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SessionStarted);

    assert_eq!(
        effects,
        vec![
            Effect::CheckHealth,
            Effect::FetchConfig,
            Effect::FetchSupportedMeals
        ]
    );
    assert_eq!(state.current_view(), View::Landing);
    assert_eq!(state.backend_status(), None);
}

#[test]
fn health_check_failure_marks_offline_without_error() {
    init_logging();
    let state = apply(
        AppState::new(),
        [
            Msg::SessionStarted,
            Msg::HealthChecked(Err("error sending request: connection refused".to_string())),
        ],
    );

    assert_eq!(state.backend_status(), Some(BackendStatus::Offline));
    assert_eq!(state.current_view(), View::Landing);
    assert_eq!(state.error(), None);
    assert_eq!(state.view().screen, Screen::Landing);
}

#[test]
fn health_check_success_maps_reported_status() {
    init_logging();
    let healthy = update(
        AppState::new(),
        Msg::HealthChecked(Ok(HealthStatus {
            status: "healthy".to_string(),
            message: Some("Alex Meal Planner API is running".to_string()),
        })),
    )
    .0;
    assert_eq!(healthy.backend_status(), Some(BackendStatus::Online));
    assert_eq!(
        healthy.backend_message(),
        Some("Alex Meal Planner API is running")
    );

    let odd = update(
        AppState::new(),
        Msg::HealthChecked(Ok(HealthStatus {
            status: "degraded".to_string(),
            message: None,
        })),
    )
    .0;
    assert_eq!(odd.backend_status(), Some(BackendStatus::Unknown));
}

#[test]
fn get_started_shows_form_and_clears_error() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::GetStartedClicked);

    assert!(effects.is_empty());
    assert_eq!(state.current_view(), View::Form);
    assert_eq!(state.error(), None);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn error_screen_takes_priority_over_view() {
    init_logging();
    let state = state_with_error(vec![Msg::GetStartedClicked]);

    assert_eq!(state.current_view(), View::Form);
    assert_eq!(
        state.view().screen,
        Screen::Error {
            message: "Internal server error".to_string()
        }
    );
}

#[test]
fn dismiss_error_always_returns_to_landing() {
    init_logging();
    let from_form = state_with_error(vec![Msg::GetStartedClicked]);
    let (state, effects) = update(from_form, Msg::ErrorDismissed);
    assert!(effects.is_empty());
    assert_eq!(state.current_view(), View::Landing);
    assert_eq!(state.error(), None);

    let (state, _) = update(AppState::new(), Msg::ErrorDismissed);
    assert_eq!(state.current_view(), View::Landing);
    assert_eq!(state.error(), None);
}

#[test]
fn retry_clears_error_and_only_rechecks_health() {
    init_logging();
    let state = state_with_error(vec![Msg::GetStartedClicked]);
    let (state, effects) = update(state, Msg::RetryClicked);

    assert_eq!(effects, vec![Effect::CheckHealth]);
    assert_eq!(state.error(), None);
    assert_eq!(state.current_view(), View::Form);
    assert!(!state.is_loading());
}

#[test]
fn start_new_resets_to_empty_form() {
    init_logging();
    let state = apply(
        AppState::new(),
        [
            Msg::GetStartedClicked,
            Msg::MealNameChanged("Beef Tacos".to_string()),
            Msg::BudgetChanged("$20".to_string()),
            Msg::FormSubmitted,
            Msg::PlanGenerated(Ok(MealPlanResult::default())),
            Msg::TabSelected(ResultTab::Budget),
        ],
    );
    assert_eq!(state.current_view(), View::Results);

    let (state, effects) = update(state, Msg::StartNewClicked);
    assert!(effects.is_empty());
    assert_eq!(state.current_view(), View::Form);
    assert_eq!(state.result(), None);
    assert_eq!(state.error(), None);
    assert_eq!(state.form().meal_name, "");
}

#[test]
fn form_edits_update_draft() {
    init_logging();
    let mut msgs = vec![Msg::GetStartedClicked, Msg::MealSuggestionPicked(2)];
    msgs.extend((0..20).map(|_| Msg::ServingsIncremented));
    msgs.extend([
        Msg::DietaryToggled("vegan".to_string()),
        Msg::DietaryToggled("keto".to_string()),
        Msg::DietaryToggled("vegan".to_string()),
        Msg::SkillSelected(CookingSkill::Advanced),
        Msg::BudgetChanged("$25 - $50".to_string()),
    ]);
    let state = apply(AppState::new(), msgs);

    let form = state.form();
    assert_eq!(form.meal_name, DEFAULT_MEAL_SUGGESTIONS[2]);
    assert_eq!(form.servings.get(), MAX_SERVINGS);
    assert_eq!(
        form.dietary_restrictions.iter().collect::<Vec<_>>(),
        vec!["keto"]
    );
    assert_eq!(form.cooking_skill, CookingSkill::Advanced);

    let Screen::Form(form_view) = state.view().screen else {
        panic!("expected form screen");
    };
    assert!(form_view.can_submit);
}

#[test]
fn loaded_suggestions_replace_defaults() {
    init_logging();
    let state = apply(
        AppState::new(),
        [
            Msg::SupportedMealsLoaded(Ok(SupportedMeals {
                supported_meals: vec!["Shakshuka".to_string()],
                ..SupportedMeals::default()
            })),
            Msg::GetStartedClicked,
            Msg::MealSuggestionPicked(0),
        ],
    );
    assert_eq!(state.meal_suggestions(), vec!["Shakshuka"]);
    assert_eq!(state.form().meal_name, "Shakshuka");

    let (unchanged, _) = update(state.clone(), Msg::MealSuggestionPicked(5));
    assert_eq!(unchanged.form(), state.form());
}

#[test]
fn failed_suggestion_load_keeps_defaults() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::SupportedMealsLoaded(Err("HTTP error, status 500".to_string())),
    );
    assert!(effects.is_empty());
    assert_eq!(state.meal_suggestions().len(), DEFAULT_MEAL_SUGGESTIONS.len());
    assert_eq!(state.error(), None);
}
