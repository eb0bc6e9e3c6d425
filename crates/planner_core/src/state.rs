use crate::view_model::{AppViewModel, FormView, ResultsView, Screen, LOADING_MESSAGE};
use crate::{
    project_tab, ApiConfig, FormDraft, HealthStatus, MealPlanResult, ResultTab,
    DEFAULT_MEAL_SUGGESTIONS, DIETARY_OPTIONS,
};

/// Top-level screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Form,
    Results,
}

/// Outcome of the most recent health check. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendStatus {
    Online,
    Offline,
    Unknown,
}

impl BackendStatus {
    /// Maps the status string reported by `/health`.
    pub fn from_reported(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "healthy" | "ok" | "online" | "up" => BackendStatus::Online,
            "offline" | "down" => BackendStatus::Offline,
            _ => BackendStatus::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Online => "online",
            BackendStatus::Offline => "offline",
            BackendStatus::Unknown => "unknown",
        }
    }
}

/// Session state driven exclusively through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    view: View,
    loading: bool,
    error: Option<String>,
    result: Option<MealPlanResult>,
    backend_status: Option<BackendStatus>,
    backend_message: Option<String>,
    active_tab: ResultTab,
    form: FormDraft,
    supported_meals: Vec<String>,
    api_config: Option<ApiConfig>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&MealPlanResult> {
        self.result.as_ref()
    }

    pub fn backend_status(&self) -> Option<BackendStatus> {
        self.backend_status
    }

    pub fn backend_message(&self) -> Option<&str> {
        self.backend_message.as_deref()
    }

    pub fn active_tab(&self) -> ResultTab {
        self.active_tab
    }

    pub fn form(&self) -> &FormDraft {
        &self.form
    }

    /// Loaded suggestions, or the built-in list until the backend answered.
    pub fn meal_suggestions(&self) -> Vec<String> {
        if self.supported_meals.is_empty() {
            DEFAULT_MEAL_SUGGESTIONS
                .iter()
                .map(|meal| meal.to_string())
                .collect()
        } else {
            self.supported_meals.clone()
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            screen: self.screen(),
            backend_status: self.backend_status,
            backend_message: self.backend_message.clone(),
            backend_config: self.api_config.clone(),
        }
    }

    fn screen(&self) -> Screen {
        if let Some(message) = &self.error {
            return Screen::Error {
                message: message.clone(),
            };
        }
        if self.loading {
            return Screen::Loading {
                message: LOADING_MESSAGE,
            };
        }
        match self.view {
            View::Landing => Screen::Landing,
            View::Form => Screen::Form(FormView {
                draft: self.form.clone(),
                suggestions: self.meal_suggestions(),
                dietary_options: DIETARY_OPTIONS.iter().map(|tag| tag.to_string()).collect(),
                can_submit: self.form.is_submittable(),
            }),
            View::Results => match &self.result {
                Some(result) => Screen::Results(ResultsView {
                    active_tab: self.active_tab,
                    tabs: ResultTab::ALL.to_vec(),
                    content: project_tab(result, self.active_tab),
                }),
                None => Screen::Empty,
            },
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn record_health(&mut self, outcome: Result<HealthStatus, String>) {
        match outcome {
            Ok(health) => {
                self.backend_status = Some(BackendStatus::from_reported(&health.status));
                self.backend_message = health.message;
            }
            Err(message) => {
                self.backend_status = Some(BackendStatus::Offline);
                self.backend_message = Some(message);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn set_api_config(&mut self, config: ApiConfig) {
        self.api_config = Some(config);
        self.mark_dirty();
    }

    pub(crate) fn set_supported_meals(&mut self, meals: Vec<String>) {
        self.supported_meals = meals;
        self.mark_dirty();
    }

    pub(crate) fn show_form(&mut self) {
        self.view = View::Form;
        self.form = FormDraft::new();
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn begin_generation(&mut self) {
        self.loading = true;
        self.error = None;
        self.mark_dirty();
    }

    pub(crate) fn accept_result(&mut self, result: MealPlanResult) {
        self.result = Some(result);
        self.view = View::Results;
        self.active_tab = ResultTab::default();
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn fail_generation(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
        self.mark_dirty();
    }

    pub(crate) fn start_new(&mut self) {
        self.result = None;
        self.show_form();
    }

    pub(crate) fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_error(&mut self) {
        self.error = None;
        self.view = View::Landing;
        self.mark_dirty();
    }

    pub(crate) fn select_tab(&mut self, tab: ResultTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.mark_dirty();
        }
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormDraft {
        &mut self.form
    }
}
