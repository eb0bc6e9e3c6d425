use crate::{ApiConfig, BackendStatus, FormDraft, ResultTab, TabContent};

pub const LOADING_MESSAGE: &str =
    "This may take a minute while our AI creates your personalized meal plan...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    /// What to draw, after error and loading priority have been applied.
    pub screen: Screen,
    pub backend_status: Option<BackendStatus>,
    pub backend_message: Option<String>,
    /// Backend capabilities from `/api/config`, once loaded.
    pub backend_config: Option<ApiConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Form(FormView),
    Results(ResultsView),
    Loading { message: &'static str },
    Error { message: String },
    /// Results view selected without a result to show.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub draft: FormDraft,
    pub suggestions: Vec<String>,
    pub dietary_options: Vec<String>,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub active_tab: ResultTab,
    pub tabs: Vec<ResultTab>,
    pub content: TabContent,
}
