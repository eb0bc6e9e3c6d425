use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use planner_core::MealPlanRequest;
use planner_logging::{planner_debug, planner_warn};

use crate::client::{ApiClient, ClientSettings, ReqwestApiClient};
use crate::{EngineError, EngineEvent};

enum EngineCommand {
    CheckHealth,
    FetchConfig,
    FetchSupportedMeals,
    GenerateMealPlan(MealPlanRequest),
}

/// Runs backend calls on a background tokio runtime.
///
/// Every command is spawned as its own task, so a health check never waits on
/// an outstanding generation request. Completions come back as
/// [`EngineEvent`]s in the order they finish.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let client = ReqwestApiClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn ApiClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("planner-engine")
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(client.as_ref(), command).await;
                    if event_tx.send(event).is_err() {
                        planner_debug!("Engine event dropped; receiver is gone");
                    }
                });
            }
            planner_debug!("Engine command channel closed; shutting down runtime");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn check_health(&self) {
        self.send(EngineCommand::CheckHealth);
    }

    pub fn fetch_config(&self) {
        self.send(EngineCommand::FetchConfig);
    }

    pub fn fetch_supported_meals(&self) {
        self.send(EngineCommand::FetchSupportedMeals);
    }

    pub fn generate_meal_plan(&self, request: MealPlanRequest) {
        self.send(EngineCommand::GenerateMealPlan(request));
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            planner_warn!("Engine worker is not running; command dropped");
        }
    }
}

async fn handle_command(client: &dyn ApiClient, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::CheckHealth => EngineEvent::HealthChecked(client.health_check().await),
        EngineCommand::FetchConfig => EngineEvent::ConfigLoaded(client.get_config().await),
        EngineCommand::FetchSupportedMeals => {
            EngineEvent::SupportedMealsLoaded(client.get_supported_meals().await)
        }
        EngineCommand::GenerateMealPlan(request) => {
            EngineEvent::MealPlanGenerated(client.generate_meal_plan(&request).await)
        }
    }
}
