use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use planner_core::{Effect, Msg};
use planner_engine::{ClientSettings, EngineError, EngineEvent, EngineHandle};
use planner_logging::{planner_info, planner_warn};

use super::ui::commands::Command;

/// Executes core effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, cmd_tx: mpsc::Sender<Command>) -> Result<Self, EngineError> {
        planner_info!("Using backend at {}", settings.base_url);
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(cmd_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CheckHealth => {
                    planner_info!("CheckHealth");
                    self.engine.check_health();
                }
                Effect::FetchConfig => {
                    planner_info!("FetchConfig");
                    self.engine.fetch_config();
                }
                Effect::FetchSupportedMeals => {
                    planner_info!("FetchSupportedMeals");
                    self.engine.fetch_supported_meals();
                }
                Effect::GenerateMealPlan(request) => {
                    planner_info!(
                        "GenerateMealPlan meal={:?} servings={} restrictions={}",
                        request.meal_name,
                        request.servings,
                        request.dietary_restrictions.len()
                    );
                    self.engine.generate_meal_plan(request);
                }
            }
        }
    }

    fn spawn_event_loop(&self, cmd_tx: mpsc::Sender<Command>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(Duration::from_millis(100)) else {
                continue;
            };
            if cmd_tx.send(Command::Dispatch(map_event(event))).is_err() {
                // Dispatch loop has exited.
                break;
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::HealthChecked(result) => Msg::HealthChecked(result.map_err(|err| err.to_string())),
        EngineEvent::ConfigLoaded(result) => Msg::ConfigLoaded(result.map_err(|err| err.to_string())),
        EngineEvent::SupportedMealsLoaded(result) => {
            Msg::SupportedMealsLoaded(result.map_err(|err| err.to_string()))
        }
        EngineEvent::MealPlanGenerated(result) => {
            if let Err(err) = &result {
                planner_warn!("Meal plan generation failed: {}", err);
            }
            Msg::PlanGenerated(result.map_err(|err| err.to_string()))
        }
    }
}
