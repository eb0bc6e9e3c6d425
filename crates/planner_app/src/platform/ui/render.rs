use planner_core::{
    AppViewModel, CookingSkill, FormView, ResultsView, Screen, MAX_SERVINGS, MIN_SERVINGS,
};

use super::constants::*;

/// Renders the view model as lines of terminal text.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![RULE.to_string(), header_line(view), RULE.to_string()];

    match &view.screen {
        Screen::Landing => {
            lines.push("Plan a meal, get a shopping list and stay on budget.".to_string());
            lines.push("Type `start` to create your meal plan.".to_string());
        }
        Screen::Form(form) => render_form(form, &mut lines),
        Screen::Loading { message } => {
            lines.push("Creating your meal plan...".to_string());
            lines.push((*message).to_string());
        }
        Screen::Error { message } => {
            lines.push("Something went wrong".to_string());
            lines.push(format!("Error details: {message}"));
            lines.push("Type `retry` to try again or `close` to go back.".to_string());
        }
        Screen::Results(results) => render_results(results, &mut lines),
        Screen::Empty => lines.push("Nothing to show yet.".to_string()),
    }

    lines
}

pub fn header_line(view: &AppViewModel) -> String {
    let status = view
        .backend_status
        .map(|status| status.label())
        .unwrap_or("checking");
    format!("{APP_TITLE} | backend: {status}")
}

/// Backend status details for the `status` command.
pub fn status_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header_line(view)];
    if let Some(message) = &view.backend_message {
        lines.push(message.clone());
    }
    if let Some(config) = &view.backend_config {
        if let Some(version) = &config.api_version {
            lines.push(format!("API version: {version}"));
        }
        lines.push(format!("Web search: {}", configured(config.serper_configured)));
        lines.push(format!("AI model:   {}", configured(config.anthropic_configured)));
    }
    lines
}

fn configured(flag: bool) -> &'static str {
    if flag {
        "configured"
    } else {
        "not configured"
    }
}

fn render_form(form: &FormView, lines: &mut Vec<String>) {
    let draft = &form.draft;
    lines.push("Create Your Meal Plan".to_string());
    lines.push("Suggestions (`pick <n>`):".to_string());
    for (idx, meal) in form.suggestions.iter().enumerate() {
        lines.push(format!("  {:>2}. {meal}", idx + 1));
    }
    lines.push(format!("Meal:     {}", or_unset(&draft.meal_name)));
    lines.push(format!(
        "Servings: {} ({MIN_SERVINGS}-{MAX_SERVINGS})",
        draft.servings
    ));
    lines.push(format!("Budget:   {}", or_unset(&draft.budget)));
    let skills = CookingSkill::ALL
        .iter()
        .map(|skill| {
            let mark = if *skill == draft.cooking_skill { "x" } else { " " };
            format!("[{mark}] {skill}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!(
        "Skill:    {skills} ({})",
        draft.cooking_skill.time_hint()
    ));
    let dietary = form
        .dietary_options
        .iter()
        .map(|tag| {
            let mark = if draft.dietary_restrictions.contains(tag) { "x" } else { " " };
            format!("[{mark}] {tag}")
        })
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("Dietary:  {dietary}"));
    if form.can_submit {
        lines.push("Type `submit` to create your meal plan.".to_string());
    } else {
        lines.push("Set a meal and a budget to submit.".to_string());
    }
}

fn render_results(results: &ResultsView, lines: &mut Vec<String>) {
    lines.push("Your Personalized Meal Plan".to_string());
    let tabs = results
        .tabs
        .iter()
        .map(|tab| {
            if *tab == results.active_tab {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(tabs);
    lines.push(String::new());
    lines.extend(results.content.to_string().lines().map(ToOwned::to_owned));
    lines.push(String::new());
    lines.push("`tab <id>` to switch, `new` to plan another meal.".to_string());
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}
