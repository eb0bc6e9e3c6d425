//! Per-tab display data derived from a generated plan.
//!
//! Projection only borrows the result, so calling it repeatedly for the same
//! tab yields the same content.
use std::fmt;
use std::str::FromStr;

use crate::{GroceryItem, MealPlanResult, ShoppingSection};

pub const SUMMARY_FALLBACK: &str = "No summary available.";
pub const SHOPPING_FALLBACK: &str = "Shopping list not available.";
pub const BUDGET_FALLBACK: &str = "Budget data not available.";
pub const LEFTOVERS_FALLBACK: &str = "Leftover data not available.";
pub const UNKNOWN_TAB_FALLBACK: &str = "Content not available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResultTab {
    #[default]
    Summary,
    Shopping,
    Budget,
    Leftovers,
}

impl ResultTab {
    pub const ALL: [ResultTab; 4] = [
        ResultTab::Summary,
        ResultTab::Shopping,
        ResultTab::Budget,
        ResultTab::Leftovers,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ResultTab::Summary => "summary",
            ResultTab::Shopping => "shopping",
            ResultTab::Budget => "budget",
            ResultTab::Leftovers => "leftovers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultTab::Summary => "Summary",
            ResultTab::Shopping => "Shopping List",
            ResultTab::Budget => "Budget",
            ResultTab::Leftovers => "Leftovers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tab: {0}")]
pub struct UnknownTab(pub String);

impl FromStr for ResultTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResultTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Renderable content of one result tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    Summary {
        markdown: String,
        meal: Option<MealDetailsView>,
    },
    Shopping {
        total_budget: Option<String>,
        sections: Vec<ShoppingSectionView>,
        tips: Vec<String>,
    },
    /// Markdown narrative from the backend.
    Narrative(String),
    /// Literal fallback shown when the section is missing.
    Unavailable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetailsView {
    pub meal_name: String,
    pub servings: Option<u32>,
    pub difficulty: Option<String>,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingSectionView {
    /// `"<section> - <estimated total>"`
    pub heading: String,
    /// One `"<name> (<quantity>) - <price>"` line per item, in backend order.
    pub items: Vec<String>,
}

pub fn project_tab(result: &MealPlanResult, tab: ResultTab) -> TabContent {
    let outputs = &result.task_outputs;
    match tab {
        ResultTab::Summary => TabContent::Summary {
            markdown: result
                .summary
                .clone()
                .unwrap_or_else(|| SUMMARY_FALLBACK.to_string()),
            meal: outputs.meal_planning.as_ref().map(|meal| MealDetailsView {
                meal_name: meal.meal_name.clone(),
                servings: meal.servings,
                difficulty: meal.difficulty_level.clone(),
                ingredients: meal.researched_ingredients.clone(),
            }),
        },
        ResultTab::Shopping => match &outputs.shopping {
            Some(shopping) => TabContent::Shopping {
                total_budget: shopping.total_budget.clone(),
                sections: shopping.sections.iter().map(section_view).collect(),
                tips: shopping.shopping_tips.clone(),
            },
            None => TabContent::Unavailable(SHOPPING_FALLBACK),
        },
        ResultTab::Budget => narrative_or(outputs.budget.as_deref(), BUDGET_FALLBACK),
        ResultTab::Leftovers => narrative_or(outputs.leftover.as_deref(), LEFTOVERS_FALLBACK),
    }
}

/// Projects by tab identifier; unknown identifiers yield the generic fallback.
pub fn project_tab_id(result: &MealPlanResult, tab_id: &str) -> TabContent {
    match tab_id.parse::<ResultTab>() {
        Ok(tab) => project_tab(result, tab),
        Err(_) => TabContent::Unavailable(UNKNOWN_TAB_FALLBACK),
    }
}

fn narrative_or(text: Option<&str>, fallback: &'static str) -> TabContent {
    match text {
        Some(text) => TabContent::Narrative(text.to_string()),
        None => TabContent::Unavailable(fallback),
    }
}

fn section_view(section: &ShoppingSection) -> ShoppingSectionView {
    ShoppingSectionView {
        heading: format!("{} - {}", section.name, section.estimated_total),
        items: section.items.iter().map(item_label).collect(),
    }
}

fn item_label(item: &GroceryItem) -> String {
    format!("{} ({}) - {}", item.name, item.quantity, item.estimated_price)
}

impl fmt::Display for TabContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabContent::Summary { markdown, meal } => {
                write!(f, "{markdown}")?;
                if let Some(meal) = meal {
                    write!(f, "\n\nMeal Details\n{}", meal.meal_name)?;
                    if let Some(servings) = meal.servings {
                        write!(f, "\nServings: {servings}")?;
                    }
                    if let Some(difficulty) = &meal.difficulty {
                        write!(f, "\nDifficulty: {difficulty}")?;
                    }
                    for ingredient in &meal.ingredients {
                        write!(f, "\n  - {ingredient}")?;
                    }
                }
                Ok(())
            }
            TabContent::Shopping {
                total_budget,
                sections,
                tips,
            } => {
                let mut blocks = Vec::new();
                if let Some(total) = total_budget {
                    blocks.push(format!("Total budget: {total}"));
                }
                for section in sections {
                    let mut block = section.heading.clone();
                    for item in &section.items {
                        block.push_str(&format!("\n  - {item}"));
                    }
                    blocks.push(block);
                }
                if !tips.is_empty() {
                    let mut block = "Shopping tips".to_string();
                    for tip in tips {
                        block.push_str(&format!("\n  * {tip}"));
                    }
                    blocks.push(block);
                }
                f.write_str(&blocks.join("\n"))
            }
            TabContent::Narrative(text) => f.write_str(text),
            TabContent::Unavailable(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MealPlanningOutput, ShoppingOutput, TaskOutputs};

    fn result_with(outputs: TaskOutputs) -> MealPlanResult {
        MealPlanResult {
            summary: None,
            task_outputs: outputs,
            request_info: None,
        }
    }

    #[test]
    fn empty_result_uses_fallbacks() {
        let result = MealPlanResult::default();

        assert_eq!(
            project_tab(&result, ResultTab::Summary),
            TabContent::Summary {
                markdown: SUMMARY_FALLBACK.to_string(),
                meal: None,
            }
        );
        assert_eq!(
            project_tab(&result, ResultTab::Shopping),
            TabContent::Unavailable(SHOPPING_FALLBACK)
        );
        assert_eq!(
            project_tab(&result, ResultTab::Budget).to_string(),
            "Budget data not available."
        );
        assert_eq!(
            project_tab(&result, ResultTab::Leftovers).to_string(),
            "Leftover data not available."
        );
    }

    #[test]
    fn unknown_tab_id_yields_generic_fallback() {
        let result = MealPlanResult::default();
        assert_eq!(
            project_tab_id(&result, "nutrition"),
            TabContent::Unavailable(UNKNOWN_TAB_FALLBACK)
        );
        assert_eq!(
            project_tab_id(&result, "Shopping"),
            TabContent::Unavailable(UNKNOWN_TAB_FALLBACK)
        );
    }

    #[test]
    fn summary_includes_meal_details_when_present() {
        let result = result_with(TaskOutputs {
            meal_planning: Some(MealPlanningOutput {
                meal_name: "Thai Green Curry".to_string(),
                servings: Some(2),
                difficulty_level: Some("medium".to_string()),
                researched_ingredients: Vec::new(),
            }),
            ..TaskOutputs::default()
        });

        let content = project_tab(&result, ResultTab::Summary);
        let TabContent::Summary { meal, .. } = &content else {
            panic!("expected summary content, got {content:?}");
        };
        let meal = meal.as_ref().expect("meal details");
        assert_eq!(meal.meal_name, "Thai Green Curry");
        assert!(meal.ingredients.is_empty());
        assert!(content.to_string().contains("Servings: 2"));
        assert!(content.to_string().contains("Difficulty: medium"));
    }

    #[test]
    fn shopping_present_but_empty_is_not_a_fallback() {
        let result = result_with(TaskOutputs {
            shopping: Some(ShoppingOutput::default()),
            ..TaskOutputs::default()
        });
        assert_eq!(
            project_tab(&result, ResultTab::Shopping),
            TabContent::Shopping {
                total_budget: None,
                sections: Vec::new(),
                tips: Vec::new(),
            }
        );
    }

    #[test]
    fn shopping_shows_budget_sections_and_tips() {
        let result = result_with(TaskOutputs {
            shopping: Some(ShoppingOutput {
                total_budget: Some("$24.50".to_string()),
                sections: vec![ShoppingSection {
                    name: "Produce".to_string(),
                    estimated_total: "$4.00".to_string(),
                    items: vec![GroceryItem {
                        name: "Basil".to_string(),
                        quantity: "1 bunch".to_string(),
                        estimated_price: "$2.00".to_string(),
                        category: None,
                    }],
                }],
                shopping_tips: vec!["Buy pasta in bulk".to_string()],
            }),
            ..TaskOutputs::default()
        });

        assert_eq!(
            project_tab(&result, ResultTab::Shopping).to_string(),
            "Total budget: $24.50\n\
             Produce - $4.00\n  - Basil (1 bunch) - $2.00\n\
             Shopping tips\n  * Buy pasta in bulk"
        );
    }

    #[test]
    fn projection_is_repeatable() {
        let result = result_with(TaskOutputs {
            budget: Some("Spend about $30".to_string()),
            ..TaskOutputs::default()
        });
        let before = result.clone();
        let first = project_tab_id(&result, "budget");
        let second = project_tab_id(&result, "budget");
        assert_eq!(first, second);
        assert_eq!(first, TabContent::Narrative("Spend about $30".to_string()));
        assert_eq!(result, before);
    }
}
