use std::collections::BTreeSet;

use crate::{CookingSkill, MealPlanRequest, Servings};

/// In-progress request edited on the form view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub meal_name: String,
    pub servings: Servings,
    pub budget: String,
    pub dietary_restrictions: BTreeSet<String>,
    pub cooking_skill: CookingSkill,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submittable(&self) -> bool {
        self.to_request().has_required_fields()
    }

    /// Adds the tag if missing, removes it otherwise. Blank tags are ignored.
    pub fn toggle_dietary(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return false;
        }
        if !self.dietary_restrictions.remove(&tag) {
            self.dietary_restrictions.insert(tag);
        }
        true
    }

    pub fn to_request(&self) -> MealPlanRequest {
        MealPlanRequest {
            meal_name: self.meal_name.trim().to_string(),
            servings: self.servings,
            budget: self.budget.trim().to_string(),
            dietary_restrictions: self.dietary_restrictions.clone(),
            cooking_skill: self.cooking_skill,
        }
    }
}
