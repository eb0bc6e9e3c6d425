use planner_core::{CookingSkill, Msg, ResultTab, UNKNOWN_TAB_FALLBACK};

/// One line of user input, or an engine completion routed through the same queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Status,
    Quit,
    /// Input that could not be turned into a message; carries the text to show.
    Invalid(String),
    Empty,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msg = match verb.to_ascii_lowercase().as_str() {
        "help" | "?" => return Command::Help,
        "status" => return Command::Status,
        "quit" | "exit" => return Command::Quit,
        "start" => Msg::GetStartedClicked,
        "submit" => Msg::FormSubmitted,
        "new" => Msg::StartNewClicked,
        "retry" => Msg::RetryClicked,
        "close" | "back" => Msg::ErrorDismissed,
        "meal" => Msg::MealNameChanged(rest.to_string()),
        "budget" => Msg::BudgetChanged(rest.to_string()),
        "diet" if !rest.is_empty() => Msg::DietaryToggled(rest.to_string()),
        "pick" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Msg::MealSuggestionPicked(n - 1),
            _ => return Command::Invalid(format!("Not a suggestion number: {rest:?}")),
        },
        "servings" => match rest {
            "+" => Msg::ServingsIncremented,
            "-" => Msg::ServingsDecremented,
            other => match other.parse::<u8>() {
                Ok(n) => Msg::ServingsSet(n),
                Err(_) => return Command::Invalid(format!("Not a servings count: {other:?}")),
            },
        },
        "skill" => match rest.parse::<CookingSkill>() {
            Ok(skill) => Msg::SkillSelected(skill),
            Err(err) => return Command::Invalid(err.to_string()),
        },
        "tab" => match rest.parse::<ResultTab>() {
            Ok(tab) => Msg::TabSelected(tab),
            Err(_) => return Command::Invalid(UNKNOWN_TAB_FALLBACK.to_string()),
        },
        _ => return Command::Invalid(format!("Unknown command {verb:?}; type `help`.")),
    };
    Command::Dispatch(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_commands_map_to_hooks() {
        assert_eq!(parse_command("start"), Command::Dispatch(Msg::GetStartedClicked));
        assert_eq!(parse_command("  NEW "), Command::Dispatch(Msg::StartNewClicked));
        assert_eq!(parse_command("retry"), Command::Dispatch(Msg::RetryClicked));
        assert_eq!(parse_command("close"), Command::Dispatch(Msg::ErrorDismissed));
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn form_commands_keep_free_text() {
        assert_eq!(
            parse_command("meal Pasta  Carbonara"),
            Command::Dispatch(Msg::MealNameChanged("Pasta  Carbonara".to_string()))
        );
        assert_eq!(
            parse_command("budget $25 - $50"),
            Command::Dispatch(Msg::BudgetChanged("$25 - $50".to_string()))
        );
        assert_eq!(
            parse_command("pick 3"),
            Command::Dispatch(Msg::MealSuggestionPicked(2))
        );
        assert_eq!(parse_command("servings +"), Command::Dispatch(Msg::ServingsIncremented));
        assert_eq!(parse_command("servings 6"), Command::Dispatch(Msg::ServingsSet(6)));
        assert_eq!(
            parse_command("skill advanced"),
            Command::Dispatch(Msg::SkillSelected(CookingSkill::Advanced))
        );
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(parse_command("pick 0"), Command::Invalid(_)));
        assert!(matches!(parse_command("servings lots"), Command::Invalid(_)));
        assert!(matches!(parse_command("skill chef"), Command::Invalid(_)));
        assert!(matches!(parse_command("diet"), Command::Invalid(_)));
        assert_eq!(
            parse_command("tab nutrition"),
            Command::Invalid("Content not available.".to_string())
        );
    }
}
