pub const APP_TITLE: &str = "Alex Meal Planner";
pub const PROMPT: &str = "> ";
pub const RULE: &str = "------------------------------------------------------------";

pub const HELP_TEXT: &str = "\
Commands:
  start                 open the meal plan form
  meal <name>           set the meal name
  pick <n>              use suggestion number <n>
  servings +|-|<n>      change servings (1-12)
  budget <text>         set the budget, e.g. $25 - $50
  diet <tag>            toggle a dietary preference
  skill <level>         beginner, intermediate or advanced
  submit                create the meal plan
  tab <id>              summary, shopping, budget or leftovers
  new                   plan another meal
  retry                 clear the error and re-check the backend
  close                 dismiss the error and go back to the start
  status                show backend status
  help                  show this help
  quit                  exit";
