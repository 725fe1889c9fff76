pub mod prompts;
pub mod render;

pub use prompts::{prompt_food_log, prompt_name_list, prompt_profile, prompt_yes_no};
pub use render::{
    display_body, display_document, display_food_entries, display_user_definition_foods,
};
