// Core algorithm exports
pub mod activity;
pub mod experience;
pub mod extract;
pub mod matcher;
pub mod skills;
pub mod vocab;

pub use activity::calculate_activity_score;
pub use experience::calculate_experience_match;
pub use extract::extract_requirements;
pub use matcher::{Matcher, LOCATION_BONUS, MATCH_THRESHOLD, OPEN_SOURCE_BONUS, WINDOW_MULTIPLIER};
pub use skills::{calculate_skill_match, FUZZY_THRESHOLD};
pub use vocab::Vocabulary;
