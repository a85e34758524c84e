//! Proficiency levels — named milestones defined by prerequisite topics.

mod level;
mod list;

pub use level::{LevelRecord, ProficiencyLevel};
pub use list::{LevelListRecord, ProficiencyLevelList};
