pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, QuestionLimits};
pub use domain::model::{Choice, ChoiceId, Question, QuestionId};
pub use utils::error::{QuizError, Result};
