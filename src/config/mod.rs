#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::utils::error::{QuizError, Result};
use crate::utils::validation::{validate_at_least, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// Bounds applied when building questions and choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionLimits {
    pub max_title_length: usize,
    pub max_choice_text_length: usize,
    pub min_points: u32,
    pub max_points: u32,
    pub default_points: u32,
    pub default_max_selections: usize,
}

impl Default for QuestionLimits {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_choice_text_length: 100,
            min_points: 1,
            max_points: 100,
            default_points: 1,
            default_max_selections: 1,
        }
    }
}

impl Validate for QuestionLimits {
    fn validate(&self) -> Result<()> {
        validate_at_least("limits.max_title_length", "Max title length", self.max_title_length, 1)
            .map_err(to_config_error)?;
        validate_at_least(
            "limits.max_choice_text_length",
            "Max choice text length",
            self.max_choice_text_length,
            1,
        )
        .map_err(to_config_error)?;
        validate_at_least("limits.min_points", "Min points", self.min_points, 1)
            .map_err(to_config_error)?;

        if self.max_points < self.min_points {
            return Err(QuizError::config(format!(
                "max_points ({}) must not be below min_points ({})",
                self.max_points, self.min_points
            )));
        }

        validate_range(
            "limits.default_points",
            "Default points",
            self.default_points,
            self.min_points,
            self.max_points,
        )
        .map_err(to_config_error)?;
        validate_at_least(
            "limits.default_max_selections",
            "Default max selections",
            self.default_max_selections,
            1,
        )
        .map_err(to_config_error)?;

        Ok(())
    }
}

fn to_config_error(e: QuizError) -> QuizError {
    match e {
        QuizError::ValidationError { field, message } => {
            QuizError::config(format!("{}: {}", field, message))
        }
        other => other,
    }
}
