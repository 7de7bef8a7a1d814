use crate::config::QuestionLimits;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_at_least, validate_max_count, validate_range, validate_text, Validate,
};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub type QuestionId = u64;
pub type ChoiceId = u32;

static NEXT_QUESTION_ID: AtomicU64 = AtomicU64::new(1);

fn next_question_id() -> QuestionId {
    NEXT_QUESTION_ID.fetch_add(1, Ordering::Relaxed)
}

/// One selectable answer. Only created through [`Question::add_choice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.text)?;
        if self.is_correct {
            write!(f, " *")?;
        }
        Ok(())
    }
}

/// A quiz question owning an ordered list of choices.
///
/// Every mutation validates its input before touching state, so a failed
/// call leaves the question unchanged.
///
/// Not `Clone`: a copy would carry the same process-unique id.
///
/// ```compile_fail
/// let q = quiz_model::Question::new("q1").unwrap();
/// let copy = q.clone();
/// ```
#[derive(Debug)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    // Never decremented, so removed ids are not handed out again.
    next_choice_id: ChoiceId,
    limits: QuestionLimits,
}

impl Question {
    /// Creates a question with the default points and max selections.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let limits = QuestionLimits::default();
        Self::with_limits(
            title,
            limits.default_points,
            limits.default_max_selections,
            limits,
        )
    }

    pub fn with_points(title: impl Into<String>, points: u32) -> Result<Self> {
        let limits = QuestionLimits::default();
        Self::with_limits(title, points, limits.default_max_selections, limits)
    }

    pub fn with_options(
        title: impl Into<String>,
        points: u32,
        max_selections: usize,
    ) -> Result<Self> {
        Self::with_limits(title, points, max_selections, QuestionLimits::default())
    }

    pub fn with_limits(
        title: impl Into<String>,
        points: u32,
        max_selections: usize,
        limits: QuestionLimits,
    ) -> Result<Self> {
        limits.validate()?;
        let title = title.into();

        validate_text("title", "Title", &title, limits.max_title_length)?;
        validate_range("points", "Points", points, limits.min_points, limits.max_points)?;
        validate_at_least("max_selections", "Max selections", max_selections, 1)?;

        let id = next_question_id();
        tracing::debug!(question_id = id, points, max_selections, "created question");

        Ok(Self {
            id,
            title,
            points,
            max_selections,
            choices: Vec::new(),
            next_choice_id: 1,
            limits,
        })
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn limits(&self) -> &QuestionLimits {
        &self.limits
    }

    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    /// Ids of the correct choices, in list order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }

    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<&Choice> {
        let text = text.into();
        validate_text("text", "Text", &text, self.limits.max_choice_text_length)?;

        let id = self.next_choice_id;
        self.next_choice_id += 1;
        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });
        tracing::debug!(question_id = self.id, choice_id = id, is_correct, "added choice");

        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Removes the choice with `choice_id`. Unknown ids are ignored.
    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> Option<Choice> {
        let index = self.choices.iter().position(|c| c.id == choice_id)?;
        tracing::debug!(question_id = self.id, choice_id, "removed choice");
        Some(self.choices.remove(index))
    }

    pub fn remove_all_choices(&mut self) {
        tracing::debug!(
            question_id = self.id,
            removed = self.choices.len(),
            "removed all choices"
        );
        self.choices.clear();
    }

    /// Returns the ids from `choice_ids` that name correct choices, keeping
    /// the caller's order. Ids without a matching choice are dropped.
    pub fn select_choices(&self, choice_ids: &[ChoiceId]) -> Result<Vec<ChoiceId>> {
        validate_max_count("choice_ids", choice_ids.len(), self.max_selections)?;

        let selected = choice_ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect();
        Ok(selected)
    }

    /// Marks the listed choices correct. Other choices keep their flag.
    pub fn set_correct_choices(&mut self, choice_ids: &[ChoiceId]) {
        for choice in self
            .choices
            .iter_mut()
            .filter(|c| choice_ids.contains(&c.id))
        {
            choice.is_correct = true;
        }
        tracing::debug!(question_id = self.id, ?choice_ids, "set correct choices");
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({} pts)", self.id, self.title, self.points)
    }
}
