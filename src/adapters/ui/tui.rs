//! Implements InputPort. Inquire-based interactive entry of a single workout.
//!
//! Select a workout type, enter each positional field, see the summary. Repeat until Quit.

use crate::domain::{DomainError, Field, WorkoutKind, read_package};
use crate::ports::{InputPort, ReportSink};
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{CustomType, InquireError, Select};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Applies the prompt theme globally for all inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new(">").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("->").with_fg(Color::LightCyan))
        .with_answer(StyleSheet::new().with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// Menu entry: a workout type or Quit.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuChoice {
    Workout(WorkoutKind),
    Quit,
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Workout(WorkoutKind::Swimming) => write!(f, "Swimming (SWM)"),
            MenuChoice::Workout(WorkoutKind::Running) => write!(f, "Running (RUN)"),
            MenuChoice::Workout(WorkoutKind::SportsWalking) => write!(f, "Sports walking (WLK)"),
            MenuChoice::Quit => write!(f, "Quit"),
        }
    }
}

fn menu_choices() -> Vec<MenuChoice> {
    WorkoutKind::ALL
        .into_iter()
        .map(MenuChoice::Workout)
        .chain(std::iter::once(MenuChoice::Quit))
        .collect()
}

fn input_error(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

/// Esc on a field prompt drops the workout and goes back to the menu.
fn field_answer<T>(answer: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(input_error(e)),
    }
}

fn prompt_field(field: Field) -> Result<Option<f64>, DomainError> {
    let prompt = format!("{}:", field.name());
    if field.is_count() {
        let answer = CustomType::<u64>::new(&prompt)
            .with_error_message("Enter a non-negative whole number")
            .prompt();
        field_answer(answer.map(|v| v as f64))
    } else {
        let answer = CustomType::<f64>::new(&prompt)
            .with_error_message("Enter a number")
            .prompt();
        field_answer(answer)
    }
}

/// TUI adapter. Inquire prompts; summaries go to the configured sink.
pub struct TuiInputPort {
    sink: Arc<dyn ReportSink>,
}

impl TuiInputPort {
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = match Select::new("Workout type", menu_choices()).prompt() {
                Ok(choice) => choice,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(());
                }
                Err(e) => return Err(input_error(e)),
            };
            let MenuChoice::Workout(kind) = choice else {
                return Ok(());
            };

            let Some(data) = kind
                .fields()
                .iter()
                .map(|f| prompt_field(*f).transpose())
                .collect::<Option<Result<Vec<_>, _>>>()
                .transpose()?
            else {
                continue;
            };

            match read_package(kind.code(), &data) {
                Ok(training) => self.sink.publish(&training.summary()).await?,
                Err(e) => {
                    warn!(workout_type = %kind, error = %e, "workout rejected");
                    println!("{}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_workout_then_quit() {
        let choices = menu_choices();
        assert_eq!(choices.len(), WorkoutKind::ALL.len() + 1);
        assert_eq!(choices.last(), Some(&MenuChoice::Quit));
        assert_eq!(choices[1].to_string(), "Running (RUN)");
    }

    #[test]
    fn test_field_cancel_returns_to_menu() {
        assert_eq!(field_answer(Ok(75.0)), Ok(Some(75.0)));
        assert_eq!(
            field_answer::<f64>(Err(InquireError::OperationCanceled)),
            Ok(None)
        );
        assert!(matches!(
            field_answer::<f64>(Err(InquireError::NotTTY)),
            Err(DomainError::Input(_))
        ));
    }
}
