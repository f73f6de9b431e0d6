//! Application state for the CareFinder TUI.
//!
//! Everything the screen shows is derived from `App`: the router says which
//! page is up, the form holds the questionnaire answers, and `outcome` holds
//! the last submission's result. Key presses are translated to `Action`s in
//! `main.rs` and applied here.

use carefinder_contracts::{
    assessment::Assessment,
    error::CareFinderError,
    form::SymptomForm,
    report::{Duration, RedFlag, Severity},
};
use carefinder_core::{Assessor, Page, Router};

/// One selectable row of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    RedFlag(RedFlag),
    Severity(Severity),
    Duration(Duration),
    Submit,
}

/// Questionnaire rows in display order.
pub fn fields() -> Vec<Field> {
    RedFlag::ALL
        .into_iter()
        .map(Field::RedFlag)
        .chain(Severity::ALL.into_iter().map(Field::Severity))
        .chain(Duration::ALL.into_iter().map(Field::Duration))
        .chain(std::iter::once(Field::Submit))
        .collect()
}

/// What the user asked for, independent of which key they pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Goto(Page),
    NextPage,
    PreviousPage,
    CursorUp,
    CursorDown,
    /// Toggle the checkbox, pick the radio option, or press the button
    /// under the cursor.
    Activate,
    /// Submit the questionnaire from anywhere on the page.
    Submit,
    ClearForm,
}

/// Result of the last "Get Guidance" press.
#[derive(Debug, Clone)]
pub enum Outcome {
    Assessed(Assessment),
    /// The form was incomplete; nothing was evaluated.
    Incomplete { message: String },
}

pub struct App {
    pub router: Router,
    pub form: SymptomForm,
    /// Index into `fields()`.
    pub cursor: usize,
    pub outcome: Option<Outcome>,
    pub should_quit: bool,
    assessor: Assessor,
}

impl App {
    pub fn new(assessor: Assessor) -> Self {
        Self {
            router: Router::new(),
            form: SymptomForm::new(),
            cursor: 0,
            outcome: None,
            should_quit: false,
            assessor,
        }
    }

    pub fn current_field(&self) -> Field {
        let all = fields();
        all[self.cursor.min(all.len() - 1)]
    }

    /// Return true if `field` is checked (checkbox) or selected (radio).
    pub fn is_selected(&self, field: Field) -> bool {
        match field {
            Field::RedFlag(flag) => self.form.red_flags.contains(flag),
            Field::Severity(s) => self.form.severity == Some(s),
            Field::Duration(d) => self.form.duration == Some(d),
            Field::Submit => false,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Goto(page) => {
                self.router.navigate(page);
            }
            Action::NextPage => {
                self.router.next();
            }
            Action::PreviousPage => {
                self.router.previous();
            }
            // The remaining actions only mean something on the questionnaire.
            _ if self.router.current() != Page::Questionnaire => {}
            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::CursorDown => {
                self.cursor = (self.cursor + 1).min(fields().len() - 1);
            }
            Action::Activate => self.activate(),
            Action::Submit => self.submit(),
            Action::ClearForm => {
                self.form.clear();
                self.outcome = None;
                self.cursor = 0;
            }
        }
    }

    fn activate(&mut self) {
        match self.current_field() {
            Field::RedFlag(flag) => self.form.toggle_red_flag(flag),
            Field::Severity(s) => self.form.set_severity(s),
            Field::Duration(d) => self.form.set_duration(d),
            Field::Submit => {
                self.submit();
                return;
            }
        }
        // A shown result no longer describes the edited answers.
        self.outcome = None;
    }

    fn submit(&mut self) {
        self.outcome = Some(match self.assessor.assess(&self.form) {
            Ok(assessment) => Outcome::Assessed(assessment),
            Err(CareFinderError::InvalidReport { field, .. }) => Outcome::Incomplete {
                message: format!("Please answer the {} question before getting guidance.", field),
            },
            Err(e) => Outcome::Incomplete {
                message: e.to_string(),
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use carefinder_contracts::recommendation::Recommendation;
    use carefinder_rules::RuleEngine;

    use super::*;

    fn app() -> App {
        let mut app = App::new(Assessor::new(Box::new(RuleEngine::standard())));
        app.apply(Action::Goto(Page::Questionnaire));
        app
    }

    fn move_to(app: &mut App, field: Field) {
        app.cursor = fields()
            .iter()
            .position(|f| *f == field)
            .unwrap_or_else(|| panic!("no such field {:?}", field));
    }

    fn select(app: &mut App, field: Field) {
        move_to(app, field);
        app.apply(Action::Activate);
    }

    #[test]
    fn questionnaire_has_thirteen_rows_ending_in_submit() {
        let all = fields();
        assert_eq!(all.len(), 13);
        assert_eq!(all.last(), Some(&Field::Submit));
    }

    #[test]
    fn starts_on_home_with_empty_form() {
        let app = App::new(Assessor::new(Box::new(RuleEngine::standard())));
        assert_eq!(app.router.current(), Page::Home);
        assert!(!app.form.is_complete());
        assert!(app.outcome.is_none());
    }

    #[test]
    fn page_navigation_cycles() {
        let mut app = app();
        app.apply(Action::NextPage);
        assert_eq!(app.router.current(), Page::Home);
        app.apply(Action::PreviousPage);
        assert_eq!(app.router.current(), Page::Questionnaire);
    }

    #[test]
    fn submitting_empty_form_reprompts() {
        let mut app = app();
        app.apply(Action::Submit);

        match &app.outcome {
            Some(Outcome::Incomplete { message }) => {
                assert!(message.contains("severity"), "unexpected message: {message}");
            }
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn red_flag_routes_to_emergency_care() {
        let mut app = app();
        select(&mut app, Field::RedFlag(RedFlag::Breathing));
        select(&mut app, Field::Severity(Severity::Mild));
        select(&mut app, Field::Duration(Duration::LessThanADay));
        select(&mut app, Field::Submit);

        match &app.outcome {
            Some(Outcome::Assessed(a)) => {
                assert_eq!(a.recommendation, Recommendation::EmergencyCare)
            }
            other => panic!("expected Assessed, got {:?}", other),
        }
    }

    #[test]
    fn radio_rows_replace_previous_choice() {
        let mut app = app();
        select(&mut app, Field::Severity(Severity::Mild));
        select(&mut app, Field::Severity(Severity::Severe));

        assert!(app.is_selected(Field::Severity(Severity::Severe)));
        assert!(!app.is_selected(Field::Severity(Severity::Mild)));
    }

    #[test]
    fn editing_answers_clears_stale_result() {
        let mut app = app();
        select(&mut app, Field::Severity(Severity::Severe));
        select(&mut app, Field::Duration(Duration::LessThanADay));
        app.apply(Action::Submit);
        assert!(matches!(app.outcome, Some(Outcome::Assessed(_))));

        select(&mut app, Field::Severity(Severity::Mild));
        assert!(app.outcome.is_none());
    }

    #[test]
    fn clear_form_resets_answers() {
        let mut app = app();
        select(&mut app, Field::RedFlag(RedFlag::Seizures));
        select(&mut app, Field::Severity(Severity::Moderate));
        app.apply(Action::ClearForm);

        assert_eq!(app.form, SymptomForm::new());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn form_keys_are_ignored_off_the_questionnaire() {
        let mut app = app();
        app.apply(Action::Goto(Page::Guidance));
        app.apply(Action::Activate);
        app.apply(Action::CursorDown);

        assert_eq!(app.cursor, 0);
        assert!(!app.form.red_flags.any());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = app();
        app.apply(Action::CursorUp);
        assert_eq!(app.cursor, 0);
        for _ in 0..50 {
            app.apply(Action::CursorDown);
        }
        assert_eq!(app.current_field(), Field::Submit);
    }
}
