use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Experience {
    pub const ALL: [Experience; 4] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Advanced,
        Experience::Expert,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
            Experience::Expert => "expert",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Experience::Beginner => "Beginner (0-1 years)",
            Experience::Intermediate => "Intermediate (1-3 years)",
            Experience::Advanced => "Advanced (3+ years)",
            Experience::Expert => "Expert (5+ years)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStatus {
    #[default]
    Solo,
    HaveTeam,
    LookingForTeam,
}

impl TeamStatus {
    pub const ALL: [TeamStatus; 3] = [
        TeamStatus::Solo,
        TeamStatus::HaveTeam,
        TeamStatus::LookingForTeam,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            TeamStatus::Solo => "solo",
            TeamStatus::HaveTeam => "have-team",
            TeamStatus::LookingForTeam => "looking-for-team",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamStatus::Solo => "Hacking Solo",
            TeamStatus::HaveTeam => "Have a Team",
            TeamStatus::LookingForTeam => "Looking for Team",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Experience,
    Terms,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Experience level is required")]
    ExperienceRequired,
    #[error("You must agree to the terms")]
    TermsNotAccepted,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NameRequired => Field::Name,
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::ExperienceRequired => Field::Experience,
            FieldError::TermsNotAccepted => Field::Terms,
        }
    }
}

/// At most one error per field.
pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub experience: Option<Experience>,
    pub interests: String,
    pub team_status: TeamStatus,
    pub agreed_to_terms: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut reject = |error: FieldError| {
            errors.insert(error.field(), error);
        };

        if self.name.trim().is_empty() {
            reject(FieldError::NameRequired);
        }
        if self.email.trim().is_empty() {
            reject(FieldError::EmailRequired);
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            reject(FieldError::EmailInvalid);
        }
        if self.experience.is_none() {
            reject(FieldError::ExperienceRequired);
        }
        if !self.agreed_to_terms {
            reject(FieldError::TermsNotAccepted);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// What gets logged on a successful submission. Leaves out anything
    /// that identifies the participant.
    pub fn summary(&self) -> RegistrationSummary {
        RegistrationSummary {
            experience: self.experience,
            team_status: self.team_status,
            has_interests: !self.interests.trim().is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationSummary {
    pub experience: Option<Experience>,
    pub team_status: TeamStatus,
    pub has_interests: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Experience(Option<Experience>),
    Interests(String),
    TeamStatus(TeamStatus),
    AgreedToTerms(bool),
}

impl FieldUpdate {
    /// Field whose error the update clears, if it has one.
    pub fn field(&self) -> Option<Field> {
        match self {
            FieldUpdate::Name(_) => Some(Field::Name),
            FieldUpdate::Email(_) => Some(Field::Email),
            FieldUpdate::Experience(_) => Some(Field::Experience),
            FieldUpdate::AgreedToTerms(_) => Some(Field::Terms),
            FieldUpdate::Interests(_) | FieldUpdate::TeamStatus(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(RegistrationSummary),
    Rejected(FieldErrors),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationMachine {
    form: RegistrationForm,
    errors: FieldErrors,
}

impl Default for RegistrationMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationMachine {
    pub fn new() -> Self {
        Self {
            form: RegistrationForm::default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        if let Some(field) = update.field() {
            self.errors.remove(&field);
        }
        match update {
            FieldUpdate::Name(name) => self.form.name = name,
            FieldUpdate::Email(email) => self.form.email = email,
            FieldUpdate::Experience(experience) => self.form.experience = experience,
            FieldUpdate::Interests(interests) => self.form.interests = interests,
            FieldUpdate::TeamStatus(status) => self.form.team_status = status,
            FieldUpdate::AgreedToTerms(agreed) => self.form.agreed_to_terms = agreed,
        }
    }

    /// Validates the form. On success the form resets and the machine is
    /// ready for another entry; on failure the errors are kept for display.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.form.validate() {
            Ok(()) => {
                let summary = self.form.summary();
                self.form = RegistrationForm::default();
                self.errors.clear();
                SubmitOutcome::Accepted(summary)
            }
            Err(errors) => {
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Dipper Pines".to_string(),
            email: "dipper@mysteryshack.com".to_string(),
            experience: Some(Experience::Intermediate),
            interests: "Journals, AI".to_string(),
            team_status: TeamStatus::LookingForTeam,
            agreed_to_terms: true,
        }
    }

    #[test]
    fn empty_name_errors_only_on_name() {
        let form = RegistrationForm {
            name: "   ".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::NameRequired));
        assert_eq!(errors[&Field::Name].to_string(), "Name is required");
    }

    #[test]
    fn malformed_email_errors_only_on_email() {
        let form = RegistrationForm {
            email: "foo".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email].to_string(), "Email is invalid");
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = RegistrationForm::default().validate().unwrap_err();
        let messages: Vec<String> = errors.values().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Email is required",
                "Experience level is required",
                "You must agree to the terms",
            ]
        );
    }

    #[test]
    fn email_pattern_matches_loose_addresses() {
        for email in ["a@b.co", "first.last@sub.example.org", " x@y.z "] {
            assert!(EMAIL_PATTERN.is_match(email), "{email}");
        }
        for email in ["foo", "foo@bar", "@.", "foo bar@baz"] {
            let form = RegistrationForm {
                email: email.to_string(),
                ..valid_form()
            };
            let rejected = form.validate().is_err();
            assert_eq!(rejected, !EMAIL_PATTERN.is_match(email), "{email}");
        }
    }

    #[test]
    fn successful_submit_resets_form() {
        let mut machine = RegistrationMachine::new();
        let form = valid_form();
        machine.apply(FieldUpdate::Name(form.name));
        machine.apply(FieldUpdate::Email(form.email));
        machine.apply(FieldUpdate::Experience(form.experience));
        machine.apply(FieldUpdate::Interests(form.interests));
        machine.apply(FieldUpdate::TeamStatus(form.team_status));
        machine.apply(FieldUpdate::AgreedToTerms(true));

        let outcome = machine.submit();
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(RegistrationSummary {
                experience: Some(Experience::Intermediate),
                team_status: TeamStatus::LookingForTeam,
                has_interests: true,
            })
        );
        assert_eq!(machine.form(), &RegistrationForm::default());
        assert_eq!(machine.form().team_status, TeamStatus::Solo);
        assert!(machine.errors().is_empty());

        // ready for the next entry straight away
        assert!(matches!(machine.submit(), SubmitOutcome::Rejected(_)));
        assert_eq!(machine.errors().len(), 4);
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut machine = RegistrationMachine::new();
        assert!(matches!(machine.submit(), SubmitOutcome::Rejected(_)));
        assert_eq!(machine.errors().len(), 4);

        machine.apply(FieldUpdate::Email("x".to_string()));
        assert_eq!(machine.error(Field::Email), None);
        assert_eq!(machine.error(Field::Name), Some(&FieldError::NameRequired));

        machine.apply(FieldUpdate::TeamStatus(TeamStatus::HaveTeam));
        assert_eq!(machine.errors().len(), 3);
        // the form keeps what was typed after a rejected submit
        assert_eq!(machine.form().email, "x");
    }

    #[test]
    fn summary_serializes_without_identity() {
        let json = serde_json::to_string(&valid_form().summary()).unwrap();
        assert_eq!(
            json,
            r#"{"experience":"intermediate","team_status":"looking-for-team","has_interests":true}"#
        );
        assert!(!json.contains("Dipper"));
    }

    #[test]
    fn option_values_round_trip_through_select() {
        for level in Experience::ALL {
            assert_eq!(Experience::from_value(level.value()), Some(level));
        }
        assert_eq!(Experience::from_value(""), None);
        assert_eq!(TeamStatus::default().value(), "solo");
    }
}
