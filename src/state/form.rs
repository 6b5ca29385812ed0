// Contact form fields, validation and the simulated send outcome.
use serde::{Deserialize, Serialize};

pub const MIN_NAME_CHARS: usize = 2;
pub const MAX_SUBJECT_CHARS: usize = 120;
pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormTuning {
    /// How long the fake send takes.
    pub delay_ms: i32,
    /// Probability in [0, 1] that a send succeeds.
    pub success_rate: f64,
}

impl Default for FormTuning {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            success_rate: 0.9,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Subject => "contact-subject",
            Field::Message => "contact-message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn check(&self, field: Field) -> Option<FieldError> {
        let message = match field {
            Field::Name if self.name.trim().chars().count() < MIN_NAME_CHARS => {
                "Please enter your name."
            }
            Field::Email if self.email.trim().is_empty() => "Please enter your email address.",
            Field::Email if !looks_like_email(self.email.trim()) => {
                "Please enter a valid email address."
            }
            Field::Subject if self.subject.trim().chars().count() > MAX_SUBJECT_CHARS => {
                "Subject is too long."
            }
            Field::Message if self.message.trim().chars().count() < MIN_MESSAGE_CHARS => {
                "Message should be at least 10 characters."
            }
            _ => return None,
        };
        Some(FieldError { field, message })
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = Field::ALL.iter().filter_map(|f| self.check(*f)).collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// `local@domain.tld`, no whitespace, one `@`, a dot inside the domain.
pub fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmitStatus {
    /// `roll` is a uniform sample in [0, 1).
    pub fn from_roll(roll: f64, tuning: &FormTuning) -> Self {
        if roll < tuning.success_rate {
            SubmitStatus::Sent
        } else {
            SubmitStatus::Failed
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitStatus::Sent => Some("Thanks for reaching out! I'll get back to you soon."),
            SubmitStatus::Failed => {
                Some("Something went wrong while sending. Please try again in a moment.")
            }
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Sending => "Sending…",
            _ => "Send Message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactDraft {
        ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "Would love to chat about a project.".into(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn each_field_reports_itself() {
        let d = ContactDraft {
            name: " A ".into(),
            email: "nope".into(),
            subject: "x".repeat(121),
            message: "short".into(),
        };
        let errs = d.validate().unwrap_err();
        let fields: Vec<Field> = errs.iter().map(|e| e.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn empty_email_has_its_own_message() {
        let mut d = valid();
        d.set(Field::Email, "   ".into());
        assert_eq!(
            d.check(Field::Email).map(|e| e.message),
            Some("Please enter your email address.")
        );
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last+tag@sub.example.org"] {
            assert!(looks_like_email(ok), "{ok}");
        }
        for bad in ["", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.io", "a@b@c.io"] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }

    #[test]
    fn message_length_counts_chars_not_bytes() {
        let mut d = valid();
        d.set(Field::Message, "ééééééééé".into());
        assert!(d.check(Field::Message).is_some());
        d.set(Field::Message, "éééééééééé".into());
        assert!(d.check(Field::Message).is_none());
    }

    #[test]
    fn roll_decides_outcome() {
        let t = FormTuning::default();
        assert_eq!(SubmitStatus::from_roll(0.0, &t), SubmitStatus::Sent);
        assert_eq!(SubmitStatus::from_roll(0.8999, &t), SubmitStatus::Sent);
        assert_eq!(SubmitStatus::from_roll(0.9, &t), SubmitStatus::Failed);
        let never = FormTuning {
            success_rate: 0.0,
            ..t
        };
        assert_eq!(SubmitStatus::from_roll(0.0, &never), SubmitStatus::Failed);
    }
}
