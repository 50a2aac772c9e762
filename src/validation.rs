//! Field constraints for incoming student bodies.
//!
//! Every violation is collected, not just the first.
//! Required checks use zero-value semantics: an absent field, `null`, `""` and `0` all count as missing.

use crate::types::{NewStudent, StudentRequest};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const STRUCT_NAME: &str = "Student";

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// The constraint a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldTag {
    Required,
    Email,
    /// Strictly greater than zero.
    Gt,
}

impl FieldTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldTag::Required => "required",
            FieldTag::Email => "email",
            FieldTag::Gt => "gt",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub tag: FieldTag,
}

impl FieldError {
    pub fn new(field: &'static str, tag: FieldTag) -> Self {
        FieldError { field, tag }
    }

    /// `"<Field> is required"` for missing fields, the default validator wording otherwise.
    pub fn message(&self) -> String {
        match self.tag {
            FieldTag::Required => format!("{} is required", self.field),
            tag => format!(
                "Key: '{}.{}' Error:Field validation for '{}' failed on the '{}' tag",
                STRUCT_NAME,
                self.field,
                self.field,
                tag.as_str()
            ),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// Check `name`, `email`, `age` in that order. Returns the insertable record or every violation found.
pub fn validate_student(req: &StudentRequest) -> Result<NewStudent, Vec<FieldError>> {
    let mut errs = Vec::new();

    let name = req.name.as_deref().filter(|s| !s.is_empty());
    if name.is_none() {
        errs.push(FieldError::new("Name", FieldTag::Required));
    }

    let email = req.email.as_deref().filter(|s| !s.is_empty());
    match email {
        None => errs.push(FieldError::new("Email", FieldTag::Required)),
        Some(e) if !is_valid_email(e) => errs.push(FieldError::new("Email", FieldTag::Email)),
        Some(_) => {}
    }

    let age = req.age.filter(|a| *a != 0);
    match age {
        None => errs.push(FieldError::new("Age", FieldTag::Required)),
        Some(a) if a <= 0 => errs.push(FieldError::new("Age", FieldTag::Gt)),
        Some(_) => {}
    }

    match (name, email, age) {
        (Some(name), Some(email), Some(age)) if errs.is_empty() => Ok(NewStudent {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }),
        _ => Err(errs),
    }
}
