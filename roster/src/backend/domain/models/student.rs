use shared::Grade;

/// A single student on the roster.
///
/// Fields are private so that `grade` can never drift from `marks`: the only
/// way to change marks after construction is [`StudentRecord::set_marks`].
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    roll_number: i32,
    name: String,
    email: String,
    course: String,
    marks: f64,
    grade: Grade,
}

impl StudentRecord {
    /// Build a record from already-validated input. The grade is derived here.
    pub fn new(
        roll_number: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            roll_number,
            name: name.into(),
            email: email.into(),
            course: course.into(),
            marks,
            grade: Grade::from_marks(marks),
        }
    }

    pub fn roll_number(&self) -> i32 {
        self.roll_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Case-insensitive comparison against the record's name
    pub fn name_matches(&self, name: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(name.chars().flat_map(char::to_lowercase))
    }

    pub(crate) fn set_marks(&mut self, marks: f64) {
        self.marks = marks;
        self.grade = Grade::from_marks(marks);
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StudentValidationError {
    #[error("Marks must be 0–100.")]
    MarksOutOfRange(f64),
    #[error("{field} must be a number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// Parse a roll number typed by the user
pub fn parse_roll_number(input: &str) -> Result<i32, StudentValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| StudentValidationError::InvalidNumber {
            field: "Roll number",
            input: trimmed.to_string(),
        })
}

/// Parse marks typed by the user and check they fall in 0-100
pub fn parse_marks(input: &str) -> Result<f64, StudentValidationError> {
    let trimmed = input.trim();
    let marks = trimmed
        .parse::<f64>()
        .map_err(|_| StudentValidationError::InvalidNumber {
            field: "Marks",
            input: trimmed.to_string(),
        })?;
    validate_marks(marks)
}

pub fn validate_marks(marks: f64) -> Result<f64, StudentValidationError> {
    if !(0.0..=100.0).contains(&marks) {
        return Err(StudentValidationError::MarksOutOfRange(marks));
    }
    Ok(marks)
}

/// Require a non-blank text field, returning it trimmed
pub fn require_text(field: &'static str, input: &str) -> Result<String, StudentValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(StudentValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}
