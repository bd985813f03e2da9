use std::fmt;

/// Letter grade derived from a student's marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 85 and above
    A,
    /// 70 up to (not including) 85
    B,
    /// 50 up to (not including) 70
    C,
    /// Below 50
    D,
}

impl Grade {
    /// Classify marks into a grade. Every input maps to exactly one grade;
    /// anything that fails all thresholds (including NaN) is a `D`.
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 85.0 {
            Grade::A
        } else if marks >= 70.0 {
            Grade::B
        } else if marks >= 50.0 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Read-only copy of a student record handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct StudentInfo {
    pub roll_number: i32,
    pub name: String,
    pub email: String,
    pub course: String,
    /// Marks in the range 0-100
    pub marks: f64,
    pub grade: Grade,
}

/// Format marks the way they are shown and stored: shortest round-trip form,
/// with a trailing `.0` for whole numbers (`92.0`, `91.5`).
pub fn format_marks(marks: f64) -> String {
    if marks.is_finite() && marks.fract() == 0.0 {
        format!("{:.1}", marks)
    } else {
        format!("{}", marks)
    }
}
