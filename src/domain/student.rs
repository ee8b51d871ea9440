//! Student record, field rules and fixed-width rendering.

use crate::error::AppError;
use std::fmt;

pub const TERM_MIN: i32 = 1;
pub const TERM_MAX: i32 = 10;

/// Column widths of the student table: ID, NOMBRE, APELLIDO, EMAIL, CARRERA, SEMESTRE.
const WIDTHS: [usize; 6] = [4, 15, 15, 25, 20, 8];

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub program: String,
    pub term: i32,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [w_id, w_first, w_last, w_email, w_program, w_term] = WIDTHS;
        write!(
            f,
            "| {:<w_id$} | {:<w_first$.w_first$} | {:<w_last$.w_last$} | {:<w_email$.w_email$} | {:<w_program$.w_program$} | {:<w_term$} |",
            self.id, self.first_name, self.last_name, self.email, self.program, self.term,
        )
    }
}

/// Header line aligned with the `Display` output of [`Student`].
pub fn table_header() -> String {
    let [w_id, w_first, w_last, w_email, w_program, w_term] = WIDTHS;
    format!(
        "| {:<w_id$} | {:<w_first$} | {:<w_last$} | {:<w_email$} | {:<w_program$} | {:<w_term$} |",
        "ID", "NOMBRE", "APELLIDO", "EMAIL", "CARRERA", "SEMESTRE",
    )
}

/// Total character width of a rendered table row.
pub fn table_width() -> usize {
    // "| " + cells joined by " | " + " |"
    WIDTHS.iter().sum::<usize>() + 3 * (WIDTHS.len() - 1) + 4
}

pub fn term_in_range(term: i32) -> bool {
    (TERM_MIN..=TERM_MAX).contains(&term)
}

/// Fields of a student that has not been stored yet.
#[derive(Debug, Clone)]
pub struct StudentCreateReq {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub program: String,
    pub term: i32,
}

impl StudentCreateReq {
    /// Trims text fields and checks presence and term range.
    pub fn normalized(self) -> Result<Self, AppError> {
        let req = Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            program: self.program.trim().to_string(),
            term: self.term,
        };
        validate_fields(
            &req.first_name,
            &req.last_name,
            &req.email,
            &req.program,
            req.term,
        )?;
        Ok(req)
    }
}

/// Partial update. `None` or blank text keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct StudentUpdateReq {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub program: Option<String>,
    pub term: Option<i32>,
}

impl StudentUpdateReq {
    /// Merges this request over `current`. A term outside the allowed range is
    /// dropped and the current term kept.
    pub fn apply_to(self, current: &Student) -> Student {
        fn pick(new: Option<String>, old: &str) -> String {
            new.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| old.to_string())
        }

        let term = match self.term {
            Some(t) if term_in_range(t) => t,
            Some(t) => {
                log::warn!(
                    "ignoring out-of-range term {} for student {}, keeping {}",
                    t,
                    current.id,
                    current.term
                );
                current.term
            }
            None => current.term,
        };

        Student {
            id: current.id,
            first_name: pick(self.first_name, &current.first_name),
            last_name: pick(self.last_name, &current.last_name),
            email: pick(self.email, &current.email),
            program: pick(self.program, &current.program),
            term,
        }
    }
}

pub fn validate_student(s: &Student) -> Result<(), AppError> {
    validate_fields(&s.first_name, &s.last_name, &s.email, &s.program, s.term)
}

fn validate_fields(
    first_name: &str,
    last_name: &str,
    email: &str,
    program: &str,
    term: i32,
) -> Result<(), AppError> {
    for (name, value) in [
        ("first_name", first_name),
        ("last_name", last_name),
        ("email", email),
        ("program", program),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", name)));
        }
    }
    if !term_in_range(term) {
        return Err(AppError::Validation(format!(
            "term must be between {} and {}, got {}",
            TERM_MIN, TERM_MAX, term
        )));
    }
    Ok(())
}
