//! Student use cases. Each operation issues exactly one SQL statement.

use crate::domain::student::{validate_student, Student, StudentCreateReq};
use crate::error::AppError;
use crate::infra::{with_connection, DbPool};
use rusqlite::{params, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "SELECT id, nombre, apellido, email, carrera, semestre FROM estudiantes";

fn map_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        program: row.get(4)?,
        term: row.get(5)?,
    })
}

/// Escape LIKE wildcards so `term` matches literally.
fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

pub fn student_create(pool: &DbPool, req: StudentCreateReq) -> Result<Student, AppError> {
    let req = req.normalized()?;
    with_connection(pool, |conn| {
        conn.execute(
            "INSERT INTO estudiantes (nombre, apellido, email, carrera, semestre) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![req.first_name, req.last_name, req.email, req.program, req.term],
        )?;
        Ok(Student {
            id: conn.last_insert_rowid(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            program: req.program,
            term: req.term,
        })
    })
    .inspect_err(|e| log::error!("student_create failed: {}", e))
}

pub fn student_list(pool: &DbPool) -> Result<Vec<Student>, AppError> {
    with_connection(pool, |conn| {
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let rows = stmt.query_map([], map_row)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
    .inspect_err(|e| log::error!("student_list failed: {}", e))
}

pub fn student_get(pool: &DbPool, id: i64) -> Result<Option<Student>, AppError> {
    with_connection(pool, |conn| {
        let found = conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_row)
            .optional()?;
        Ok(found)
    })
    .inspect_err(|e| log::error!("student_get({}) failed: {}", id, e))
}

/// Students whose first or last name contains `term`, ordered by id.
/// Matching follows SQLite's LIKE, which ignores ASCII case.
pub fn student_search_by_name(pool: &DbPool, term: &str) -> Result<Vec<Student>, AppError> {
    let pattern = like_pattern(term);
    with_connection(pool, |conn| {
        let mut stmt = conn.prepare(&format!(
            r"{} WHERE nombre LIKE ?1 ESCAPE '\' OR apellido LIKE ?1 ESCAPE '\' ORDER BY id",
            SELECT_COLUMNS
        ))?;
        let rows = stmt.query_map([&pattern], map_row)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
    .inspect_err(|e| log::error!("student_search_by_name({:?}) failed: {}", term, e))
}

/// Overwrite every field of the stored row with `student`.
pub fn student_update(pool: &DbPool, student: &Student) -> Result<Student, AppError> {
    validate_student(student)?;
    with_connection(pool, |conn| {
        let changed = conn.execute(
            "UPDATE estudiantes SET nombre = ?1, apellido = ?2, email = ?3, carrera = ?4, semestre = ?5 WHERE id = ?6",
            params![
                student.first_name,
                student.last_name,
                student.email,
                student.program,
                student.term,
                student.id
            ],
        )?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("student {}", student.id)));
        }
        Ok(student.clone())
    })
    .inspect_err(|e| log::error!("student_update({}) failed: {}", student.id, e))
}

pub fn student_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    with_connection(pool, |conn| {
        let changed = conn.execute("DELETE FROM estudiantes WHERE id = ?1", [id])?;
        if changed == 0 {
            return Err(AppError::NotFound(format!("student {}", id)));
        }
        Ok(())
    })
    .inspect_err(|e| log::error!("student_delete({}) failed: {}", id, e))
}

pub fn student_count(pool: &DbPool) -> Result<i64, AppError> {
    with_connection(pool, |conn| {
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM estudiantes", [], |r| r.get(0))?;
        Ok(n)
    })
    .inspect_err(|e| log::error!("student_count failed: {}", e))
}
