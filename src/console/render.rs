//! Banner, separators and the student table.

use super::Console;
use crate::domain::student::{table_header, table_width, Student};
use crate::error::AppError;
use std::io::{BufRead, Write};

pub fn heavy_rule() -> String {
    "=".repeat(table_width())
}

pub fn light_rule() -> String {
    "-".repeat(table_width())
}

pub fn print_banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    console.say(heavy_rule())?;
    console.say("   SISTEMA DE GESTIÓN DE ESTUDIANTES")?;
    console.say(heavy_rule())
}

pub fn print_table<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    students: &[Student],
) -> Result<(), AppError> {
    console.say(light_rule())?;
    console.say(table_header())?;
    console.say(light_rule())?;
    for s in students {
        console.say(s)?;
    }
    console.say(light_rule())
}
