//! Main menu: read a choice, dispatch, repeat until exit.

use super::student::{
    cmd_student_delete, cmd_student_get, cmd_student_list, cmd_student_register,
    cmd_student_search, cmd_student_update,
};
use crate::console::render::light_rule;
use crate::console::Console;
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Register,
    List,
    FindById,
    SearchByName,
    Update,
    Delete,
}

impl MenuChoice {
    pub fn from_i64(n: i64) -> Option<Self> {
        match n {
            0 => Some(Self::Exit),
            1 => Some(Self::Register),
            2 => Some(Self::List),
            3 => Some(Self::FindById),
            4 => Some(Self::SearchByName),
            5 => Some(Self::Update),
            6 => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit => "Salir",
            Self::Register => "Registrar nuevo estudiante",
            Self::List => "Listar todos los estudiantes",
            Self::FindById => "Buscar estudiante por ID",
            Self::SearchByName => "Buscar estudiantes por nombre",
            Self::Update => "Actualizar datos de estudiante",
            Self::Delete => "Eliminar estudiante",
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Register,
            Self::List,
            Self::FindById,
            Self::SearchByName,
            Self::Update,
            Self::Delete,
            Self::Exit,
        ]
    }

    fn number(&self) -> u8 {
        match self {
            Self::Exit => 0,
            Self::Register => 1,
            Self::List => 2,
            Self::FindById => 3,
            Self::SearchByName => 4,
            Self::Update => 5,
            Self::Delete => 6,
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    console.say(format!("\n{}", light_rule()))?;
    console.say("                         MENÚ PRINCIPAL")?;
    console.say(light_rule())?;
    for choice in MenuChoice::all() {
        console.say(format!("  {}. {}", choice.number(), choice.label()))?;
    }
    console.say(light_rule())
}

/// One menu round. Returns `false` once the user chose to exit.
fn step<R: BufRead, W: Write>(pool: &DbPool, console: &mut Console<R, W>) -> Result<bool, AppError> {
    print_menu(console)?;
    let n = console.prompt_int("Seleccione una opción: ")?;
    match MenuChoice::from_i64(n) {
        Some(MenuChoice::Exit) => return Ok(false),
        Some(MenuChoice::Register) => cmd_student_register(pool, console)?,
        Some(MenuChoice::List) => cmd_student_list(pool, console)?,
        Some(MenuChoice::FindById) => cmd_student_get(pool, console)?,
        Some(MenuChoice::SearchByName) => cmd_student_search(pool, console)?,
        Some(MenuChoice::Update) => cmd_student_update(pool, console)?,
        Some(MenuChoice::Delete) => cmd_student_delete(pool, console)?,
        None => console.say("\n[ERROR] Opción no válida. Intente de nuevo.")?,
    }
    Ok(true)
}

/// Run the menu until choice 0 or end of input.
pub fn run_menu<R: BufRead, W: Write>(pool: &DbPool, console: &mut Console<R, W>) -> Result<(), AppError> {
    loop {
        match step(pool, console) {
            Ok(true) => continue,
            Ok(false) => break,
            Err(AppError::InputClosed) => {
                log::info!("input closed, leaving menu");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    console.say("\nSaliendo del sistema...")
}
