use crate::app::{
    student_create, student_delete, student_get, student_list, student_search_by_name,
    student_update, Student, StudentCreateReq, StudentUpdateReq,
};
use crate::console::render::print_table;
use crate::console::Console;
use crate::domain::student::{TERM_MAX, TERM_MIN};
use crate::error::AppError;
use crate::infra::DbPool;
use std::io::{BufRead, Write};

pub const MSG_REGISTERED: &str = "[OK] Estudiante registrado exitosamente.";
pub const MSG_UPDATED: &str = "[OK] Estudiante actualizado exitosamente.";
pub const MSG_DELETED: &str = "[OK] Estudiante eliminado exitosamente.";
pub const MSG_NOT_FOUND: &str = "[ERROR] Estudiante no encontrado.";
pub const MSG_EMPTY: &str = "No hay estudiantes registrados.";

/// Fetch one student for update/delete, printing the not-found or failure message.
fn lookup<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Option<Student>, AppError> {
    let id = console.prompt_int(prompt)?;
    match student_get(pool, id) {
        Ok(Some(s)) => Ok(Some(s)),
        Ok(None) => {
            console.say(format!("\n{}", MSG_NOT_FOUND))?;
            Ok(None)
        }
        Err(_) => {
            console.say("\n[ERROR] Error al consultar el estudiante.")?;
            Ok(None)
        }
    }
}

pub fn cmd_student_register<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n--- REGISTRAR NUEVO ESTUDIANTE ---\n")?;
    let first_name = console.prompt_required("Nombre: ")?;
    let last_name = console.prompt_required("Apellido: ")?;
    let email = console.prompt_required("Email: ")?;
    let program = console.prompt_required("Carrera: ")?;
    let term = console.prompt_int_in_range(
        &format!("Semestre ({}-{}): ", TERM_MIN, TERM_MAX),
        TERM_MIN.into(),
        TERM_MAX.into(),
    )?;

    let req = StudentCreateReq {
        first_name,
        last_name,
        email,
        program,
        term: term as i32,
    };
    match student_create(pool, req) {
        Ok(s) => console.say(format!("\n{} (ID: {})", MSG_REGISTERED, s.id)),
        Err(_) => console.say("\n[ERROR] Error al registrar el estudiante."),
    }
}

pub fn cmd_student_list<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n--- LISTA DE ESTUDIANTES ---\n")?;
    match student_list(pool) {
        Ok(list) if list.is_empty() => console.say(MSG_EMPTY),
        Ok(list) => {
            print_table(console, &list)?;
            console.say(format!("\nTotal de estudiantes: {}", list.len()))
        }
        Err(_) => console.say("[ERROR] Error al consultar los estudiantes."),
    }
}

pub fn cmd_student_get<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n--- BUSCAR ESTUDIANTE POR ID ---\n")?;
    if let Some(s) = lookup(pool, console, "Ingrese el ID del estudiante: ")? {
        console.say("\nEstudiante encontrado:")?;
        print_table(console, std::slice::from_ref(&s))?;
    }
    Ok(())
}

pub fn cmd_student_search<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n--- BUSCAR ESTUDIANTES POR NOMBRE ---\n")?;
    let term = console.prompt_required("Ingrese el nombre o apellido a buscar: ")?;
    match student_search_by_name(pool, &term) {
        Ok(list) if list.is_empty() => {
            console.say("\nNo se encontraron estudiantes con ese criterio.")
        }
        Ok(list) => {
            console.say("\nEstudiantes encontrados:")?;
            print_table(console, &list)?;
            console.say(format!("\nResultados: {}", list.len()))
        }
        Err(_) => console.say("\n[ERROR] Error al buscar estudiantes."),
    }
}

pub fn cmd_student_update<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n--- ACTUALIZAR ESTUDIANTE ---\n")?;
    let Some(current) = lookup(pool, console, "Ingrese el ID del estudiante a actualizar: ")? else {
        return Ok(());
    };

    console.say("\nDatos actuales:")?;
    print_table(console, std::slice::from_ref(&current))?;
    console.say("\nIngrese los nuevos datos (deje vacío para mantener el valor actual):\n")?;

    let first_name = console.prompt_optional(&format!("Nombre [{}]: ", current.first_name))?;
    let last_name = console.prompt_optional(&format!("Apellido [{}]: ", current.last_name))?;
    let email = console.prompt_optional(&format!("Email [{}]: ", current.email))?;
    let program = console.prompt_optional(&format!("Carrera [{}]: ", current.program))?;
    let term_text = console.prompt_optional(&format!("Semestre [{}]: ", current.term))?;

    let term = if term_text.is_empty() {
        None
    } else {
        term_text
            .parse::<i32>()
            .inspect_err(|_| log::warn!("ignoring non-numeric term {:?}", term_text))
            .ok()
    };
    let updated = StudentUpdateReq {
        first_name: Some(first_name),
        last_name: Some(last_name),
        email: Some(email),
        program: Some(program),
        term,
    }
    .apply_to(&current);

    match student_update(pool, &updated) {
        Ok(_) => console.say(format!("\n{}", MSG_UPDATED)),
        Err(_) => console.say("\n[ERROR] Error al actualizar el estudiante."),
    }
}

pub fn cmd_student_delete<R: BufRead, W: Write>(
    pool: &DbPool,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\n--- ELIMINAR ESTUDIANTE ---\n")?;
    let Some(current) = lookup(pool, console, "Ingrese el ID del estudiante a eliminar: ")? else {
        return Ok(());
    };

    console.say("\n¿Está seguro de eliminar al estudiante?")?;
    print_table(console, std::slice::from_ref(&current))?;
    let answer = console.prompt_required("\nEscriba 'SI' para confirmar: ")?;
    if !answer.eq_ignore_ascii_case("SI") {
        return console.say("\nOperación cancelada.");
    }

    match student_delete(pool, current.id) {
        Ok(()) => console.say(format!("\n{}", MSG_DELETED)),
        Err(_) => console.say("\n[ERROR] Error al eliminar el estudiante."),
    }
}
