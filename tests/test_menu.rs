//! Scripted console sessions against the menu loop

use app_lib::app::{student_count, student_create, student_get, Student, StudentCreateReq};
use app_lib::commands::run_menu;
use app_lib::commands::student::{
    MSG_DELETED, MSG_EMPTY, MSG_NOT_FOUND, MSG_REGISTERED, MSG_UPDATED,
};
use app_lib::console::Console;
use app_lib::infra::db::init_test_db;
use app_lib::infra::DbPool;
use std::io::Cursor;

// ──────────────────────── Helper ────────────────────────

fn run_session(pool: &DbPool, input: &str) -> String {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    run_menu(pool, &mut console).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn seed(pool: &DbPool, first: &str, last: &str, email: &str) -> Student {
    student_create(
        pool,
        StudentCreateReq {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            program: "Software".to_string(),
            term: 4,
        },
    )
    .unwrap()
}

// ══════════════════════════════════════════════════════════
//  menu loop
// ══════════════════════════════════════════════════════════

#[test]
fn exit_immediately() {
    let pool = init_test_db();
    let out = run_session(&pool, "0\n");
    assert!(out.contains("MENÚ PRINCIPAL"));
    assert!(out.contains("6. Eliminar estudiante"));
    assert!(out.contains("Saliendo del sistema..."));
}

#[test]
fn end_of_input_exits_loop() {
    let pool = init_test_db();
    let out = run_session(&pool, "");
    assert!(out.contains("Saliendo del sistema..."));
}

#[test]
fn end_of_input_inside_action_exits_loop() {
    let pool = init_test_db();
    let out = run_session(&pool, "1\nAna\n");
    assert!(out.contains("Saliendo del sistema..."));
    assert_eq!(student_count(&pool).unwrap(), 0);
}

#[test]
fn invalid_and_non_numeric_choices_reprompt() {
    let pool = init_test_db();
    let out = run_session(&pool, "9\nxyz\n0\n");
    assert!(out.contains("Opción no válida"));
    assert!(out.contains("Debe ingresar un número válido"));
    assert!(out.contains("Saliendo del sistema..."));
}

// ══════════════════════════════════════════════════════════
//  register / list
// ══════════════════════════════════════════════════════════

#[test]
fn register_reprompts_term_then_lists() {
    let pool = init_test_db();
    let out = run_session(
        &pool,
        "1\nAna\nRuiz\nana@test.com\nSoftware\n0\n12\n3\n2\n0\n",
    );
    assert_eq!(out.matches("El valor debe estar entre 1 y 10").count(), 2);
    assert!(out.contains(MSG_REGISTERED));
    assert!(out.contains("NOMBRE"));
    assert!(out.contains("ana@test.com"));
    assert!(out.contains("Total de estudiantes: 1"));

    let all = app_lib::app::student_list(&pool).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].term, 3);
}

#[test]
fn register_requires_non_empty_fields() {
    let pool = init_test_db();
    let out = run_session(&pool, "1\n\nAna\nRuiz\nana@test.com\nSoftware\n5\n0\n");
    assert!(out.contains("Este campo es obligatorio."));
    assert!(out.contains(MSG_REGISTERED));
}

#[test]
fn register_duplicate_email_reports_failure() {
    let pool = init_test_db();
    seed(&pool, "Ana", "Ruiz", "ana@test.com");
    let out = run_session(&pool, "1\nOtra\nPersona\nana@test.com\nSoftware\n2\n0\n");
    assert!(out.contains("Error al registrar el estudiante."));
    assert_eq!(student_count(&pool).unwrap(), 1);
}

#[test]
fn list_empty_shows_message() {
    let pool = init_test_db();
    let out = run_session(&pool, "2\n0\n");
    assert!(out.contains(MSG_EMPTY));
}

// ══════════════════════════════════════════════════════════
//  find / search
// ══════════════════════════════════════════════════════════

#[test]
fn find_by_id_shows_row_or_not_found() {
    let pool = init_test_db();
    let ana = seed(&pool, "Ana", "Ruiz", "ana@test.com");
    let out = run_session(&pool, &format!("3\n{}\n3\n999\n0\n", ana.id));
    assert!(out.contains("Estudiante encontrado:"));
    assert!(out.contains(&ana.to_string()));
    assert!(out.contains(MSG_NOT_FOUND));
}

#[test]
fn search_by_name_prints_results_count() {
    let pool = init_test_db();
    seed(&pool, "Ana", "Ruiz", "ana@test.com");
    seed(&pool, "Beto", "Lopez", "beto@test.com");
    seed(&pool, "Juan", "Perez", "juan@test.com");
    let out = run_session(&pool, "4\nan\n4\nzzz\n0\n");
    assert!(out.contains("Resultados: 2"));
    assert!(out.contains("No se encontraron estudiantes con ese criterio."));
}

// ══════════════════════════════════════════════════════════
//  update
// ══════════════════════════════════════════════════════════

#[test]
fn update_keeps_blank_answers() {
    let pool = init_test_db();
    let ana = seed(&pool, "Ana", "Ruiz", "ana@test.com");
    let out = run_session(&pool, &format!("5\n{}\n\n\n\nRedes\n9\n0\n", ana.id));
    assert!(out.contains("Datos actuales:"));
    assert!(out.contains("Nombre [Ana]: "));
    assert!(out.contains(MSG_UPDATED));

    let fetched = student_get(&pool, ana.id).unwrap().unwrap();
    assert_eq!(fetched.first_name, "Ana");
    assert_eq!(fetched.last_name, "Ruiz");
    assert_eq!(fetched.email, "ana@test.com");
    assert_eq!(fetched.program, "Redes");
    assert_eq!(fetched.term, 9);
}

#[test]
fn update_silently_ignores_bad_term() {
    let pool = init_test_db();
    let ana = seed(&pool, "Ana", "Ruiz", "ana@test.com");
    run_session(&pool, &format!("5\n{}\nAnita\n\n\n\n15\n0\n", ana.id));
    run_session(&pool, &format!("5\n{}\n\n\n\n\nsiete\n0\n", ana.id));

    let fetched = student_get(&pool, ana.id).unwrap().unwrap();
    assert_eq!(fetched.first_name, "Anita");
    assert_eq!(fetched.term, 4);
}

#[test]
fn update_unknown_id_reports_not_found() {
    let pool = init_test_db();
    let out = run_session(&pool, "5\n42\n0\n");
    assert!(out.contains(MSG_NOT_FOUND));
    assert!(!out.contains("Datos actuales:"));
}

#[test]
fn update_to_taken_email_reports_failure() {
    let pool = init_test_db();
    seed(&pool, "Ana", "Ruiz", "ana@test.com");
    let beto = seed(&pool, "Beto", "Lopez", "beto@test.com");
    let out = run_session(&pool, &format!("5\n{}\n\n\nana@test.com\n\n\n0\n", beto.id));
    assert!(out.contains("Error al actualizar el estudiante."));
    assert_eq!(student_get(&pool, beto.id).unwrap().unwrap().email, "beto@test.com");
}

// ══════════════════════════════════════════════════════════
//  delete
// ══════════════════════════════════════════════════════════

#[test]
fn delete_requires_si_confirmation() {
    let pool = init_test_db();
    let ana = seed(&pool, "Ana", "Ruiz", "ana@test.com");
    let out = run_session(&pool, &format!("6\n{}\nno\n0\n", ana.id));
    assert!(out.contains("Operación cancelada."));
    assert!(student_get(&pool, ana.id).unwrap().is_some());
}

#[test]
fn delete_confirmation_is_case_insensitive() {
    let pool = init_test_db();
    let ana = seed(&pool, "Ana", "Ruiz", "ana@test.com");
    let out = run_session(&pool, &format!("6\n{}\nsi\n0\n", ana.id));
    assert!(out.contains(MSG_DELETED));
    assert!(student_get(&pool, ana.id).unwrap().is_none());
}

#[test]
fn delete_unknown_id_reports_not_found() {
    let pool = init_test_db();
    let out = run_session(&pool, "6\n7\n0\n");
    assert!(out.contains(MSG_NOT_FOUND));
    assert!(!out.contains("Escriba 'SI'"));
}
