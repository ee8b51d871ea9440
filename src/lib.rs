pub mod app;
pub mod commands;
pub mod console;
pub mod domain;
pub mod error;
pub mod infra;

use console::render::print_banner;
use console::Console;
use infra::{DbPool, DEFAULT_DB_PATH};
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

const LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Diagnostics go to stderr so the menu on stdout stays readable.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn run() {
    init_logging();

    let mut console = Console::stdio();
    if let Err(e) = print_banner(&mut console) {
        log::error!("console write failed: {}", e);
    }

    let db_path = Path::new(DEFAULT_DB_PATH);
    log::info!("DB path: {:?}", db_path);
    let pool = DbPool::open(db_path);

    if let Err(e) = commands::run_menu(&pool, &mut console) {
        log::error!("menu stopped: {}", e);
    }

    pool.close();
    let _ = console.say("\n¡Gracias por usar el Sistema de Gestión de Estudiantes!");
}
