use std::env;

use log::info;
use quiz_view::{
    error::QuizError, handlers::session_handler::run_session, helpers::load_pack,
    loggers::file_logger::init_file_logger, models::game::default_pack,
};

fn main() -> Result<(), QuizError> {
    init_file_logger()?;
    info!("App started!");

    let pack = match env::args().nth(1) {
        Some(path) => load_pack(path)?,
        None => default_pack(),
    };
    info!(
        "Loaded pack '{}' with {} questions",
        pack.name,
        pack.questions.len()
    );

    run_session(pack)?;

    info!("App exited");
    Ok(())
}
