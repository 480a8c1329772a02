use contact_book::prelude::{AppError, run_app};
use dotenv::dotenv;

fn main() -> Result<(), AppError> {
    // .env values must be in the environment before clap reads it
    dotenv().ok();
    env_logger::init();

    run_app()
}
