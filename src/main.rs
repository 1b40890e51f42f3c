use cubebot::config::DemoConfig;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match cubebot::window::run(DemoConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
