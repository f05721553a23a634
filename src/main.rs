use clap::Parser;
use std::error::Error;
use subnet_calc::cli::{apply_args, run, Args};
use subnet_calc::config::Config;
use subnet_calc::init_logging;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = apply_args(Config::from_env()?, &args);
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    if !config.color {
        colored::control::set_override(false);
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let all_ok = run(&args, &config, stdin.lock(), &mut stdout)?;

    log::info!("#End main() all_ok={all_ok}");
    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}
