use colored::Colorize;
use ip_subnet_calc::cli::{parse_args, run};
use ip_subnet_calc::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(path, Default::default()).is_ok() {
        return Ok(());
    }
    // No usable config file, log warnings to stderr only
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let (config, rejected) = Config::from_env();
    init_logging(&config.log_config)?;
    for message in &rejected {
        log::warn!("{message}");
    }
    log::info!("#Start main() {config:?}");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args)
        .map_err(|e| -> Box<dyn Error> { e.into() })
        .and_then(|command| run(command, &config));

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
    Ok(())
}
