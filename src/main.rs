use clap::Parser;
use log::{error, info};

use promptstore::{App, Cli, Config};

pub fn initialize_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    let result = Config::new(cli.data_dir).and_then(|mut config| {
        config.clipboard_command = cli.clipboard_command;
        let mut app = App::new(config)?;
        app.run(cli.command)
    });

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
