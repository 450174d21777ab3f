//! Text Vault CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use vault_cli::logging::{LogConfig, LogFormat, init_logging};
use vault_cli::settings::Settings;
use vault_persistence::PersistenceError;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    open_repository, run_config, run_delete, run_list, run_process, run_save, run_show,
    run_types, run_update,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let settings = Settings::load();
    let store = cli.store.as_deref();
    let result = match &cli.command {
        Command::Process(args) => run_process(args, &settings),
        Command::Save(args) => {
            let mut repo = open_repository(&settings, store);
            run_save(&mut repo, args, &settings).map(|_| ())
        }
        Command::List => run_list(&open_repository(&settings, store), &settings),
        Command::Show(args) => run_show(&open_repository(&settings, store), args),
        Command::Update(args) => run_update(&mut open_repository(&settings, store), args),
        Command::Delete(args) => run_delete(&mut open_repository(&settings, store), args),
        Command::Types => run_types(),
        Command::Config(args) => run_config(args, &settings),
    };

    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Print an error, preferring the storage layer's user-facing wording.
fn report_error(error: &anyhow::Error) {
    let persistence = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<PersistenceError>());
    match persistence {
        Some(cause) => {
            eprintln!("error: {}", cause.user_message());
            if let Some(hint) = cause.suggestion() {
                eprintln!("hint: {hint}");
            }
            tracing::debug!("{error:#}");
        }
        None => eprintln!("error: {error:#}"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_text = cli.log_text;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
