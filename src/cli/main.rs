//! Command-line interface entry point for `cplan`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::curriculum::{CourseChanges, NewCourse};
use curriculum_planner::config::Config;
use curriculum_planner::info;
use curriculum_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Init { title, blank, force } => {
            commands::curriculum::init(&config, &title, blank, force);
        }
        Command::Show => commands::curriculum::show(&config),
        Command::Progress => commands::curriculum::progress(&config),
        Command::Add {
            code,
            name,
            credits,
            semester,
            prerequisites,
            color,
        } => commands::curriculum::add(
            &config,
            NewCourse {
                code,
                name,
                credits,
                semester,
                prerequisites,
                color,
            },
        ),
        Command::Edit {
            id,
            code,
            name,
            credits,
            semester,
            prerequisites,
            clear_prereqs,
            color,
        } => commands::curriculum::edit(
            &config,
            &id,
            CourseChanges {
                code,
                name,
                credits,
                semester,
                prerequisites,
                clear_prerequisites: clear_prereqs,
                color,
            },
        ),
        Command::Toggle { id } => commands::curriculum::toggle(&config, &id),
        Command::Title { title } => commands::curriculum::title(&config, &title),
        Command::Notes { id, subcommand } => {
            commands::curriculum::notes(&config, &id, subcommand);
        }
        Command::Import { file } => commands::exchange::import(&config, &file),
        Command::Export { output } => commands::exchange::export(&config, output.as_deref()),
        Command::Report { format, output } => {
            commands::report::run(&config, &format, output.as_deref());
        }
        Command::Reset { yes } => commands::curriculum::reset(&config, yes),
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}
