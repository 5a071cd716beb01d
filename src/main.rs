/*!
 * Command-line interface for projpack
 */

use std::io;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

use projpack::compiler::compile;
use projpack::config::{Args, Config};
use projpack::report::Reporter;

fn setup_logging(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut command = Args::command();
        let name = command.get_name().to_string();
        generate(shell, &mut command, name, &mut io::stdout());
        return;
    }

    setup_logging(args.quiet, args.verbose);
    let show_report = args.report;
    let quiet = args.quiet;

    // Create configuration
    let config = Config::from_args(args);

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(100)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}% ⏱️  {elapsed_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_prefix("📦 Compiling");

    let result = compile(&config, &mut |percent: u8| progress.set_position(u64::from(percent)));
    progress.finish_and_clear();

    match result {
        Ok(outcome) => {
            println!(
                "Files compiled successfully into {}",
                outcome.output_file.display()
            );
            if show_report {
                Reporter::print_report(&outcome.summary);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
