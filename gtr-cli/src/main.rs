//! Command-line interface for gtr
//!
//! This binary converts GEDCOM files into database files for the LaTeX
//! genealogytree package, rendering the sandclock view of one focal
//! person.
//!
//! Usage:
//!   gedcom2gtr `<input.ged>` `<xref-id>` [options]

use clap::{Arg, ArgAction, Command};
use std::fs;
use std::process;

use gtr_gedcom::Reader;
use gtr_tree::{sandclock, FamilyGraph, SandclockOptions};

fn main() {
    let matches = Command::new("gedcom2gtr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create genealogytree database files from GEDCOM files")
        .arg(
            Arg::new("input")
                .help("Path to the GEDCOM file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("xref")
                .help("Id of the focal person (e.g. 'I0001' or '@I0001@')")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Write the database to this file instead of stdout"),
        )
        .arg(
            Arg::new("siblings")
                .long("siblings")
                .action(ArgAction::SetTrue)
                .overrides_with("no-siblings")
                .help("List the focal person's siblings (default)"),
        )
        .arg(
            Arg::new("no-siblings")
                .long("no-siblings")
                .action(ArgAction::SetTrue)
                .help("Do not list the focal person's siblings"),
        )
        .arg(
            Arg::new("ancestor-siblings")
                .long("ancestor-siblings")
                .action(ArgAction::SetTrue)
                .overrides_with("no-ancestor-siblings")
                .help("List siblings at ancestor levels beyond the first (default)"),
        )
        .arg(
            Arg::new("no-ancestor-siblings")
                .long("no-ancestor-siblings")
                .action(ArgAction::SetTrue)
                .help("Do not list siblings at ancestor levels beyond the first"),
        )
        .arg(
            Arg::new("max-ancestor-generations")
                .long("max-ancestor-generations")
                .value_name("LIMIT")
                .value_parser(parse_generation_limit)
                .allow_hyphen_values(true)
                .default_value("-1")
                .help("Number of ancestor generations to include, -1 for no limit"),
        )
        .arg(
            Arg::new("max-descendant-generations")
                .long("max-descendant-generations")
                .value_name("LIMIT")
                .value_parser(parse_generation_limit)
                .allow_hyphen_values(true)
                .default_value("-1")
                .help("Number of descendant generations to include, -1 for no limit"),
        )
        .arg(
            Arg::new("dynamic-generation-limits")
                .long("dynamic-generation-limits")
                .action(ArgAction::SetTrue)
                .overrides_with("static-generation-limits")
                .help("Shift unused generation budget to the direction that exceeds its limit"),
        )
        .arg(
            Arg::new("static-generation-limits")
                .long("static-generation-limits")
                .action(ArgAction::SetTrue)
                .help("Apply the generation limits exactly as given (default)"),
        )
        .arg(
            Arg::new("dump-records")
                .long("dump-records")
                .action(ArgAction::SetTrue)
                .help("Print the parsed GEDCOM records as JSON and exit"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase log verbosity (repeatable)"),
        )
        .get_matches();

    let verbosity = matches.get_count("verbose");
    init_logging(verbosity);

    let input = matches.get_one::<String>("input").expect("input is required");
    let xref = matches.get_one::<String>("xref").expect("xref is required");
    let output = matches.get_one::<String>("output");

    let reader = Reader::from_path(input).unwrap_or_else(|err| fail(&err, verbosity));

    if matches.get_flag("dump-records") {
        let json = serde_json::to_string_pretty(reader.records())
            .unwrap_or_else(|err| fail(&err, verbosity));
        emit(output, json, verbosity);
        return;
    }

    let graph = FamilyGraph::from_reader(&reader).unwrap_or_else(|err| fail(&err, verbosity));
    let focal = graph
        .person_by_xref(xref)
        .unwrap_or_else(|err| fail(&err, verbosity));

    let options = SandclockOptions {
        include_siblings: !matches.get_flag("no-siblings"),
        include_ancestor_siblings: !matches.get_flag("no-ancestor-siblings"),
        max_ancestor_generations: *matches
            .get_one::<i32>("max-ancestor-generations")
            .expect("limit has a default"),
        max_descendant_generations: *matches
            .get_one::<i32>("max-descendant-generations")
            .expect("limit has a default"),
        dynamic_generation_limits: matches.get_flag("dynamic-generation-limits"),
    };
    let database = sandclock(&graph, focal, &options).unwrap_or_else(|err| fail(&err, verbosity));
    emit(output, database, verbosity);
}

/// Parse a generation limit: any integer down to -1 (no limit)
fn parse_generation_limit(value: &str) -> Result<i32, String> {
    let limit: i32 = value
        .parse()
        .map_err(|_| format!("'{}' is not an integer", value))?;
    if limit < -1 {
        return Err(format!("limit must be -1 or greater, got {}", limit));
    }
    Ok(limit)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Write the result to the output file, or stdout when none was given
fn emit(output: Option<&String>, content: String, verbosity: u8) {
    match output {
        Some(path) => {
            fs::write(path, content + "\n").unwrap_or_else(|err| fail(&err, verbosity));
            log::info!("wrote {}", path);
        }
        None => println!("{}", content),
    }
}

/// Report an error and exit non-zero
///
/// The terse form is a single message; verbose mode adds the full cause
/// chain.
fn fail(err: &dyn std::error::Error, verbosity: u8) -> ! {
    eprintln!("Error: {}", err);
    if verbosity > 0 {
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
    }
    process::exit(1);
}
