//! Command-line interface for atf
//! This binary parses, validates and renders ATF transliterations.
//!
//! Usage:
//!   atf parse `<path>` [--format json|yaml]          - Print the validated model
//!   atf validate `<path>`                            - Print the error report, exit 1 on errors
//!   atf render `<path>`                              - Print the canonical ATF
//!   atf signs `<path>` --signs `<signs.json>`          - Print the sign matrix
//!   atf lemmatization `<path>`                       - Print the lemmatization
//!   atf configs                                    - List the parser configurations
//!
//! Every subcommand reading a file takes `--config <name>` (default `strict`).

use atf::signs::{AtfConverter, MemorySignRepository};
use atf::transliteration::{AtfParser, ConfigRegistry, ParseError, Text};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;

fn file_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(
            Arg::new("path")
                .help("Path to the ATF file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Parser configuration (see `atf configs`)")
                .default_value("strict"),
        )
}

fn main() {
    let matches = Command::new("atf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and validating ATF transliterations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            file_command("parse", "Parse a file and print the validated model").arg(
                Arg::new("format")
                    .long("format")
                    .short('f')
                    .help("Output format")
                    .value_parser(["json", "yaml"])
                    .default_value("json"),
            ),
        )
        .subcommand(file_command(
            "validate",
            "Print the errors of a file as JSON; exits with 1 when there are any",
        ))
        .subcommand(file_command("render", "Print the canonical ATF of a file"))
        .subcommand(
            file_command("signs", "Print the signs of every text line").arg(
                Arg::new("signs")
                    .long("signs")
                    .help("JSON array of signs to resolve against")
                    .required(true),
            ),
        )
        .subcommand(file_command(
            "lemmatization",
            "Print the lemmatization of a file as JSON",
        ))
        .subcommand(Command::new("configs").about("List available parser configurations"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let format = parse_matches.get_one::<String>("format").unwrap();
            let text = parse_or_exit(parse_matches);
            print!("{}", serialize(&text, format));
        }
        Some(("validate", validate_matches)) => handle_validate_command(validate_matches),
        Some(("render", render_matches)) => {
            println!("{}", parse_or_exit(render_matches).atf());
        }
        Some(("signs", signs_matches)) => handle_signs_command(signs_matches),
        Some(("lemmatization", lemmatization_matches)) => {
            let text = parse_or_exit(lemmatization_matches);
            print!("{}", serialize(&text.lemmatization(), "json"));
        }
        Some(("configs", _)) => handle_configs_command(),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn parser(matches: &ArgMatches) -> AtfParser {
    let name = matches.get_one::<String>("config").unwrap();
    let registry = ConfigRegistry::with_defaults();
    match registry.get(name) {
        Some(config) => AtfParser::new(config.clone()),
        None => fail(format!("unknown configuration {}", name)),
    }
}

fn read_source(matches: &ArgMatches) -> String {
    let path = matches.get_one::<String>("path").unwrap();
    std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("reading {}: {}", path, e)))
}

fn parse(matches: &ArgMatches) -> Result<Text, ParseError> {
    parser(matches).parse_atf(&read_source(matches))
}

fn parse_or_exit(matches: &ArgMatches) -> Text {
    parse(matches).unwrap_or_else(|e| {
        for entry in e.errors() {
            eprintln!("line {}: {}", entry.line_number, entry.description.trim_end());
        }
        std::process::exit(1);
    })
}

fn serialize<T: Serialize>(value: &T, format: &str) -> String {
    let output = match format {
        "yaml" => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(value)
            .map(|json| json + "\n")
            .map_err(|e| e.to_string()),
    };
    output.unwrap_or_else(|e| fail(e))
}

/// Handle the validate command
fn handle_validate_command(matches: &ArgMatches) {
    match parse(matches) {
        Ok(_) => print!("{}", serialize(&Vec::<()>::new(), "json")),
        Err(e) => {
            print!("{}", serialize(&e.errors(), "json"));
            std::process::exit(1);
        }
    }
}

/// Handle the signs command
fn handle_signs_command(matches: &ArgMatches) {
    let signs_path = matches.get_one::<String>("signs").unwrap();
    let json = std::fs::read_to_string(signs_path)
        .unwrap_or_else(|e| fail(format!("reading {}: {}", signs_path, e)));
    let repository = MemorySignRepository::from_json(&json).unwrap_or_else(|e| fail(e));
    let converter = AtfConverter::with_parser(repository, parser(matches));
    match converter.convert_atf_to_sign_matrix(&read_source(matches)) {
        Ok(matrix) => {
            for row in matrix {
                println!("{}", row.join(" "));
            }
        }
        Err(e) => fail(e),
    }
}

/// Handle the configs command
fn handle_configs_command() {
    println!("Available parser configurations:\n");
    for config in ConfigRegistry::with_defaults().list_all() {
        println!("  {}", config.name);
        println!("    {}", config.description);
    }
}
