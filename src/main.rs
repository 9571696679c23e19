use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, Level};

use speclint::language::Namespace;
use speclint::linting::{self, Options};
use speclint::parsing;
use speclint::requests::{self, Ledger, Status};
use speclint::templating;

mod problem;

use problem::{Identity, Render, Style, Terminal};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("speclint")
        .version(VERSION)
        .propagate_version(true)
        .about("Check block structure and cross-references in annotated specification documents.")
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the blocks, cross-references, and metadata of the given documents")
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Also report BEGIN markers whose identifier was already used."),
                )
                .arg(
                    Arg::new("namespace")
                        .long("namespace")
                        .default_value("ECON")
                        .help("The document-family tag that block identifiers and references carry."),
                )
                .arg(
                    Arg::new("explain")
                        .long("explain")
                        .action(ArgAction::SetTrue)
                        .help("Show the offending line and an explanation for each finding."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for colour even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf))
                        .help("The Markdown documents to check."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Fill a $NAME template from a flat JSON object")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the result here instead of to standard output."),
                )
                .arg(
                    Arg::new("template")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The template file."),
                )
                .arg(
                    Arg::new("data")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file holding the placeholder values."),
                ),
        )
        .subcommand(
            Command::new("requests")
                .about("List change requests and check they carry the required fields")
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_parser(["open", "in_review", "resolved"])
                        .help("Only list requests in this state."),
                )
                .arg(
                    Arg::new("ledger")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("The JSON file of change requests."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let code = match matches.subcommand() {
        Some(("check", submatches)) => {
            let colour = submatches.get_flag("raw-control-chars")
                || std::io::stdout().is_terminal();
            if colour {
                check(submatches, &Terminal)
            } else {
                check(submatches, &Identity)
            }
        }
        Some(("render", submatches)) => render(submatches),
        Some(("requests", submatches)) => review_requests(submatches),
        _ => {
            eprintln!("usage: speclint [COMMAND] ...");
            eprintln!("Try '--help' for more information.");
            2
        }
    };

    std::process::exit(code);
}

fn check(submatches: &ArgMatches, renderer: &impl Render) -> i32 {
    let tag = submatches
        .get_one::<String>("namespace")
        .map(String::as_str)
        .unwrap_or("ECON");

    let namespace = match Namespace::new(tag) {
        Ok(namespace) => namespace,
        Err(error) => {
            eprintln!("{}: {}", renderer.style(Style::Error, "error"), error);
            return 2;
        }
    };

    let options = Options {
        namespace,
        strict: submatches.get_flag("strict"),
    };
    let explain = submatches.get_flag("explain");

    let filenames: Vec<&PathBuf> = submatches
        .get_many::<PathBuf>("filename")
        .map(|values| values.collect())
        .unwrap_or_default();

    debug!(?options, "Checking {} file(s)", filenames.len());

    let mut failed = false;

    for filename in filenames {
        let content = match parsing::load(filename) {
            Ok(content) => content,
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error, renderer));
                failed = true;
                continue;
            }
        };

        let findings = linting::validate(&content, &options);

        if findings.is_empty() {
            println!(
                "{}: {}",
                renderer.style(Style::Success, "OK"),
                filename.display()
            );
            continue;
        }

        failed = true;
        info!("{} finding(s) in {}", findings.len(), filename.display());

        if explain {
            for finding in &findings {
                println!(
                    "{}\n",
                    problem::full_finding(finding, filename, &content, renderer)
                );
            }
        } else {
            println!(
                "{}",
                renderer.style(Style::Filename, &filename.to_string_lossy())
            );
            for finding in &findings {
                println!("  {}", problem::concise_finding(finding, renderer));
            }
        }
    }

    if failed {
        1
    } else {
        0
    }
}

fn render(submatches: &ArgMatches) -> i32 {
    let (Some(template), Some(data)) = (
        submatches.get_one::<PathBuf>("template"),
        submatches.get_one::<PathBuf>("data"),
    ) else {
        return 2;
    };

    let (template, data) = match (parsing::load(template), parsing::load(data)) {
        (Ok(template), Ok(data)) => (template, data),
        (Err(error), _) | (_, Err(error)) => {
            eprintln!("{}", problem::concise_loading_error(&error, &Identity));
            return 1;
        }
    };

    let result = match templating::fill(&template, &data) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error: {}", error);
            return 1;
        }
    };

    match submatches.get_one::<PathBuf>("output") {
        Some(output) => write_output(output, &result),
        None => {
            print!("{}", result);
            0
        }
    }
}

fn write_output(output: &Path, result: &str) -> i32 {
    match std::fs::write(output, result) {
        Ok(()) => {
            info!("Wrote {}", output.display());
            0
        }
        Err(error) => {
            debug!(?error);
            eprintln!("error: {}: {}", output.display(), error.kind());
            1
        }
    }
}

fn review_requests(submatches: &ArgMatches) -> i32 {
    let Some(filename) = submatches.get_one::<PathBuf>("ledger") else {
        return 2;
    };

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, &Identity));
            return 1;
        }
    };

    let ledger = match Ledger::from_json(&content) {
        Ok(ledger) => ledger,
        Err(error) => {
            eprintln!("error: {}: {}", filename.display(), error);
            return 1;
        }
    };

    let status = submatches
        .get_one::<String>("status")
        .and_then(|s| Status::parse(s));

    for request in ledger.list(status) {
        let branch = match request
            .branch
            .as_deref()
        {
            Some(branch) if !branch.is_empty() => format!(" ({})", branch),
            _ => String::new(),
        };
        println!(
            "[{}] {}{}: {}",
            request
                .status
                .as_str(),
            request.id,
            branch,
            request.title
        );
    }

    let problems = requests::validate(ledger.requests());
    if problems.is_empty() {
        println!("All change requests valid.");
        0
    } else {
        for problem in problems {
            println!("{}", problem);
        }
        1
    }
}
