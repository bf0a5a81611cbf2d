use anyhow::{bail, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Write};
use std::path::PathBuf;

use code_filters::DEFAULT_LANGUAGE;
use doc_config::DocConfig;
use elide_snippet::{check_paths, elide_source, passthrough_define, DEFAULT_EXTENSIONS};

fn cli() -> Command {
    Command::new("elide_snippet")
        .version("0.1.0")
        .about("Applies documentation pre-filters (DOXYGEN_IGNORE elision) to code snippets")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("TOML documentation config overriding the built-in defaults"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .global(true)
                .num_args(1)
                .default_value(DEFAULT_LANGUAGE)
                .help("Language label whose pre-filter is applied"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("elide")
                .about("Filters snippet files (or stdin) and writes the result to stdout")
                .arg(
                    Arg::new("files")
                        .num_args(0..)
                        .value_parser(value_parser!(PathBuf))
                        .help("Snippet files; reads stdin when omitted or `-`"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Verifies every snippet below the given paths can be filtered")
                .arg(
                    Arg::new("paths")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .action(ArgAction::Append)
                        .default_values(DEFAULT_EXTENSIONS.iter().copied())
                        .help("File extension to check (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("shim")
                .about("Prints the #define that keeps marked snippets compilable"),
        )
        .subcommand(
            Command::new("config")
                .about("Prints the effective documentation config as TOML")
                .arg(
                    Arg::new("doxygen_version")
                        .long("doxygen-version")
                        .num_args(1)
                        .help("Also print the fine print rendered for this Doxygen version"),
                ),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let config = DocConfig::load_or_default(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let lang = matches
        .get_one::<String>("lang")
        .map(String::as_str)
        .unwrap_or(DEFAULT_LANGUAGE);

    match matches.subcommand() {
        Some(("elide", sub)) => run_elide(&config, lang, sub),
        Some(("check", sub)) => run_check(&config, lang, sub),
        Some(("shim", _)) => {
            println!("{}", passthrough_define(&config, lang)?);
            Ok(())
        }
        Some(("config", sub)) => {
            print!("{}", config.to_toml_string()?);
            if let Some(version) = sub.get_one::<String>("doxygen_version") {
                println!();
                println!("# rendered fine print");
                println!("{}", config.render_fine_print(version));
            }
            Ok(())
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

fn run_elide(config: &DocConfig, lang: &str, matches: &ArgMatches) -> Result<()> {
    let registry = config.filter_registry()?;
    let files: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("files")
        .map(|files| files.collect())
        .unwrap_or_default();

    // Filter everything first so a failing file leaves stdout empty.
    let outputs = if files.is_empty() {
        vec![elide_source(&registry, lang, None)?]
    } else {
        files
            .iter()
            .map(|path| elide_source(&registry, lang, Some(path.as_path())))
            .collect::<Result<Vec<_>>>()?
    };

    let mut stdout = io::stdout().lock();
    for output in outputs {
        stdout.write_all(output.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

fn run_check(config: &DocConfig, lang: &str, matches: &ArgMatches) -> Result<()> {
    let registry = config.filter_registry()?;
    let paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("paths")
        .unwrap_or_default()
        .cloned()
        .collect();
    let extensions: Vec<String> = matches
        .get_many::<String>("ext")
        .unwrap_or_default()
        .map(|s| s.trim_start_matches('.').to_string())
        .collect();

    let report = check_paths(&registry, lang, &paths, &extensions)?;
    for (path, err) in &report.failures {
        eprintln!("{}: {}", path.display(), err);
    }
    if !report.is_ok() {
        bail!(
            "{} failure(s) while checking {} snippet(s)",
            report.failures.len(),
            report.checked
        );
    }
    println!("Checked {} snippet(s): all markers balanced.", report.checked);
    Ok(())
}
