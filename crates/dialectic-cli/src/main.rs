use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use dialectic_cli::{commands, read_catalog, VERSION};
use dialectic_model::FrameworkKey;
use dialectic_semantics::{Dialectic, EngineConfig, ExtensionSelection};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Catalog unreadable, malformed, or rejected by validation
const EXIT_LOAD_FAILURE: u8 = 2;

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .help("Framework catalog (.json, .yaml or .yml)")
}

fn framework_arg() -> Arg {
    Arg::new("framework")
        .long("framework")
        .short('f')
        .value_name("KEY")
        .help("Restrict to one framework of the catalog")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn cli() -> Command {
    Command::new("dialectic")
        .version(VERSION)
        .about("Grounded and preferred semantics for argumentation frameworks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Engine configuration (TOML)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (RUST_LOG overrides)"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("analyze")
                .about("Compute grounded and preferred extensions")
                .arg(catalog_arg())
                .arg(framework_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("audit")
                .about("Compare authored claims with computed semantics")
                .arg(catalog_arg())
                .arg(framework_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("attacks")
                .about("Show attacks on and from one argument")
                .arg(catalog_arg())
                .arg(framework_arg().required(true))
                .arg(
                    Arg::new("argument")
                        .long("argument")
                        .short('a')
                        .required(true)
                        .value_name("ID")
                        .help("Argument id"),
                )
                .arg(
                    Arg::new("extension")
                        .long("extension")
                        .short('e')
                        .value_name("SELECTION")
                        .value_parser(clap::value_parser!(ExtensionSelection))
                        .help("Also show the status under 'grounded' or 'preferred-N'"),
                ),
        )
}

fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Build an engine and load the catalog into it
fn load(path: &Path, config: Option<&Path>) -> Result<Dialectic> {
    let config = match config {
        Some(file) => EngineConfig::from_file(file)?,
        None => EngineConfig::default(),
    };
    let engine = Dialectic::new(config);
    engine.load_catalog(read_catalog(path)?)?;
    Ok(engine)
}

fn run(command: &str, args: &ArgMatches, engine: &Dialectic) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let requested = args.get_one::<String>("framework").map(String::as_str);

    let code = match command {
        "analyze" => {
            let keys = commands::select_keys(engine, requested)?;
            commands::analyze(engine, &keys, args.get_flag("json"), &mut out)?;
            ExitCode::SUCCESS
        }
        "audit" => {
            let keys = commands::select_keys(engine, requested)?;
            let found = commands::audit(engine, &keys, args.get_flag("json"), &mut out)?;
            if found == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        "attacks" => {
            let key = FrameworkKey::from(requested.unwrap_or_default());
            let argument = args
                .get_one::<String>("argument")
                .map(String::as_str)
                .unwrap_or_default();
            let selection = args.get_one::<ExtensionSelection>("extension").copied();
            commands::attacks(engine, &key, argument, selection, &mut out)?;
            ExitCode::SUCCESS
        }
        other => anyhow::bail!("unknown command '{other}'"),
    };
    out.flush()?;
    Ok(code)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"), matches.get_flag("log-json"));

    let Some((command, args)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };
    let Some(catalog) = args.get_one::<PathBuf>("catalog") else {
        return ExitCode::FAILURE;
    };

    let config = args.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let engine = match load(catalog, config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err:#}");
            return ExitCode::from(EXIT_LOAD_FAILURE);
        }
    };

    match run(command, args, &engine) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
