use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context as ReadlineContext, Editor, Helper,
};
use shell_words::split;
use tracing::{debug, info};

use crate::{
    config::{Config, ConfigManager},
    errors::StorageError,
    storage::{JsonRecordSource, RecordSource, StaticRecordSource},
};

use super::{
    output::{self, set_preferences, OutputPreferences},
    pages::{self, PageContext},
    routes::{Route, RouteError, KNOWN_PATHS},
};

pub const SCRIPT_ENV: &str = "KAKEIBO_CLI_SCRIPT";

const PROMPT: &str = "kakeibo> ";
const SHELL_COMMANDS: [&str; 3] = ["exit", "help", "nav"];

const USAGE: &str = "\
Usage: kakeibo_cli [OPTIONS] [ROUTE]

Renders one page when ROUTE is given, otherwise starts an interactive shell.

Routes:
  /                 Home
  /about            About
  /contact          Contact
  /expenses         Record table, balance and monthly totals
  /expenses/<id>    Detail of one record

Options:
  --data <FILE>     Read records from a JSON file instead of the built-in sample
  --config <FILE>   Use this config file instead of the default location
  --plain           Disable colours and box-drawing characters
  --json            Print page data as JSON (one-shot mode only)
  --quiet           Suppress informational messages
  -h, --help        Show this help";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}

/// Reasons a single shell line could not be run.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("Could not parse line: {0}")]
    Parse(#[from] shell_words::ParseError),
    #[error(transparent)]
    Route(#[from] RouteError),
}

impl LineError {
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            LineError::Route(err) => err.suggestion(),
            LineError::Parse(_) => None,
        }
    }
}

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
    pub json: bool,
    pub quiet: bool,
    pub help: bool,
    pub route: Option<String>,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => parsed.data = Some(required_value(&mut args, "--data")?.into()),
                "--config" => {
                    parsed.config = Some(required_value(&mut args, "--config")?.into())
                }
                "--plain" => parsed.plain = true,
                "--json" => parsed.json = true,
                "--quiet" => parsed.quiet = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option `{flag}`")))
                }
                _ if parsed.route.is_some() => {
                    return Err(CliError::Usage(format!("unexpected argument `{arg}`")))
                }
                _ => parsed.route = Some(arg),
            }
        }
        Ok(parsed)
    }
}

fn required_value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("`{flag}` expects a value")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Entry point for the binary.
pub fn run_cli(args: Vec<String>) -> Result<(), CliError> {
    let args = CliArgs::parse(args)?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = manager.load()?;
    config.plain_mode |= args.plain;
    if let Some(data) = &args.data {
        config.data_file = Some(data.clone());
    }
    set_preferences(OutputPreferences {
        plain_mode: config.plain_mode,
        quiet_mode: args.quiet,
    });

    let ctx = load_context(&config)?;

    match args.route.as_deref() {
        Some(raw) => {
            let route: Route = raw.parse()?;
            let page = if args.json {
                pages::render_json(route, &ctx)?
            } else {
                pages::render(route, &ctx)
            };
            println!("{page}");
            Ok(())
        }
        None if std::env::var_os(SCRIPT_ENV).is_some() => run_script(&ctx),
        None => run_interactive(&ctx),
    }
}

/// Loads the record snapshot selected by `config`.
pub fn load_context(config: &Config) -> Result<PageContext, CliError> {
    let source: Box<dyn RecordSource> = match &config.data_file {
        Some(path) => Box::new(JsonRecordSource::new(path)),
        None => Box::new(StaticRecordSource::sample()),
    };
    let records = source.load()?;
    info!(source = source.name(), count = records.len(), "record snapshot ready");
    Ok(PageContext::new(records, source.name(), config))
}

fn run_interactive(ctx: &PageContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new()));
    output::info("Type a page path (e.g. /expenses), `nav`, `help` or `exit`.");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if handle_line(ctx, trimmed) == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(ctx: &PageContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if handle_line(ctx, &line?) == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

/// Runs one shell line and prints its output.
pub fn handle_line(ctx: &PageContext, line: &str) -> LoopControl {
    match dispatch(ctx, line) {
        Ok((control, Some(text))) => {
            println!("{text}");
            control
        }
        Ok((control, None)) => control,
        Err(err) => {
            output::warning(&err);
            if let Some(path) = err.suggestion() {
                output::info(format!("Did you mean `{path}`?"));
            }
            LoopControl::Continue
        }
    }
}

/// Interprets one shell line without printing.
pub fn dispatch(
    ctx: &PageContext,
    line: &str,
) -> Result<(LoopControl, Option<String>), LineError> {
    let tokens = split(line)?;
    let Some(command) = tokens.first() else {
        return Ok((LoopControl::Continue, None));
    };
    debug!(command = %command, "dispatching shell line");

    match command.to_ascii_lowercase().as_str() {
        "exit" | "quit" => Ok((LoopControl::Exit, None)),
        "help" => Ok((LoopControl::Continue, Some(USAGE.to_string()))),
        "nav" | "menu" => Ok((LoopControl::Continue, Some(pages::navigation_menu()))),
        _ => {
            let route: Route = command.parse()?;
            Ok((LoopControl::Continue, Some(pages::render(route, ctx))))
        }
    }
}

struct CommandHelper {
    candidates: Vec<String>,
}

impl CommandHelper {
    fn new() -> Self {
        let mut candidates: Vec<String> = KNOWN_PATHS
            .iter()
            .chain(SHELL_COMMANDS.iter())
            .map(|name| name.to_string())
            .collect();
        candidates.sort();
        Self { candidates }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let matches = self
            .candidates
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
