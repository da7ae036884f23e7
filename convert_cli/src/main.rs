//! # ConvertLab CLI Application
//!
//! Terminal front end for the conversion engine. It owns a
//! [`SessionState`] and turns each typed command into one event; all
//! conversion logic lives in `convert_core`.
//!
//! ## Usage
//!
//! ```text
//! convert_cli                              interactive session
//! convert_cli <value> <from> <to> [cat]    one-shot conversion
//! convert_cli --list [--json]              print all categories
//! convert_cli --config <path> ...          load start-up settings
//! ```
//!
//! One-shot mode exits with status 2 for bad input (an unparseable number or
//! an unknown id) and 1 for other failures.
//!
//! ## Environment Variables
//!
//! - `CONVERTLAB_CONFIG`: settings file used when `--config` is absent
//! - `RUST_LOG`: log level (default: warn)

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use convert_core::convert::try_convert;
use convert_core::settings::{resolve_settings, SETTINGS_ENV_VAR};
use convert_core::units::REGISTRY;
use convert_core::{
    find_category, format_number, list_categories, parse_number, ConvertError, ConvertResult, Event,
    SessionState, Settings, Unit,
};

const COMMANDS: &str = "\
Commands:
  list               show categories and units
  category <id>      switch category (keeps the value)
  from <unit>        change the source unit
  to <unit>          change the target unit
  swap               exchange source and target units
  set <text>         type into the source field
  result <text>      type into the result field (converts backwards)
  quick <n>          use quick value n
  state              dump the session as JSON
  help               show this list
  quit               leave";

/// Exit status for bad input (unparseable number, unknown id)
const EXIT_BAD_INPUT: u8 = 2;

// ============================================================================
// Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "convert_cli")]
#[command(about = "ConvertLab - unit and currency converter", long_about = None)]
#[command(version, after_help = COMMANDS)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, env = SETTINGS_ENV_VAR)]
    config: Option<PathBuf>,

    /// Print all categories and their units
    #[arg(short, long)]
    list: bool,

    /// Print the category list as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Value to convert once and exit
    #[arg(allow_negative_numbers = true, requires_all = ["from", "to"], conflicts_with = "list")]
    value: Option<String>,

    /// Source unit id
    from: Option<String>,

    /// Target unit id
    to: Option<String>,

    /// Category id (guessed from the units when omitted)
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
enum Mode {
    Interactive,
    List { json: bool },
    Convert {
        value: String,
        from: String,
        to: String,
        category: Option<String>,
    },
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.list {
            return Mode::List { json: self.json };
        }
        match (&self.value, &self.from, &self.to) {
            (Some(value), Some(from), Some(to)) => Mode::Convert {
                value: value.clone(),
                from: from.clone(),
                to: to.clone(),
                category: self.category.clone(),
            },
            _ => Mode::Interactive,
        }
    }
}

// ============================================================================
// Interactive commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Apply(Event),
    List,
    State,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

fn parse_command(line: &str, settings: &Settings) -> Command {
    let line = line.trim();
    let (name, arg) = match line.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim_start()),
        None => (line, ""),
    };

    let needs_arg = |what: &str, event: fn(String) -> Event| {
        if arg.is_empty() {
            Command::Invalid(format!("'{}' needs {}", name, what))
        } else {
            Command::Apply(event(arg.to_string()))
        }
    };

    match name {
        "" => Command::Empty,
        "list" | "ls" => Command::List,
        "state" => Command::State,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "swap" => Command::Apply(Event::Swap),
        "category" | "cat" => needs_arg("a category id", Event::SelectCategory),
        "from" => needs_arg("a unit id", Event::SelectFromUnit),
        "to" => needs_arg("a unit id", Event::SelectToUnit),
        // Empty text is a legitimate edit: it clears the other field
        "set" => Command::Apply(Event::EditSource(arg.to_string())),
        "result" => Command::Apply(Event::EditTarget(arg.to_string())),
        "quick" => match arg.parse::<usize>().ok().and_then(|n| settings.quick_value(n)) {
            Some(value) => Command::Apply(Event::EditSource(value.to_string())),
            None => Command::Invalid(format!(
                "quick values are 1-{}: {}",
                settings.quick_values.len(),
                settings.quick_values.join(", ")
            )),
        },
        other => Command::Invalid(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn render_state(state: &SessionState) -> String {
    let category = state.category();
    let from = state.from_unit();
    let to = state.to_unit();
    let show = |text: &str| if text.is_empty() { "-".to_string() } else { text.to_string() };
    let label = |unit: Option<&Unit>| unit.map_or("?", |unit| unit.label);

    let mut out = format!(
        "[{}] {} {}  =  {} {}",
        category.name,
        show(&state.from_text),
        label(from),
        show(&state.to_text),
        label(to)
    );
    for hint in [from, to].into_iter().flatten().filter_map(|unit| unit.hint) {
        out.push_str(&format!("\n  hint: {}", hint));
    }
    out
}

fn render_categories() -> String {
    let mut out = String::new();
    for category in list_categories() {
        out.push_str(&format!("{:<12} {} - {}\n", category.id, category.name, category.tagline));
        let units: Vec<String> = category
            .units
            .iter()
            .map(|unit| format!("{} ({})", unit.id, unit.label))
            .collect();
        out.push_str(&format!("             {}\n", units.join(", ")));
        out.push_str(&format!("             note: {}\n", category.note_or_default()));
    }
    out
}

/// Run one line of interactive input against the session.
///
/// Returns the text to print, or `None` when the user quits.
fn handle_line(state: &mut SessionState, line: &str, settings: &Settings) -> Option<String> {
    let output = match parse_command(line, settings) {
        Command::Apply(event) => {
            let previous_category = state.category_id.clone();
            state.apply(event);
            let rendered = render_state(state);
            if state.category_id != previous_category {
                format!("{}\n{}", state.category().note_or_default(), rendered)
            } else {
                rendered
            }
        }
        Command::List => render_categories().trim_end().to_string(),
        Command::State => serde_json::to_string_pretty(state).unwrap_or_else(|e| format!("Error: {}", e)),
        Command::Help => COMMANDS.to_string(),
        Command::Quit => return None,
        Command::Empty => String::new(),
        Command::Invalid(message) => message,
    };
    Some(output)
}

fn run_interactive(settings: &Settings) {
    println!("ConvertLab - Unit & Currency Converter");
    println!("======================================");
    println!("Type 'help' for commands. Quick values: {}", settings.quick_values.join(", "));
    println!();

    let mut state = settings.initial_session();
    println!("{}", render_state(&state));

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match handle_line(&mut state, &line, settings) {
            Some(output) if output.is_empty() => {}
            Some(output) => println!("{}", output),
            None => break,
        }
    }
}

// ============================================================================
// One-shot mode
// ============================================================================

fn convert_once(value: &str, from: &str, to: &str, category: Option<&str>) -> ConvertResult<String> {
    let numeric = parse_number(value)?;

    let category = match category {
        Some(id) => find_category(id)?,
        None => match REGISTRY.category_for_units(from, to) {
            Some(category) => category,
            None => {
                // Name the id that does not fit: the unknown one, or `to`
                // when both exist in different categories
                let home = list_categories().iter().find(|c| c.contains(from));
                return Err(match home {
                    Some(home) => ConvertError::unit_not_found(home.id, to),
                    None => ConvertError::unit_not_found("any", from),
                });
            }
        },
    };

    debug!(category = category.id, from, to, numeric, "one-shot conversion");
    let result = try_convert(numeric, from, to, category)?;
    Ok(format_number(result))
}

/// Bad input exits with [`EXIT_BAD_INPUT`]; anything else is a failure.
fn exit_status(error: &ConvertError) -> u8 {
    if error.is_recoverable() {
        EXIT_BAD_INPUT
    } else {
        1
    }
}

fn report_error(error: &ConvertError) -> ExitCode {
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::from(exit_status(error))
}

fn init_logging() {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let settings = match resolve_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => return report_error(&e),
    };

    match cli.mode() {
        Mode::List { json: true } => match serde_json::to_string_pretty(list_categories()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        Mode::List { json: false } => print!("{}", render_categories()),
        Mode::Convert {
            value,
            from,
            to,
            category,
        } => match convert_once(&value, &from, &to, category.as_deref()) {
            Ok(text) => println!("{}", text),
            Err(e) => return report_error(&e),
        },
        Mode::Interactive => run_interactive(&settings),
    }

    ExitCode::SUCCESS
}
