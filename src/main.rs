// Line-oriented host for the number processing filter
//
// Every stdin line is spoken as one utterance and printed after filtering.
// Lines starting with ':' drive the host side: toggle gesture, profile
// switches and the settings surfaces.

// Exclude entire file from coverage - binary entry point cannot be unit tested
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use number_processing::hotkey::{
    DoubleTapDetector, DEFAULT_DOUBLE_TAP_WINDOW_MS, TOGGLE_DESCRIPTION, TOGGLE_GESTURE,
};
use number_processing::settings::default_settings_path;
use number_processing::{
    LogAnnouncer, NumberProcessingPlugin, ProfileId, SettingsStore, SpeechSequence, TextFragment,
    ToggleOutcome,
};

type Plugin = NumberProcessingPlugin<SettingsStore, LogAnnouncer>;

const COMMAND_HELP: &str =
    "commands: :toggle, :profile [NAME], :auto on|off, :minlen N, :status, :quit";

#[derive(Parser, Debug)]
#[command(name = "number-processing", about = "Read long numbers digit by digit")]
struct Args {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Configuration profile active at startup
    #[arg(long)]
    profile: Option<String>,

    /// Treat each input line as a JSON array of speech fragments
    #[arg(long)]
    json: bool,

    /// Window in which a second :toggle opens quick settings
    #[arg(long, default_value_t = DEFAULT_DOUBLE_TAP_WINDOW_MS)]
    double_tap_ms: u64,
}

enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let settings_path = match args.settings {
        Some(path) => path,
        None => default_settings_path()?,
    };
    let mut store = SettingsStore::new(settings_path);
    store.load().context("Failed to load settings")?;

    let profile = ProfileId::from_optional(args.profile.as_deref());
    let mut plugin = Plugin::new(store, LogAnnouncer, profile)
        .with_toggle_detector(DoubleTapDetector::with_window(args.double_tap_ms));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;

        if let Some(command) = line.strip_prefix(':') {
            match run_command(&mut plugin, command) {
                Flow::Continue => continue,
                Flow::Quit => break,
            }
        }

        let output = if args.json {
            match filter_json(&plugin, &line) {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("{:#}", e);
                    continue;
                }
            }
        } else {
            filter_line(&plugin, &line)
        };
        writeln!(stdout, "{}", output)?;
    }

    plugin.terminate();
    Ok(())
}

fn filter_line(plugin: &Plugin, line: &str) -> String {
    plugin
        .filter_sequence(vec![TextFragment::from(line)])
        .iter()
        .filter_map(TextFragment::as_text)
        .collect()
}

fn filter_json(plugin: &Plugin, line: &str) -> Result<String> {
    let sequence: SpeechSequence =
        serde_json::from_str(line).context("Invalid speech sequence")?;
    let filtered = plugin.filter_sequence(sequence);
    Ok(serde_json::to_string(&filtered)?)
}

fn run_command(plugin: &mut Plugin, command: &str) -> Flow {
    let mut parts = command.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim);

    match name {
        "toggle" => match plugin.script_toggle() {
            ToggleOutcome::Toggled(status) => eprintln!("status: {:?}", status),
            ToggleOutcome::QuickSettingsRequested(prompt) => eprintln!(
                "{}: minimum {} (change with :minlen N)",
                prompt.title, prompt.min_run_length
            ),
        },
        "profile" => {
            let status = plugin.handle_profile_switch(ProfileId::from_optional(argument));
            eprintln!("profile {}: {:?}", plugin.state().active_profile(), status);
        }
        "profiles" => {
            let names = plugin.settings_source().profile_names();
            if names.is_empty() {
                eprintln!("no profile overrides");
            } else {
                eprintln!("profile overrides: {}", names.join(", "));
            }
        }
        "auto" => {
            let mut panel = plugin.settings_panel();
            panel.auto_enable = match argument {
                Some("on") => true,
                Some("off") => false,
                _ => {
                    eprintln!("usage: :auto on|off");
                    return Flow::Continue;
                }
            };
            match plugin.save_settings_panel(panel) {
                Ok(status) => eprintln!("status: {:?}", status),
                Err(e) => eprintln!("{}", e),
            }
        }
        "minlen" => {
            let Some(value) = argument.and_then(|a| a.parse::<i64>().ok()) else {
                eprintln!("usage: :minlen N");
                return Flow::Continue;
            };
            let mut prompt = plugin.quick_settings();
            prompt.min_run_length = value;
            if let Err(e) = plugin.save_quick_settings(&prompt) {
                eprintln!("{}", e);
            }
        }
        "status" => {
            let state = plugin.state();
            eprintln!(
                "profile {}: {:?}, auto-enable {}, minimum run length {}",
                state.active_profile(),
                state.status(),
                state.auto_enable(),
                state.patterns().min_run_length().get()
            );
        }
        "quit" => return Flow::Quit,
        _ => {
            eprintln!("{}", COMMAND_HELP);
            eprintln!(":toggle stands in for {}: {}", TOGGLE_GESTURE, TOGGLE_DESCRIPTION);
        }
    }

    Flow::Continue
}
