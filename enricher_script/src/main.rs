//! CLI entry point for enricher_script.
//!
//! Serialize option JSON to command text, parse command text back to JSON,
//! and scan or lint documents for embedded commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use enricher_data::{
    AttackOptions, BasicRollOptions, CheckOptions, CommandInput, CommandKind, CommandOptions, DamageOptions, HealOptions,
    ItemOptions, ReferenceOptions, SaveOptions,
};
use enricher_script::{
    EnricherConfig, LintKind, lint_document, parse_command, scan_commands, serialize, serialize_attack,
    serialize_basic_roll, serialize_check, serialize_damage, serialize_heal, serialize_item, serialize_reference,
    serialize_save,
};
use log::info;
use serde_json::Value;
use walkdir::WalkDir;

const DOCUMENT_EXTENSIONS: [&str; 3] = ["html", "md", "txt"];

#[derive(Parser)]
#[command(author, version, about = "Write, read, and lint roll-command enrichers.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serialize an options record (JSON) as command text.
    Serialize {
        /// Command keyword: check, skill, tool, attack, damage, heal, save,
        /// concentration, item, roll, or reference.
        kind: String,
        /// Options JSON. Read from stdin when omitted.
        #[arg(long)]
        json: Option<String>,
    },
    /// Parse command text and print its options as JSON.
    Parse { text: String },
    /// List every command found in a file.
    Scan { path: PathBuf },
    /// Check a file or directory for non-canonical commands and unknown vocabulary.
    Lint {
        path: PathBuf,
        /// TOML file with house vocabulary and strictness settings.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Fail on commands that differ from their canonical text.
        #[arg(long)]
        deny_noncanonical: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Serialize { kind, json } => run_serialize(&kind, json),
        Commands::Parse { text } => run_parse(&text),
        Commands::Scan { path } => run_scan(&path),
        Commands::Lint {
            path,
            config,
            deny_noncanonical,
        } => run_lint(&path, config.as_deref(), deny_noncanonical),
    }
}

fn run_serialize(kind: &str, json: Option<String>) -> Result<()> {
    let kind = CommandKind::from_keyword(kind).ok_or_else(|| anyhow!("unknown command kind '{kind}'"))?;
    let json = match json {
        Some(json) => json,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading options from stdin")?;
            buf
        },
    };
    let value: Value = if json.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&json).context("parsing options JSON")?
    };
    info!("serializing {kind} options");
    println!("{}", serialize_value(kind, value)?);
    Ok(())
}

/// A JSON object is an options record; a string or integer is the legacy
/// scalar form; null is empty input.
fn serialize_value(kind: CommandKind, value: Value) -> Result<String> {
    match value {
        Value::Null => Ok(serialize(kind, &kind.empty_options())),
        Value::String(text) => Ok(serialize_scalar(kind, &Scalar::Text(text))),
        Value::Number(n) => {
            let n = n.as_i64().ok_or_else(|| anyhow!("legacy number input must be an integer"))?;
            Ok(serialize_scalar(kind, &Scalar::Number(n)))
        },
        Value::Object(_) => {
            let options = options_from_json(kind, value).with_context(|| format!("decoding {kind} options"))?;
            Ok(serialize(kind, &options))
        },
        other => bail!("expected an options object, string, or number; got {other}"),
    }
}

fn options_from_json(kind: CommandKind, value: Value) -> serde_json::Result<CommandOptions> {
    Ok(match kind.empty_options() {
        CommandOptions::Check(_) => CommandOptions::Check(serde_json::from_value(value)?),
        CommandOptions::Attack(_) => CommandOptions::Attack(serde_json::from_value(value)?),
        CommandOptions::Damage(_) => CommandOptions::Damage(serde_json::from_value(value)?),
        CommandOptions::Heal(_) => CommandOptions::Heal(serde_json::from_value(value)?),
        CommandOptions::Save(_) => CommandOptions::Save(serde_json::from_value(value)?),
        CommandOptions::Item(_) => CommandOptions::Item(serde_json::from_value(value)?),
        CommandOptions::Roll(_) => CommandOptions::Roll(serde_json::from_value(value)?),
        CommandOptions::Reference(_) => CommandOptions::Reference(serde_json::from_value(value)?),
    })
}

enum Scalar {
    Text(String),
    Number(i64),
}

impl Scalar {
    fn input<T>(&self) -> CommandInput<T> {
        match self {
            Scalar::Text(text) => CommandInput::Text(text.clone()),
            Scalar::Number(n) => CommandInput::Number(*n),
        }
    }
}

fn serialize_scalar(kind: CommandKind, scalar: &Scalar) -> String {
    match kind {
        CommandKind::Check | CommandKind::Skill | CommandKind::Tool => {
            serialize_check(scalar.input::<CheckOptions>(), kind)
        },
        CommandKind::Attack => serialize_attack(scalar.input::<AttackOptions>()),
        CommandKind::Damage => serialize_damage(scalar.input::<DamageOptions>()),
        CommandKind::Heal => serialize_heal(scalar.input::<HealOptions>()),
        CommandKind::Save => serialize_save(scalar.input::<SaveOptions>(), false),
        CommandKind::Concentration => serialize_save(scalar.input::<SaveOptions>(), true),
        CommandKind::Item => serialize_item(scalar.input::<ItemOptions>()),
        CommandKind::Roll => serialize_basic_roll(scalar.input::<BasicRollOptions>()),
        CommandKind::Reference => serialize_reference(scalar.input::<ReferenceOptions>()),
    }
}

fn run_parse(text: &str) -> Result<()> {
    let Some(parsed) = parse_command(text) else {
        eprintln!("not a command");
        process::exit(1);
    };
    println!("{}", serde_json::to_string_pretty(&parsed).context("encoding parsed command")?);
    Ok(())
}

fn run_scan(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let commands = scan_commands(&text);
    info!("{} command(s) found in '{}'", commands.len(), path.display());
    for command in commands {
        println!(
            "{}:{}  {:<13} {}",
            path.display(),
            line_of(&text, command.start),
            command.kind.to_string().cyan(),
            command.original_text
        );
    }
    Ok(())
}

fn run_lint(path: &Path, config_path: Option<&Path>, deny_noncanonical: bool) -> Result<()> {
    let mut config = config_path.map(EnricherConfig::load_or_default).unwrap_or_default();
    config.deny_noncanonical |= deny_noncanonical;

    let files = collect_documents(path)?;
    if files.is_empty() {
        eprintln!("lint: no .html/.md/.txt files under '{}'", path.display());
    }

    let mut failures = 0usize;
    for file in &files {
        failures += lint_one_file(file, &config)?;
    }
    if failures == 0 {
        eprintln!("{} ({} file(s))", "lint: OK".green(), files.len());
        Ok(())
    } else {
        eprintln!("{}", format!("lint: {failures} failure(s)").bright_red());
        process::exit(1);
    }
}

fn collect_documents(path: &Path) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", path.display()))?;
        let is_document = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
        if entry.file_type().is_file() && is_document {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Print findings for one file and return how many count as failures.
fn lint_one_file(path: &Path, config: &EnricherConfig) -> Result<usize> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut failures = 0;
    for finding in lint_document(&text, config) {
        let failed = finding.is_failure(config);
        if failed {
            failures += 1;
        }
        let label = if failed { "error".bright_red().bold() } else { "note".yellow() };
        let message = match &finding.kind {
            LintKind::NonCanonical { canonical, .. } => format!("canonical form is {canonical}"),
            LintKind::UnknownVocabulary { field, value } => format!("unknown {field} '{value}'"),
        };
        println!(
            "{}:{}: {label}: {}  {message}",
            path.display(),
            line_of(&text, finding.start),
            finding.text.dimmed()
        );
    }
    Ok(failures)
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
