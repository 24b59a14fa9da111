//! Command-line host for the markdown-delink engine.
//!
//! Sources text from files or stdin, loads persisted settings, lets flags
//! override them, and applies the link-removal passes. Whole files play the
//! role of "remove links from file"; `--lines` plays "remove links from
//! selection".

pub mod listing;
pub mod selection;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser};
use markdown_delink_config::Config;
use markdown_delink_engine::{LinkType, PassOrder, RemovalSettings, process_text};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use selection::{LineRange, apply_to_selection};

#[derive(Debug, Parser)]
#[command(
    name = "markdown-delink",
    version,
    about = "Strip Markdown hyperlinks and wikilinks, leaving everything else untouched"
)]
pub struct Cli {
    /// Files or glob patterns to process. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Config file to load (default: ~/.config/markdown-delink/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Persist the effective settings to the config file.
    #[arg(long)]
    pub save_config: bool,

    /// Rewrite changed files instead of printing to stdout.
    #[arg(short, long)]
    pub in_place: bool,

    /// Report files that would change and exit 1 if any would; write nothing.
    #[arg(long, conflicts_with = "in_place")]
    pub check: bool,

    /// Print every recognised link instead of removing anything.
    #[arg(long, conflicts_with_all = ["in_place", "check"])]
    pub list: bool,

    /// Only transform this 1-based inclusive line range.
    #[arg(long, value_name = "START:END")]
    pub lines: Option<LineRange>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Flags that override the loaded settings.
#[derive(Debug, Default, Args)]
pub struct PolicyArgs {
    /// Leave hyperlinks alone.
    #[arg(long)]
    pub no_hyperlinks: bool,

    /// Leave wikilinks alone.
    #[arg(long)]
    pub no_wikilinks: bool,

    /// Run the wikilink pass before the hyperlink pass.
    #[arg(long)]
    pub wikilinks_first: bool,

    /// Remove hyperlink text along with the link.
    #[arg(long)]
    pub drop_text: bool,

    /// Only remove hyperlinks of this kind: both, internal or external.
    #[arg(long, value_name = "TYPE")]
    pub link_type: Option<LinkType>,

    /// Never remove hyperlinks whose URL contains PATTERN.
    #[arg(long, value_name = "PATTERN")]
    pub whitelist: Vec<String>,

    /// Remove only hyperlinks whose URL contains a blacklist pattern.
    #[arg(long)]
    pub blacklist_mode: bool,

    #[arg(long, value_name = "PATTERN")]
    pub blacklist: Vec<String>,

    /// Keep the wikilink path even when it has an alias.
    #[arg(long)]
    pub drop_alias: bool,

    /// Never remove wikilinks to exactly this path.
    #[arg(long, value_name = "PATH")]
    pub wikilink_whitelist: Vec<String>,

    /// Remove only wikilinks whose path is on the wikilink blacklist.
    #[arg(long)]
    pub wikilink_blacklist_mode: bool,

    #[arg(long, value_name = "PATH")]
    pub wikilink_blacklist: Vec<String>,
}

impl PolicyArgs {
    /// Applies flags on top of `settings`. Boolean flags only ever switch a setting
    /// away from its default; lists are appended to the configured lists.
    pub fn apply(&self, settings: &mut RemovalSettings) {
        if self.no_hyperlinks {
            settings.remove_hyperlinks = false;
        }
        if self.no_wikilinks {
            settings.remove_wikilinks = false;
        }
        if self.wikilinks_first {
            settings.order = PassOrder::WikilinksFirst;
        }

        let hyperlinks = &mut settings.hyperlinks;
        if self.drop_text {
            hyperlinks.keep_text = false;
        }
        if let Some(link_type) = self.link_type {
            hyperlinks.link_type = link_type;
        }
        if self.blacklist_mode {
            hyperlinks.blacklist_mode = true;
        }
        hyperlinks.whitelist.extend(self.whitelist.iter().cloned());
        hyperlinks.blacklist.extend(self.blacklist.iter().cloned());

        let wikilinks = &mut settings.wikilinks;
        if self.drop_alias {
            wikilinks.keep_alias = false;
        }
        if self.wikilink_blacklist_mode {
            wikilinks.blacklist_mode = true;
        }
        wikilinks
            .whitelist
            .extend(self.wikilink_whitelist.iter().cloned());
        wikilinks
            .blacklist
            .extend(self.wikilink_blacklist.iter().cloned());
    }
}

/// What a run did, for the exit status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub inputs: usize,
    pub changed: usize,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(path) => Config::expand_path(path),
            None => Config::config_path(),
        }
    }
}

/// Loads settings from the config file and applies the flag overrides.
pub fn effective_settings(cli: &Cli) -> Result<RemovalSettings> {
    let config_path = cli.config_path();
    log::debug!("Config path: {}", config_path.display());

    let mut settings = match Config::load_from_path(&config_path)? {
        Some(config) => config.removal,
        None => {
            if cli.config.is_some() && !cli.save_config {
                log::warn!(
                    "Config file {} not found, using defaults",
                    config_path.display()
                );
            }
            RemovalSettings::default()
        }
    };
    cli.policy.apply(&mut settings);
    Ok(settings)
}

/// Runs the CLI with explicit stdin/stdout so it can be driven from tests.
pub fn run(cli: &Cli, stdin: &mut dyn Read, stdout: &mut dyn Write) -> Result<Summary> {
    let settings = effective_settings(cli)?;

    if cli.save_config {
        let config_path = cli.config_path();
        Config {
            removal: settings.clone(),
        }
        .save_to_path(&config_path)
        .with_context(|| format!("failed to save config to {}", config_path.display()))?;
        log::info!("Saved settings to {}", config_path.display());
        if cli.files.is_empty() {
            return Ok(Summary::default());
        }
    }

    let files = expand_inputs(&cli.files)?;
    let mut summary = Summary::default();

    if files.is_empty() {
        if cli.in_place {
            bail!("--in-place needs at least one FILE");
        }
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        let changed = process_one("<stdin>", &text, cli, &settings, stdout)?;
        summary.inputs = 1;
        summary.changed = usize::from(changed.is_some());
        if !cli.check && !cli.list {
            stdout.write_all(changed.as_deref().unwrap_or(text.as_str()).as_bytes())?;
        }
        return Ok(summary);
    }

    for path in &files {
        let name = path.display().to_string();
        let original = fs::read_to_string(path)
            .with_context(|| format!("failed to read {name}"))?;
        let changed = process_one(&name, &original, cli, &settings, stdout)?;
        summary.inputs += 1;
        summary.changed += usize::from(changed.is_some());

        if cli.in_place {
            if let Some(updated) = &changed {
                write_file(path, updated)?;
            }
        } else if !cli.check && !cli.list {
            stdout.write_all(changed.as_deref().unwrap_or(original.as_str()).as_bytes())?;
        }
    }

    Ok(summary)
}

/// Processes one input. Returns the updated text if it differs from `text`.
///
/// In `--list` mode the report is written to `stdout` and nothing changes.
/// In `--check` mode the name of a changed input is written to `stdout`.
fn process_one(
    name: &str,
    text: &str,
    cli: &Cli,
    settings: &RemovalSettings,
    stdout: &mut dyn Write,
) -> Result<Option<String>> {
    if cli.list {
        let links = match cli.lines {
            Some(range) => listing::list_links_in(text, range.byte_range(text)),
            None => listing::list_links(text),
        };
        stdout.write_all(listing::render(name, &links).as_bytes())?;
        return Ok(None);
    }

    let updated = apply_to_selection(text, cli.lines, |s| process_text(s, settings));
    if updated == text {
        log::info!("No links found in {name}");
        return Ok(None);
    }

    log::info!("Links removed from {name}");
    if cli.check {
        writeln!(stdout, "{name}")?;
    }
    Ok(Some(updated))
}

/// Expands glob patterns; plain paths are passed through as given.
fn expand_inputs(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        if !arg.contains(['*', '?', '[']) {
            files.push(PathBuf::from(arg));
            continue;
        }
        let before = files.len();
        for entry in glob::glob(arg).with_context(|| format!("invalid glob pattern `{arg}`"))? {
            let path = entry.with_context(|| format!("failed to expand `{arg}`"))?;
            if path.is_file() {
                files.push(path);
            }
        }
        if files.len() == before {
            bail!("pattern `{arg}` matched no files");
        }
    }
    Ok(files)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
