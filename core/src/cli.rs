use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;

use crate::config::Config;
use crate::interpreter::{Cerebrum, CerebrumBuilder, CerebrumError, Console};

#[derive(Parser, Debug)]
#[command(name = "neu")]
#[command(about = "neulang - run outline scripts written close to natural language", long_about = None)]
pub struct Cli {
    /// Outline script to run
    pub script: Option<PathBuf>,

    /// Outline text to run instead of a script
    #[arg(short = 'c', long = "command", conflicts_with = "script")]
    pub command: Option<String>,

    /// Enter the interactive shell after running
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Surface instruction faults instead of silently unwinding
    #[arg(long)]
    pub debug: bool,

    /// Skip unrecognized instructions instead of rejecting the script
    #[arg(long)]
    pub lenient: bool,

    /// Path to config file (overrides default search)
    #[arg(long)]
    pub config: Option<String>,

    /// Print the variable heap as JSON when done
    #[arg(long)]
    pub dump_vars: bool,
}

impl Cli {
    /// Whether the shell runs: asked for, or nothing else to do
    pub fn wants_shell(&self) -> bool {
        self.interactive || (self.script.is_none() && self.command.is_none())
    }
}

/// Whether the session should go on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the CLI by parsing process arguments
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli)
}

fn run_cli_with_args(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(Some(path.as_str())),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let mut cerebrum = cerebrum_builder(&cli, &config)?.build();
    execute(&cli, &config, &mut cerebrum, &mut std::io::stderr())
}

/// Engine builder from configuration with CLI overrides applied
pub fn cerebrum_builder(cli: &Cli, config: &Config) -> Result<CerebrumBuilder> {
    let mut builder = CerebrumBuilder::from_config(config).context("Invalid configuration")?;
    if cli.debug {
        builder = builder.debug(true);
    }
    if cli.lenient {
        builder = builder.strict(false);
    }
    Ok(builder)
}

/// Run the script or command, then the shell if wanted.
///
/// Prompts and shell errors go to `report`; script output goes to the
/// cerebrum's console.
pub fn execute<C: Console>(
    cli: &Cli,
    config: &Config,
    cerebrum: &mut Cerebrum<C>,
    report: &mut dyn Write,
) -> Result<()> {
    let mut flow = Flow::Continue;

    if let Some(path) = &cli.script {
        let text = read_script(path)?;
        flow = run_text(cerebrum, &text)
            .with_context(|| format!("Failed to run {}", path.display()))?;
    } else if let Some(command) = &cli.command {
        flow = run_text(cerebrum, command).context("Failed to run command")?;
    }

    if flow == Flow::Continue && cli.wants_shell() {
        shell(cerebrum, config.startup_script.as_deref(), report)?;
    }

    if cli.dump_vars {
        let json = serde_json::to_string_pretty(&cerebrum.thoughts().var_heap)
            .context("Failed to serialize variables")?;
        cerebrum.console_mut().write_line(&json)?;
    }

    Ok(())
}

/// `read` and `think` one piece of text, turning a quit request into `Flow::Quit`
pub fn run_text<C: Console>(cerebrum: &mut Cerebrum<C>, text: &str) -> Result<Flow, CerebrumError> {
    match cerebrum.run(text) {
        Ok(_) => Ok(Flow::Continue),
        Err(CerebrumError::QuitRequested) => Ok(Flow::Quit),
        Err(err) => Err(err),
    }
}

/// Interactive shell: one outline line per prompt until quit or end of input
pub fn shell<C: Console>(
    cerebrum: &mut Cerebrum<C>,
    startup_script: Option<&Path>,
    report: &mut dyn Write,
) -> Result<()> {
    if let Some(path) = startup_script {
        let text = read_script(path)?;
        match run_text(cerebrum, &text) {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(err) => report_error(report, &err)?,
        }
    }

    loop {
        write!(report, "neu> ")?;
        report.flush()?;

        let Some(line) = cerebrum.console_mut().read_line()? else {
            writeln!(report)?;
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        match run_text(cerebrum, &line) {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(err) => report_error(report, &err)?,
        }
    }
}

fn read_script(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn report_error(report: &mut dyn Write, err: &CerebrumError) -> Result<()> {
    writeln!(report, "error: {}", err)?;
    if let CerebrumError::Fault { trace, .. } = err {
        for text in trace.iter().rev() {
            writeln!(report, "  in '{}'", text)?;
        }
    }
    Ok(())
}
