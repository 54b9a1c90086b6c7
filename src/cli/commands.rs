//! CLI commands implementation

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{ComponentType, StyleConfig};
use crate::error::{GlassError, GlassResult};
use crate::format::OutputFormat;
use crate::generator::{GeneratedCode, generate_code};
use crate::preset;

/// Liquid glass code generator
#[derive(Parser, Debug)]
#[command(name = "glassgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log debug output to stderr (overridden by GLASSGEN_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate code from a preset or a config file
    Generate {
        /// Built-in preset id (defaults to "modern")
        #[arg(short, long, conflicts_with = "config")]
        preset: Option<String>,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format: css, html, react, vue, typescript, tailwind
        #[arg(short, long, default_value = "css")]
        format: OutputFormat,
        /// Override the component type
        #[arg(short = 't', long = "type")]
        component_type: Option<ComponentType>,
        /// Write to a file (or a directory, named after the component)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit a JSON record with language and timestamp instead of raw code
        #[arg(long)]
        json: bool,
    },

    /// Write a preset's config to a JSON file
    Init {
        /// Built-in preset id
        #[arg(default_value = "modern")]
        preset: String,
        /// Destination file
        #[arg(short, long, default_value = "glass.json")]
        output: PathBuf,
    },

    /// List built-in presets
    Presets {
        /// Only presets with this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// List output formats
    Formats,
}

/// Run the CLI, printing to stdout.
///
/// # Errors
///
/// Returns an error if a config cannot be read, a preset is unknown, or
/// output cannot be written.
pub fn run(cli: Cli) -> GlassResult<()> {
    let stdout = std::io::stdout();
    execute(cli.command, &mut stdout.lock())
}

/// Run one command, printing to `out`.
pub fn execute(command: Commands, out: &mut impl Write) -> GlassResult<()> {
    match command {
        Commands::Generate {
            preset,
            config,
            format,
            component_type,
            output,
            json,
        } => {
            let config = resolve_config(preset.as_deref(), config.as_deref(), component_type)?;
            cmd_generate(&config, format, output.as_deref(), json, out)
        }
        Commands::Init { preset, output } => cmd_init(&preset, &output, out),
        Commands::Presets { tag } => cmd_presets(tag.as_deref(), out),
        Commands::Formats => cmd_formats(out),
    }
}

fn resolve_config(
    preset_id: Option<&str>,
    config_path: Option<&Path>,
    component_type: Option<ComponentType>,
) -> GlassResult<StyleConfig> {
    let mut config = match (preset_id, config_path) {
        (_, Some(path)) => StyleConfig::load(path)?,
        (Some(id), None) => preset::require_preset(id)?.config.clone(),
        (None, None) => StyleConfig::default(),
    };
    if let Some(component_type) = component_type {
        config.component_type = component_type;
    }
    Ok(config)
}

fn cmd_generate(
    config: &StyleConfig,
    format: OutputFormat,
    output: Option<&Path>,
    json: bool,
    out: &mut impl Write,
) -> GlassResult<()> {
    let code = generate_code(config, format);
    let text = if json {
        code.to_json_pretty()?
    } else {
        code.source_text.clone()
    };

    match output {
        Some(path) => {
            let path = output_path(path, &code, config, json);
            fs::write(&path, format!("{text}\n")).map_err(|e| GlassError::io(&path, e))?;
            tracing::info!(path = %path.display(), format = %format, "Wrote generated code");
            writeln!(out, "Wrote {}", path.display()).map_err(stdout_error)
        }
        None => writeln!(out, "{text}").map_err(stdout_error),
    }
}

/// Directories get a file named after the component.
fn output_path(path: &Path, code: &GeneratedCode, config: &StyleConfig, json: bool) -> PathBuf {
    if !path.is_dir() {
        return path.to_path_buf();
    }
    let name = code.file_name(config);
    if json {
        path.join(format!("{name}.json"))
    } else {
        path.join(name)
    }
}

fn cmd_init(preset_id: &str, output: &Path, out: &mut impl Write) -> GlassResult<()> {
    let preset = preset::require_preset(preset_id)?;
    preset.config.save(output)?;
    writeln!(out, "Wrote {} config to {}", preset.name, output.display()).map_err(stdout_error)
}

fn cmd_presets(tag: Option<&str>, out: &mut impl Write) -> GlassResult<()> {
    let presets: Vec<_> = match tag {
        Some(tag) => preset::presets_by_tag(tag).collect(),
        None => preset::presets().iter().collect(),
    };
    for p in presets {
        writeln!(
            out,
            "{:<16} {:<20} {:<11} [{}]",
            p.id,
            p.name,
            p.config.component_type.as_str(),
            p.tags.join(", ")
        )
        .map_err(stdout_error)?;
    }
    Ok(())
}

fn cmd_formats(out: &mut impl Write) -> GlassResult<()> {
    for format in OutputFormat::ALL {
        writeln!(
            out,
            "{:<11} {:<13} .{}",
            format.as_str(),
            format.label(),
            format.file_extension()
        )
        .map_err(stdout_error)?;
    }
    Ok(())
}

fn stdout_error(e: std::io::Error) -> GlassError {
    GlassError::io("<stdout>", e)
}
