//! CLI logic for the Diptych diagram tool.
//!
//! Every subcommand is one explicit transform driven through a
//! [`DiagramSession`]: text is parsed into a graph, the graph is generated
//! back into text, or either is saved to or loaded from a JSON snapshot.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};
pub use error_adapter::ErrorAdapter;

use std::{
    fs,
    io::{self, Write as _},
    path::Path,
};

use log::{info, warn};

use diptych::{
    DiagramSession, DiptychError, Engine, ImportOutcome, UnsupportedEngine, config::AppConfig,
};

/// Run the Diptych CLI application
///
/// # Errors
///
/// Returns `DiptychError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown engine tags, or an input whose language cannot be guessed
/// - Snapshot files that are not valid snapshots
pub fn run(args: &Args) -> Result<(), DiptychError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Convert {
            input,
            from,
            to,
            output,
        } => convert(
            &app_config,
            input,
            from.as_deref(),
            to,
            output.as_deref(),
        ),
        Command::Export {
            input,
            engine,
            output,
        } => export(&app_config, input, engine.as_deref(), output.as_deref()),
        Command::Import {
            snapshot,
            engine,
            output,
        } => import(&app_config, snapshot, engine.as_deref(), output.as_deref()),
    }
}

fn convert(
    config: &AppConfig,
    input: &str,
    from: Option<&str>,
    to: &str,
    output: Option<&str>,
) -> Result<(), DiptychError> {
    let source_engine = source_engine(input, from)?;
    let target_engine = to.parse::<Engine>()?;
    info!(input, from:% = source_engine, to:% = target_engine; "Converting diagram");

    let mut session = load_text(config, input, source_engine)?;
    session.set_engine(target_engine);
    let code = session.generate();

    write_output(output, code)
}

fn export(
    config: &AppConfig,
    input: &str,
    engine: Option<&str>,
    output: Option<&str>,
) -> Result<(), DiptychError> {
    let engine = source_engine(input, engine)?;
    info!(input, engine:% = engine; "Exporting diagram snapshot");

    let session = load_text(config, input, engine)?;
    let json = session.export_json()?;

    write_output(output, &json)
}

fn import(
    config: &AppConfig,
    snapshot: &str,
    engine: Option<&str>,
    output: Option<&str>,
) -> Result<(), DiptychError> {
    let target_engine = engine.map(str::parse::<Engine>).transpose()?;
    info!(snapshot; "Importing diagram snapshot");

    let json = fs::read_to_string(snapshot)?;
    let mut session = DiagramSession::new(config);
    session.import_snapshot(&json)?;
    if let Some(engine) = target_engine {
        session.set_engine(engine);
    }
    let code = session.generate();

    write_output(output, code)
}

/// Creates a session holding the parsed contents of `input`.
fn load_text(config: &AppConfig, input: &str, engine: Engine) -> Result<DiagramSession, DiptychError> {
    let source = fs::read_to_string(input)?;

    let mut session = DiagramSession::new(config);
    session.set_engine(engine);
    session.set_code(source);
    match session.import() {
        ImportOutcome::Imported { nodes, edges } => {
            info!(nodes, edges; "Parsed input");
            if nodes == 0 {
                warn!(input, engine:% = engine; "No connections recognised in input");
            }
        }
        ImportOutcome::Skipped => warn!(input; "Input is blank"),
    }
    Ok(session)
}

/// Resolves the input language from an explicit tag or the file extension.
fn source_engine(input: &str, explicit: Option<&str>) -> Result<Engine, DiptychError> {
    if let Some(tag) = explicit {
        return Ok(tag.parse::<Engine>()?);
    }

    let extension = Path::new(input)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    Engine::from_extension(extension)
        .ok_or_else(|| UnsupportedEngine::new(format!(".{extension} (use --from or --engine)")).into())
}

fn write_output(output: Option<&str>, content: &str) -> Result<(), DiptychError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            info!(output_file = path; "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
