//! portlink command-line tool.
//!
//! Provides the `portlink` binary with two subcommands:
//! - `check`: decide whether a source field type may connect to a target
//!   field type, both given in text notation (`Name`, `Name[]`,
//!   `Name|Name[]`).
//! - `targets`: list every input port in a catalog file that accepts a given
//!   output port.
//!
//! Uses the same `portlink_check` functions as the HTTP server, so both entry
//! points reach identical decisions.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use portlink_check::{check_connection, connectable_inputs, validate_connection, ConnectionError, Verdict};
use portlink_core::{CoreError, Direction, FieldType, PortRef, TypeCatalog};

/// Node-graph port compatibility tools.
#[derive(Parser)]
#[command(name = "portlink", about = "Node-graph port compatibility tools")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check whether SOURCE may connect to TARGET.
    Check {
        /// Source (output port) field type, e.g. `IntegerField`.
        source: String,

        /// Target (input port) field type, e.g. `FloatField|FloatField[]`.
        target: String,

        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the input ports in a catalog that accept an output port.
    Targets {
        /// Path to the catalog document.
        #[arg(short, long)]
        catalog: PathBuf,

        /// Node type owning the output port.
        #[arg(short, long)]
        node: String,

        /// Output port name.
        #[arg(short, long)]
        port: String,
    },
}

/// Exit code: the edge is legal / the command succeeded.
const EXIT_OK: i32 = 0;
/// Exit code: the edge is not legal.
const EXIT_NOT_CONNECTABLE: i32 = 1;
/// Exit code: malformed type or unknown node/port.
const EXIT_BAD_INPUT: i32 = 2;
/// Exit code: the catalog could not be read or parsed.
const EXIT_CATALOG: i32 = 3;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match cli.command {
        Commands::Check {
            source,
            target,
            json,
        } => run_check(&source, &target, json),
        Commands::Targets {
            catalog,
            node,
            port,
        } => run_targets(&catalog, PortRef::new(node, port)),
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Machine-readable output of `check --json`.
#[derive(Serialize)]
struct CheckReport {
    source: FieldType,
    target: FieldType,
    connectable: bool,
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ConnectionError>,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 = connectable, 1 = not connectable, 2 = malformed type.
fn run_check(source: &str, target: &str, json: bool) -> i32 {
    let (source, target) = match (parse_type(source), parse_type(target)) {
        (Ok(s), Ok(t)) => (s, t),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Error: {}", e);
            return EXIT_BAD_INPUT;
        }
    };

    let verdict = check_connection(&source, &target);
    let connectable = verdict.is_connectable();
    let error = validate_connection(&source, &target).err();
    tracing::debug!(?verdict, "checked {} -> {}", source, target);

    if json {
        let report = CheckReport {
            source,
            target,
            connectable,
            verdict,
            error,
        };
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize report: {}\"}}", e)
        });
        println!("{}", json);
    } else {
        match &error {
            None => println!("connectable"),
            Some(err) => println!("not connectable: {}", err),
        }
    }

    if connectable {
        EXIT_OK
    } else {
        EXIT_NOT_CONNECTABLE
    }
}

/// Execute the targets subcommand.
///
/// Returns exit code: 0 = success, 2 = unknown node/port, 3 = catalog error.
fn run_targets(catalog_path: &Path, source: PortRef) -> i32 {
    let catalog = match TypeCatalog::from_path(catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!(
                "Error: failed to load catalog '{}': {}",
                catalog_path.display(),
                e
            );
            return EXIT_CATALOG;
        }
    };
    tracing::debug!(templates = catalog.len(), "catalog loaded");

    let source_type = match catalog.resolve(&source, Direction::Output) {
        Ok(ty) => ty,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_BAD_INPUT;
        }
    };

    for port in connectable_inputs(&catalog, source_type) {
        println!("{}", port);
    }
    EXIT_OK
}

fn parse_type(text: &str) -> Result<FieldType, CoreError> {
    text.parse()
}
