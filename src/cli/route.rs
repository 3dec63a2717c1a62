//! CLI route: executes parsed commands against the core library.

use crate::cli::parse::{Cli, Commands, DateResolution};
use crate::metadata::{METADATA_NAME, README_NAME};
use crate::problems::find_problems;
use crate::tree::{flatten, to_jso, TreeBuilder};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use dialoguer::Input;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Execute a parsed command. Returns the process exit code so `problems
/// --check` can signal failure without treating it as an error.
pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Export {
            root,
            sort,
            indent,
            flatlines,
            recursion,
        } => {
            run_export(root, sort, indent, flatlines, recursion)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Problems {
            root,
            check,
            skip_problems,
        } => run_problems(root, check, skip_problems),
        Commands::Create {
            name,
            directory,
            description,
            responsible,
            date_resolution,
            today,
            leaf,
        } => {
            run_create(
                name,
                directory,
                description,
                responsible,
                date_resolution,
                today,
                leaf,
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_export(
    root: PathBuf,
    sort: bool,
    indent: Option<i32>,
    flatlines: bool,
    recursion: i32,
) -> Result<()> {
    let entry = TreeBuilder::new(root)
        .with_max_depth(recursion)
        .build()
        .context("could not build entry tree")?;
    let jso = to_jso(&entry);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if flatlines {
        for record in flatten(&jso) {
            if sort {
                // Round trip through Value sorts object keys.
                serde_json::to_writer(&mut out, &serde_json::to_value(&record)?)?;
            } else {
                serde_json::to_writer(&mut out, &record)?;
            }
            writeln!(out)?;
        }
    } else if sort {
        write_json(&mut out, &serde_json::to_value(&jso)?, indent)?;
    } else {
        write_json(&mut out, &jso, indent)?;
    }
    Ok(())
}

/// Serialize one value with the requested indentation and a trailing
/// newline: none = compact, 0 = newlines only, N = spaces, -N = tabs.
fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, indent: Option<i32>) -> Result<()> {
    match indent {
        None => serde_json::to_writer(&mut *out, value)?,
        Some(n) => {
            let unit = if n >= 0 {
                " ".repeat(n as usize)
            } else {
                "\t".repeat(n.unsigned_abs() as usize)
            };
            let formatter = PrettyFormatter::with_indent(unit.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
            value.serialize(&mut ser)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

fn run_problems(root: PathBuf, check: bool, skip_problems: bool) -> Result<ExitCode> {
    let root = root
        .canonicalize()
        .with_context(|| format!("could not resolve root {}", root.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut found = 0usize;

    for problem in find_problems(&root, skip_problems) {
        let rel = problem.path.strip_prefix(&root).unwrap_or(&problem.path);
        let rel = if rel.as_os_str().is_empty() {
            Path::new(".")
        } else {
            rel
        };
        writeln!(
            out,
            "{}\t{}\t{}",
            problem.responsible.join(","),
            rel.display(),
            problem.kind
        )?;
        found += 1;
        if check {
            return Ok(ExitCode::FAILURE);
        }
    }

    info!(problems = found, "problem scan finished");
    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::too_many_arguments)]
fn run_create(
    name: String,
    directory: PathBuf,
    description: Option<String>,
    responsible: Vec<String>,
    date_resolution: DateResolution,
    today: Option<NaiveDate>,
    leaf: bool,
) -> Result<()> {
    let directory = directory
        .canonicalize()
        .with_context(|| format!("could not resolve directory {}", directory.display()))?;
    let date = today.unwrap_or_else(|| Local::now().date_naive());
    let full_name = format!("{}{}", date_prefix(date, date_resolution), name);
    let entry = directory.join(&full_name);

    if entry.join(README_NAME).is_file() || entry.join(METADATA_NAME).is_file() {
        warn!(
            "directory already exists and has {} or {}",
            README_NAME, METADATA_NAME
        );
        return Ok(());
    }

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .interact_text()
            .context("could not read description")?,
    };
    let responsible = if responsible.is_empty() {
        let raw: String = Input::new()
            .with_prompt("Responsible (comma-separated)")
            .interact_text()
            .context("could not read responsible parties")?;
        raw.split(',')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect()
    } else {
        responsible
    };

    let mut meta = serde_yaml::Mapping::new();
    meta.insert(
        "description".into(),
        normalise_whitespace(&description).into(),
    );
    meta.insert(
        "responsible".into(),
        serde_yaml::Value::Sequence(responsible.iter().map(|r| r.clone().into()).collect()),
    );
    if leaf {
        meta.insert("ignore".into(), "*".into());
    }
    let yaml =
        serde_yaml::to_string(&serde_yaml::Value::Mapping(meta)).context("could not render metadata")?;

    fs::create_dir_all(&entry)
        .with_context(|| format!("could not create {}", entry.display()))?;
    fs::write(
        entry.join(README_NAME),
        format!("# {}\n\n{}\n", full_name, description.trim()),
    )?;
    fs::write(entry.join(METADATA_NAME), yaml)?;

    info!(entry = %entry.display(), "created entry");
    println!("{}", entry.display());
    Ok(())
}

/// Leading date prefix for a new entry name, e.g. "2024_", "2024-06_",
/// "2024-06-30_".
fn date_prefix(date: NaiveDate, resolution: DateResolution) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    let end = match resolution {
        DateResolution::Year => 4,
        DateResolution::Month => 7,
        DateResolution::Day => 10,
    };
    format!("{}_", &iso[..end])
}

fn normalise_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
