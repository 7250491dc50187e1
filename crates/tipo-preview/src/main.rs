//! Tipo Preview - Main Entry Point
//!
//! Usage: `tipo-preview [SCRIPT.json] [--font PATH]...`
//!
//! Reads a dialogue script from the given file, or stdin when no file is
//! given, and prints one JSON report per balloon.

use std::path::PathBuf;

use anyhow::{Context, bail};
use tipo_preview::{Preview, Script};
use tipo_text::{FontDatabase, ShapingMeasurer};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: tipo-preview [SCRIPT.json] [--font PATH]...";

struct Args {
    script: Option<PathBuf>,
    fonts: Vec<PathBuf>,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let mut args = Args { script: None, fonts: Vec::new() };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--font" => {
                let path = iter.next().context("--font needs a path")?;
                args.fonts.push(path.into());
            }
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            path => {
                if args.script.is_some() {
                    bail!("more than one script given\n{}", USAGE);
                }
                args.script = Some(path.into());
            }
        }
    }
    Ok(Some(args))
}

fn read_script(path: Option<&PathBuf>) -> anyhow::Result<Script> {
    let script = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Script::from_json(&json)?
        }
        None => Script::from_reader(std::io::stdin().lock()).context("reading stdin")?,
    };
    Ok(script)
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args()? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut db = FontDatabase::with_system_fonts();
    for font in &args.fonts {
        db.load_font_file(font)?;
        tracing::info!("Loaded font {}", font.display());
    }
    tracing::debug!("{} font faces available", db.len());

    let script = read_script(args.script.as_ref())?;
    let preview = Preview::new(script.config.clone(), ShapingMeasurer::new(db))?;
    let reports = preview.render_script(&script)?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
