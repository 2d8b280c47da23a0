use expenditure_outlook::api::{PageBuilder, PageConfig};
use expenditure_outlook::table::Dataset;
use expenditure_outlook::telemetry;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

const USAGE: &str = "usage: render_page [--config <path>] [--dataset <path>] [--output <path>]";

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    dataset: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = match &args.config {
        Some(path) => PageConfig::load(path).map_err(|e| e.to_string())?,
        None => PageConfig::default(),
    };

    let mut builder = PageBuilder::new(config).map_err(|e| e.to_string())?;
    if let Some(path) = &args.dataset {
        let dataset = Dataset::load(path).map_err(|e| e.to_string())?;
        builder = builder.with_dataset(dataset);
    }

    let document = builder.render_html().map_err(|e| e.to_string())?;

    match &args.output {
        Some(path) => {
            fs::write(path, &document)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            info!(path = %path.display(), bytes = document.len(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .map_err(|err| format!("failed to write stdout: {err}"))?;
        }
    }
    Ok(())
}

/// Returns `None` when help was requested.
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Option<CliArgs>, String> {
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--config" => &mut parsed.config,
            "--dataset" => &mut parsed.dataset,
            "--output" => &mut parsed.output,
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        *slot = Some(PathBuf::from(value));
    }

    Ok(Some(parsed))
}
