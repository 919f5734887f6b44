use event_timeline::api::{MemoryStorage, TimelineEngine, TimelineEngineConfig};
use event_timeline::core::{Instant, RangeSelector, parse_instant};
use event_timeline::render::NullRenderer;
use event_timeline::telemetry;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: timeline_frame_tool <frame|labels|export-outline|import-outline> --input <path> --output <path> [--range <1day|3days|1week|2weeks|1month>] [--cursor <instant>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Frame,
    Labels,
    ExportOutline,
    ImportOutline,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: PathBuf,
    range: Option<RangeSelector>,
    cursor: Option<Instant>,
}

type ToolEngine = TimelineEngine<MemoryStorage, NullRenderer>;

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    match args.command {
        CommandKind::Frame => {
            let mut engine = engine_from_json(&raw, &args)?;
            engine.render().map_err(|err| err.to_string())?;
            write_json(&args.output, &engine.build_frame())
        }
        CommandKind::Labels => {
            let mut engine = engine_from_json(&raw, &args)?;
            write_json(&args.output, &engine.build_frame().labels)
        }
        CommandKind::ExportOutline => {
            let engine = engine_from_json(&raw, &args)?;
            write_text(&args.output, &engine.export_outline())
        }
        CommandKind::ImportOutline => {
            let mut engine = empty_engine()?;
            let report = engine.import_outline(&raw).map_err(|err| err.to_string())?;
            if report.has_skipped() {
                eprintln!("skipped {} outline block(s)", report.skipped);
            }
            let json = engine.export_json().map_err(|err| err.to_string())?;
            write_text(&args.output, &json)
        }
    }
}

fn empty_engine() -> Result<ToolEngine, String> {
    TimelineEngine::new(
        MemoryStorage::default(),
        NullRenderer::default(),
        TimelineEngineConfig::default(),
    )
    .map_err(|err| err.to_string())
}

fn engine_from_json(raw: &str, args: &CliArgs) -> Result<ToolEngine, String> {
    let mut engine = empty_engine()?;
    let report = engine.import_json(raw).map_err(|err| err.to_string())?;
    if report.has_skipped() {
        eprintln!("skipped {} invalid record(s)", report.skipped);
    }
    if let Some(range) = args.range {
        engine.set_range(range);
    }
    if let Some(cursor) = args.cursor {
        if !engine.set_cursor(cursor) {
            return Err(format!("cursor {cursor} leaves an empty window"));
        }
    }
    Ok(engine)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    let payload =
        serde_json::to_string_pretty(value).map_err(|err| format!("serialize failed: {err}"))?;
    write_text(path, &payload)
}

fn write_text(path: &Path, payload: &str) -> Result<(), String> {
    fs::write(path, format!("{payload}\n"))
        .map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("frame") => CommandKind::Frame,
        Some("labels") => CommandKind::Labels,
        Some("export-outline") => CommandKind::ExportOutline,
        Some("import-outline") => CommandKind::ImportOutline,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut range = None::<RangeSelector>;
    let mut cursor = None::<Instant>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--range" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --range".to_owned())?;
                range = Some(value.parse().map_err(|err| format!("{err}"))?);
            }
            "--cursor" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --cursor".to_owned())?;
                cursor = Some(parse_instant(&value).map_err(|err| err.to_string())?);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
        range,
        cursor,
    })
}
