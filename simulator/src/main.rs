use anyhow::Context;
use clap::Parser;
use generator::profile::build_sentences_from_config;
use log::info;
use searadar::Mr2313StationType;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Replays MR-231-3 radar sentences through the converter")]
struct Args {
    /// Sentence file to replay; stdin is read when neither this nor a generator is set
    #[arg(long)]
    input: Option<PathBuf>,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Replay this many synthetic sentences instead of reading input
    #[arg(long)]
    generate: Option<usize>,
    /// Seed for the synthetic sentence generator
    #[arg(long)]
    seed: Option<u64>,
    /// Print decoded messages as JSON lines
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Abort on the first sentence with broken framing or fields
    #[arg(long, default_value_t = false)]
    stop_on_error: bool,
}

fn read_feed(args: &Args, config: &WorkflowConfig) -> anyhow::Result<String> {
    if let Some(path) = &args.input {
        return fs::read_to_string(path)
            .with_context(|| format!("reading sentences from {}", path.display()));
    }

    if let Some(generator) = &config.generator {
        let sentences = build_sentences_from_config(generator)?;
        return Ok(sentences.join("\n"));
    }

    let mut feed = String::new();
    io::stdin()
        .read_to_string(&mut feed)
        .context("reading sentences from stdin")?;
    Ok(feed)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?.with_overrides(args.stop_on_error, args.generate, args.seed)
    } else {
        WorkflowConfig::from_args(args.stop_on_error, args.generate, args.seed)
    };

    info!(
        "station {} (codec {}), delimiters {:?}",
        Mr2313StationType::STATION_TYPE,
        Mr2313StationType::CODEC_NAME,
        Mr2313StationType::DELIMITERS
    );

    let feed = read_feed(&args, &workflow_config)?;
    let runner = Runner::new(workflow_config.clone());
    let result = runner.execute(&feed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for message in &result.messages {
        if args.json {
            writeln!(out, "{}", message.to_json()?)?;
        } else {
            writeln!(out, "{:?}", message)?;
        }
    }

    let summary = result.summary();
    if args.json {
        writeln!(out, "{}", serde_json::to_string(&result.metrics)?)?;
    } else {
        writeln!(out, "Replay -> {}", summary)?;
    }

    if let Some(report_path) = &workflow_config.report {
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)
            .with_context(|| format!("opening report {}", report_path.display()))?;
        file.write_all(format!("{}\n", summary).as_bytes())?;
    }

    Ok(())
}
