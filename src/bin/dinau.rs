use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use dinau::catalog::{merge_feed, FeedEntry, HardwareCatalog, MergedBenchmarks, Namespace};
use dinau::matcher::fuzzy_match_hardware;
use dinau::payload::decode_specs_payload;
use dinau::sources::fetch_steam_listing;
use dinau::types::UserSpecs;
use dinau::util::env as env_util;

#[derive(Parser, Debug)]
#[command(name = "dinau", version, about = "Can-this-machine-run-it checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a machine's specs against a game's published requirements
    Check(CheckArgs),
    /// Parse requirement HTML into structured per-field records
    ParseRequirements(RequirementArgs),
    /// Resolve a free-text hardware name against the catalog
    MatchHardware {
        /// Catalog namespace to search
        #[arg(long, value_enum, default_value_t = NamespaceArg::Gpu)]
        namespace: NamespaceArg,
        /// Free-text hardware name (renderer string, lspci line, ...)
        input: String,
    },
    /// Decode a scanner specs payload and print the specs as JSON
    DecodePayload {
        /// The DINAU:-prefixed payload string
        payload: String,
    },
    /// Fetch the Geekbench feeds, merge them over the curated seed, and
    /// write the merged catalog JSON
    Benchmarks {
        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to a JSON file with the machine's specs
    #[arg(long, conflicts_with = "payload")]
    specs: Option<PathBuf>,
    /// Scanner payload string instead of a specs file
    #[arg(long)]
    payload: Option<String>,
    /// Steam app id to fetch requirements from
    #[arg(long, conflicts_with_all = ["minimum", "recommended", "minimum_file", "recommended_file"])]
    steam_appid: Option<u64>,
    #[command(flatten)]
    requirements: RequirementArgs,
}

#[derive(Args, Debug, Default)]
struct RequirementArgs {
    /// Minimum-tier requirement HTML
    #[arg(long, conflicts_with = "minimum_file")]
    minimum: Option<String>,
    /// Recommended-tier requirement HTML
    #[arg(long, conflicts_with = "recommended_file")]
    recommended: Option<String>,
    /// Read minimum-tier HTML from a file
    #[arg(long)]
    minimum_file: Option<PathBuf>,
    /// Read recommended-tier HTML from a file
    #[arg(long)]
    recommended_file: Option<PathBuf>,
}

impl RequirementArgs {
    fn resolve(&self) -> Result<(Option<String>, Option<String>)> {
        let read = |path: &PathBuf| {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        };
        let minimum = match (&self.minimum, &self.minimum_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => Some(read(path)?),
            (None, None) => None,
        };
        let recommended = match (&self.recommended, &self.recommended_file) {
            (Some(text), _) => Some(text.clone()),
            (None, Some(path)) => Some(read(path)?),
            (None, None) => None,
        };
        Ok((minimum, recommended))
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NamespaceArg {
    Cpu,
    Gpu,
    Os,
}

impl From<NamespaceArg> for Namespace {
    fn from(ns: NamespaceArg) -> Self {
        match ns {
            NamespaceArg::Cpu => Namespace::Cpu,
            NamespaceArg::Gpu => Namespace::Gpu,
            NamespaceArg::Os => Namespace::Os,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_util::init_env();
    dinau::tracing::init_tracing("dinau=info")?;

    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => check(args).await,
        Command::ParseRequirements(args) => parse_requirements(args),
        Command::MatchHardware { namespace, input } => match_hardware(namespace, &input),
        Command::DecodePayload { payload } => decode_payload(&payload),
        Command::Benchmarks { out } => benchmarks(out).await,
    }
}

fn load_specs(args: &CheckArgs) -> Result<UserSpecs> {
    if let Some(path) = &args.specs {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading specs file {}", path.display()))?;
        return serde_json::from_str(&raw).context("parsing specs file");
    }
    if let Some(payload) = &args.payload {
        return decode_specs_payload(payload)
            .ok_or_else(|| anyhow!("payload is not a valid specs payload"));
    }
    Err(anyhow!("provide --specs <file> or --payload <string>"))
}

async fn check(args: CheckArgs) -> Result<()> {
    let specs = load_specs(&args)?;

    let (minimum, recommended) = if let Some(appid) = args.steam_appid {
        let client = Client::new();
        let listing = fetch_steam_listing(&client, appid).await?;
        info!(game = %listing.name, appid, "fetched steam requirements");
        (listing.fragments.minimum, listing.fragments.recommended)
    } else {
        args.requirements.resolve()?
    };

    let catalog = HardwareCatalog::seeded();
    let report = dinau::check_system(
        &specs,
        minimum.as_deref(),
        recommended.as_deref(),
        &catalog,
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_requirements(args: RequirementArgs) -> Result<()> {
    let (minimum, recommended) = args.resolve()?;
    if minimum.is_none() && recommended.is_none() {
        return Err(anyhow!("provide at least one of --minimum/--recommended"));
    }
    let parsed = dinau::parser::parse_requirements(minimum.as_deref(), recommended.as_deref());
    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

fn match_hardware(namespace: NamespaceArg, input: &str) -> Result<()> {
    let catalog = HardwareCatalog::seeded();
    let ns = Namespace::from(namespace);
    let names = catalog.names(ns);
    let result = match fuzzy_match_hardware(input, &names) {
        Some(name) => json!({
            "input": input,
            "match": name,
            "score": catalog.score(ns, name),
        }),
        None => json!({ "input": input, "match": null }),
    };
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn decode_payload(payload: &str) -> Result<()> {
    let specs =
        decode_specs_payload(payload).ok_or_else(|| anyhow!("not a valid specs payload"))?;
    println!("{}", serde_json::to_string_pretty(&specs)?);
    Ok(())
}

#[derive(Debug, Deserialize)]
struct GeekbenchCpuEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    multicore_score: f64,
}

#[derive(Debug, Deserialize)]
struct GeekbenchGpuEntry {
    #[serde(default)]
    name: String,
    opencl: Option<f64>,
    vulkan: Option<f64>,
    metal: Option<f64>,
    cuda: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GeekbenchFeed<T> {
    #[serde(default = "Vec::new")]
    devices: Vec<T>,
}

async fn fetch_feed<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> Result<Vec<T>> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;
    if !resp.status().is_success() {
        return Err(anyhow!("{url} returned {}", resp.status()));
    }
    let feed: GeekbenchFeed<T> = resp.json().await.with_context(|| format!("decoding {url}"))?;
    Ok(feed.devices)
}

async fn benchmarks(out: Option<PathBuf>) -> Result<()> {
    let curated = HardwareCatalog::seeded();
    let curated_cpu: IndexMap<String, f64> = curated
        .entries(Namespace::Cpu)
        .map(|(name, score)| (name.to_string(), score))
        .collect();
    let curated_gpu: IndexMap<String, f64> = curated
        .entries(Namespace::Gpu)
        .map(|(name, score)| (name.to_string(), score))
        .collect();

    let client = Client::new();
    let cpu_feed: Vec<FeedEntry> =
        match fetch_feed::<GeekbenchCpuEntry>(&client, "https://browser.geekbench.com/processor-benchmarks.json")
            .await
        {
            Ok(devices) => devices
                .into_iter()
                .filter(|e| !e.name.is_empty() && e.multicore_score > 0.0)
                .map(|e| FeedEntry {
                    name: e.name,
                    score: e.multicore_score,
                })
                .collect(),
            Err(err) => {
                warn!(error = %err, "cpu feed unavailable, keeping curated scores");
                Vec::new()
            }
        };
    let gpu_feed: Vec<FeedEntry> =
        match fetch_feed::<GeekbenchGpuEntry>(&client, "https://browser.geekbench.com/gpu-benchmarks.json")
            .await
        {
            Ok(devices) => devices
                .into_iter()
                .filter_map(|e| {
                    // OpenCL is the most universal score; fall back across APIs.
                    let score = [e.opencl, e.vulkan, e.metal, e.cuda]
                        .into_iter()
                        .flatten()
                        .find(|s| *s > 0.0)?;
                    if e.name.is_empty() {
                        return None;
                    }
                    Some(FeedEntry {
                        name: e.name,
                        score,
                    })
                })
                .collect(),
            Err(err) => {
                warn!(error = %err, "gpu feed unavailable, keeping curated scores");
                Vec::new()
            }
        };

    let (cpu_list, cpu_scores) = merge_feed(&curated_cpu, &cpu_feed);
    let (gpu_list, gpu_scores) = merge_feed(&curated_gpu, &gpu_feed);
    let merged = MergedBenchmarks {
        cpu_list,
        gpu_list,
        cpu_scores,
        gpu_scores,
    };

    let rendered = serde_json::to_string_pretty(&merged)?;
    match out {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote merged catalog");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
