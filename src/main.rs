use anyhow::{Context, Result};
use clap::Parser;
use human_pulse::config::{ConfigOverrides, PulseConfig};
use human_pulse::render::{render_overview, render_region, PresentationMode};
use human_pulse::{Emotion, Pulse, PulseError};
use reqwest::Client;
use tracing::{debug, info, warn};

/// Human Pulse - regional emotional sentiment from search interest
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Regions to show; lists every region when omitted
    regions: Vec<String>,

    /// Dataset path or http(s) URL (overrides PULSE_DATA)
    #[arg(short, long)]
    source: Option<String>,

    /// Popup variant
    #[arg(short, long, value_enum)]
    mode: Option<PresentationMode>,

    /// Show the driver breakdown for an emotion (repeatable)
    #[arg(short, long)]
    expand: Vec<Emotion>,

    /// Max concerns per emotion breakdown
    #[arg(long)]
    concern_limit: Option<usize>,

    /// IANA timezone for "last updated" (overrides PULSE_TZ)
    #[arg(long)]
    tz: Option<String>,

    /// Emit reports as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = PulseConfig::resolve(ConfigOverrides {
        source: args.source,
        tz: args.tz,
        mode: args.mode,
        expand: args.expand,
        concern_limit: args.concern_limit,
    })?;
    info!("Starting human_pulse - source={}, mode={:?}", cfg.source, cfg.mode);

    let client = Client::builder().build()?;
    let pulse = Pulse::load(&client, &cfg.source, cfg.tz).await;
    // already logged once by load(); surface it as the exit error
    let session = pulse.session().context("no sentiment data available")?;

    let overview = args.regions.is_empty();
    let names: Vec<String> = if overview {
        session.region_names().map(str::to_string).collect()
    } else {
        args.regions
    };

    let mut reports = Vec::with_capacity(names.len());
    for name in &names {
        match session.select(name) {
            Ok(r) => reports.push(r),
            Err(PulseError::MissingRegion(region)) => {
                warn!("Unknown region, skipping - region={}", region);
            }
            Err(e) => return Err(e.into()),
        }
    }
    debug!("Reports built - requested={}, built={}", names.len(), reports.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if overview {
        print!("{}", render_overview(&reports));
        return Ok(());
    }

    for report in &reports {
        let breakdowns = cfg
            .toggles
            .visible()
            .filter(|&e| cfg.mode.is_expandable(e))
            .map(|e| session.breakdown(&report.region, e, cfg.concern_limit))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        println!("{}", render_region(report, cfg.mode, &breakdowns));
    }
    Ok(())
}
