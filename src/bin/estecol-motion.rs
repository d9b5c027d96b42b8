use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use estecol_motion::{ElementId, MotionConfig, Page, ScrollAnimator, Viewport, VisualState};

#[derive(Parser, Debug)]
#[command(name = "estecol-motion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the reveal annotations found on a page.
    Scan(ScanArgs),
    /// Replay a scroll script against a page and print element visuals after each step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ScanArgs {
    /// Input page JSON.
    #[arg(long)]
    page: PathBuf,

    /// Motion config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page JSON.
    #[arg(long)]
    page: PathBuf,

    /// Motion config JSON (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scroll offsets to visit, in order.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    scroll: Vec<f64>,

    /// Frame step in milliseconds.
    #[arg(long, default_value_t = 16)]
    step_ms: u32,

    /// Time to let animations run after each scroll, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    hold_ms: u32,
}

#[derive(serde::Serialize)]
struct Snapshot {
    scroll_y: f64,
    elements: Vec<ElementSnapshot>,
}

#[derive(serde::Serialize)]
struct ElementSnapshot {
    id: ElementId,
    revealed: Option<bool>,
    visual: Option<VisualState>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Scan(args) => cmd_scan(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_page(path: &Path) -> anyhow::Result<(Page, Viewport)> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read page '{}'", path.display()))?;
    Page::from_json_str(&s).with_context(|| "parse page JSON")
}

fn read_config(path: Option<&Path>) -> anyhow::Result<MotionConfig> {
    let Some(path) = path else {
        return Ok(MotionConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    MotionConfig::from_json_str(&s).with_context(|| "parse motion config")
}

fn cmd_scan(args: ScanArgs) -> anyhow::Result<()> {
    let (page, _) = read_page(&args.page)?;
    let config = read_config(args.config.as_deref())?;
    let specs = estecol_motion::scan(&page, None, &config);
    println!("{}", serde_json::to_string_pretty(&specs)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let (mut page, viewport) = read_page(&args.page)?;
    let config = read_config(args.config.as_deref())?;
    if args.step_ms == 0 {
        anyhow::bail!("--step-ms must be > 0");
    }
    let dt = f64::from(args.step_ms) / 1000.0;
    let hold_frames = (f64::from(args.hold_ms) / 1000.0 / dt).ceil() as usize;
    let settle_frames =
        ((config.settle_delay + config.late_refresh_delay) / dt).ceil() as usize + 1;

    let mut anim = ScrollAnimator::new(config, viewport)?;
    anim.initialize();
    for _ in 0..settle_frames {
        anim.advance(&mut page, dt);
    }

    let mut snapshots = Vec::with_capacity(args.scroll.len());
    for y in args.scroll {
        anim.on_scroll(&mut page, viewport.scrolled_to(y));
        for _ in 0..hold_frames {
            anim.advance(&mut page, dt);
        }
        snapshots.push(snapshot(&anim, &page, y));
    }
    anim.cleanup();

    println!("{}", serde_json::to_string_pretty(&snapshots)?);
    Ok(())
}

fn snapshot(anim: &ScrollAnimator, page: &Page, scroll_y: f64) -> Snapshot {
    let elements = page
        .element_ids()
        .filter_map(|id| {
            let visual = page.visual(id);
            let revealed = anim.registry().state_for(id).map(|s| s.revealed);
            (visual.is_some() || revealed.is_some()).then_some(ElementSnapshot {
                id,
                revealed,
                visual,
            })
        })
        .collect();
    Snapshot { scroll_y, elements }
}
