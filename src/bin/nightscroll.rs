use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use nightscroll::{
    ActivationWindow, ElementKind, HeadlessHost, SceneConfig, SweepThreading, Timeline, Viewport,
    fingerprint_frame, frame_to_svg, progress_samples, render_frame_rgba,
};
use tracing_subscriber::EnvFilter;

/// Host refresh interval used when simulating a session.
const TICK: Duration = Duration::from_nanos(16_666_667);

#[derive(Parser, Debug)]
#[command(name = "nightscroll", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a session and write one frame as JSON, SVG or PNG.
    Frame(FrameArgs),
    /// Evaluate evenly spaced progress samples and write the frames as JSON.
    Sweep(SweepArgs),
    /// Validate the built-in scene and report entrance window coverage.
    Check,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scroll progress in [0, 1] at the end of the simulation.
    #[arg(long)]
    progress: f64,

    /// Session time in seconds at which the frame is taken.
    #[arg(long, default_value_t = 5.0)]
    elapsed: f64,

    /// How the reader reaches `--progress`.
    #[arg(long, value_enum, default_value_t = ScrollMode::Ramp)]
    scroll: ScrollMode,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Output path; the format follows the extension (`.json`, `.svg`, `.png`).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of evenly spaced samples over [0, 1].
    #[arg(long, default_value_t = 101)]
    samples: usize,

    /// Session time in seconds shared by every sample.
    #[arg(long, default_value_t = 5.0)]
    elapsed: f64,

    /// Evaluate samples on a thread pool.
    #[arg(long)]
    parallel: bool,

    /// Thread pool size (implies `--parallel`).
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ScrollMode {
    /// Scroll at a steady rate from the top to the target over the whole session.
    Ramp,
    /// Jump to the target on the first tick.
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutFormat {
    Json,
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Check => cmd_check(),
    }
}

fn built_in_scene() -> anyhow::Result<SceneConfig> {
    let scene = SceneConfig::default();
    scene.validate().context("built-in scene failed validation")?;
    Ok(scene)
}

fn parse_elapsed(secs: f64) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(secs).with_context(|| format!("invalid --elapsed {secs}"))
}

fn out_format(path: &Path) -> anyhow::Result<OutFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(OutFormat::Json),
        Some("svg") => Ok(OutFormat::Svg),
        Some("png") => Ok(OutFormat::Png),
        _ => anyhow::bail!(
            "unsupported output '{}' (expected .json, .svg or .png)",
            path.display()
        ),
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

/// Run a headless session up to `elapsed`, ticking at the host refresh rate.
fn simulate(
    scene: SceneConfig,
    target: f64,
    elapsed: Duration,
    mode: ScrollMode,
) -> anyhow::Result<Timeline> {
    let mut timeline = Timeline::new(scene)?;
    timeline.begin_session(&mut HeadlessHost::default());

    let total = elapsed.as_secs_f64();
    let mut now = Duration::ZERO;
    loop {
        let progress = match mode {
            ScrollMode::Jump => target,
            ScrollMode::Ramp if total > 0.0 => target * (now.as_secs_f64() / total),
            ScrollMode::Ramp => target,
        };
        timeline.set_progress(progress);
        timeline.advance(now);
        if now >= elapsed {
            break;
        }
        now = (now + TICK).min(elapsed);
    }
    Ok(timeline)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let format = out_format(&args.out)?;
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within [0, 1], got {}", args.progress);
    }
    let scene = built_in_scene()?;
    let elapsed = parse_elapsed(args.elapsed)?;

    let timeline = simulate(scene, args.progress, elapsed, args.scroll)?;
    let frame = timeline.frame()?;
    let viewport = Viewport::new(f64::from(args.width), f64::from(args.height));

    ensure_parent(&args.out)?;
    match format {
        OutFormat::Json => {
            std::fs::write(&args.out, frame.to_json_pretty()?)
                .with_context(|| format!("write json '{}'", args.out.display()))?;
        }
        OutFormat::Svg => {
            let svg = frame_to_svg(timeline.config(), &frame, viewport)?;
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        OutFormat::Png => {
            let raster = render_frame_rgba(timeline.config(), &frame, viewport)?;
            image::save_buffer_with_format(
                &args.out,
                &raster.data,
                raster.width,
                raster.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", args.out.display()))?;
        }
    }

    eprintln!(
        "wrote {} (progress {:.4}, fingerprint {})",
        args.out.display(),
        frame.progress.get(),
        fingerprint_frame(&frame)
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let scene = built_in_scene()?;
    let elapsed = parse_elapsed(args.elapsed)?;
    let timeline = simulate(scene, 0.0, elapsed, ScrollMode::Jump)?;

    let samples = progress_samples(args.samples);
    let threading = SweepThreading {
        parallel: args.parallel || args.threads.is_some(),
        threads: args.threads,
    };
    let (frames, stats) = timeline.sweep(&samples, &threading)?;

    let entries: Vec<serde_json::Value> = frames
        .iter()
        .map(|f| {
            serde_json::json!({
                "fingerprint": fingerprint_frame(f).to_string(),
                "frame": f,
            })
        })
        .collect();
    let doc = serde_json::json!({
        "elapsed_secs": elapsed.as_secs_f64(),
        "stats": stats,
        "frames": entries,
    });

    ensure_parent(&args.out)?;
    let text = serde_json::to_string_pretty(&doc).context("serialize sweep")?;
    std::fs::write(&args.out, text)
        .with_context(|| format!("write json '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} distinct)",
        args.out.display(),
        stats.frames_total,
        stats.frames_distinct
    );
    Ok(())
}

fn cmd_check() -> anyhow::Result<()> {
    let scene = built_in_scene()?;

    println!("scene ok: {} elements", scene.elements.len());
    println!("  spacer: {}vh", scene.scroll.spacer_vh);
    for kind in [
        ElementKind::Arrow,
        ElementKind::Star,
        ElementKind::Moon,
        ElementKind::Cloud,
    ] {
        let count = scene.elements.iter().filter(|e| e.kind() == kind).count();
        if count > 0 {
            println!("  {}: {count}", kind.as_str());
        }
    }

    let stars = scene.entrance_windows(ElementKind::Star);
    if !stars.is_empty() {
        let coverage = ActivationWindow::union(&stars)
            .iter()
            .map(|(a, b)| format!("[{a:.2}, {b:.2}]"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  star entrances cover {coverage}");
    }
    let overlaps = scene.overlapping_entrances(ElementKind::Star);
    if overlaps.is_empty() {
        println!("  no overlapping star entrances");
    } else {
        for (a, b) in overlaps {
            println!("  warning: star entrances {a} and {b} overlap");
        }
    }
    Ok(())
}
