use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use padel_hero::{
    DirFrameSource, FixedClock, FrameIndex, FrameRGBA, HeroConfig, HeroView, PaintOutcome,
    PowerSignals, TickControl, TickLoop,
};

#[derive(Parser, Debug)]
#[command(name = "padel-hero", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the hero at one scroll progress as a PNG.
    Frame(FrameArgs),
    /// Simulate a scroll from top to bottom and write every newly painted frame.
    Scrub(ScrubArgs),
    /// Print the frame asset paths the hero expects.
    Assets(AssetsArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Assets root (the directory holding `frames/`).
    #[arg(long)]
    assets: PathBuf,

    /// Scroll progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Hero configuration JSON. Defaults to the stock hero.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force the reduced-motion preference on.
    #[arg(long, default_value_t = false)]
    reduced_motion: bool,

    /// Force battery save-mode on.
    #[arg(long, default_value_t = false)]
    battery_save: bool,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    /// Assets root (the directory holding `frames/`).
    #[arg(long)]
    assets: PathBuf,

    /// Directory for the written PNGs.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of display refreshes across the scroll.
    #[arg(long, default_value_t = 240)]
    steps: u64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Hero configuration JSON. Defaults to the stock hero.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AssetsArgs {
    /// Hero configuration JSON. Defaults to the stock hero.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Scrub(args) => cmd_scrub(args),
        Command::Assets(args) => cmd_assets(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<HeroConfig> {
    let cfg = match path {
        Some(p) => HeroConfig::from_path(p)?,
        None => HeroConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn mount_ready(
    cfg: HeroConfig,
    assets: &Path,
    signals: PowerSignals,
) -> anyhow::Result<HeroView> {
    let mut view = HeroView::mount(cfg, Arc::new(DirFrameSource::new(assets)), signals)?;
    view.wait_ready();
    if let Some(frames) = view.frames() {
        let failed = frames.failures();
        if !failed.is_empty() {
            eprintln!(
                "warning: {} of {} frames failed to load (first: {})",
                failed.len(),
                frames.count().get(),
                failed[0].0
            );
        }
    }
    Ok(view)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !args.progress.is_finite() {
        anyhow::bail!("--progress must be a finite number");
    }
    let cfg = load_config(args.config.as_deref())?;
    let mut signals = PowerSignals::from_env();
    signals.prefers_reduced_motion |= args.reduced_motion;
    if args.battery_save {
        signals.battery_save = Some(true);
    }

    let mut view = mount_ready(cfg, &args.assets, signals)?;
    view.jump_to_progress(args.progress);
    let sample = view.tick(0.0);

    let snap = view
        .snapshot()
        .context("no drawing context for the configured surface")?;
    write_png(&args.out, &snap)?;

    println!(
        "progress {:.4} frame {} paint {:?}",
        sample.progress, sample.frame_index, sample.paint
    );
    for beat in &sample.beats {
        println!("{}\t{:.3}", beat.id, beat.opacity);
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be >= 1");
    }
    let cfg = load_config(args.config.as_deref())?;
    let mut view = mount_ready(cfg, &args.assets, PowerSignals::from_env())?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut clock = FixedClock::at_fps(args.fps, args.steps)?;
    let mut ticks = TickLoop::new(view.mode(), view.token().clone());
    let denom = (args.steps - 1).max(1) as f64;
    let mut step = 0u64;
    let mut last_written: Option<FrameIndex> = None;
    let mut written = 0usize;
    let mut failure: Option<anyhow::Error> = None;

    ticks.run(&mut clock, |dt| {
        let y = view.scroll().geometry().scroll_for(step as f64 / denom);
        view.on_scroll(y);
        let sample = view.tick(dt);
        step += 1;

        if sample.paint != Some(PaintOutcome::Painted) || last_written == Some(sample.frame_index)
        {
            return TickControl::Continue;
        }
        let Some(snap) = view.snapshot() else {
            return TickControl::Continue;
        };
        let out = args
            .out_dir
            .join(format!("step_{:05}_frame_{:03}.png", step - 1, sample.frame_index.0));
        if let Err(e) = write_png(&out, &snap) {
            failure = Some(e);
            return TickControl::Stop;
        }
        println!(
            "step {} progress {:.4} frame {} digest {:016x} -> {}",
            step - 1,
            sample.progress,
            sample.frame_index,
            snap.digest(),
            out.display()
        );
        last_written = Some(sample.frame_index);
        written += 1;
        TickControl::Continue
    });

    if let Some(e) = failure {
        return Err(e);
    }
    eprintln!(
        "wrote {written} frames over {} ticks to {}",
        ticks.scheduled(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_assets(args: AssetsArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    for idx in cfg.frame_count.indices() {
        println!("{}", cfg.naming.url_path(idx)?);
    }
    Ok(())
}

fn write_png(out: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
