use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "galton", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the fully revealed artwork as a PNG.
    Still(StillArgs),
    /// Export the reveal animation as MP4 (requires `ffmpeg` on PATH) or a PNG sequence.
    Animate(AnimateArgs),
    /// Dump the simulated paths and color scheme as JSON.
    Paths(PathsArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Animator config JSON. Overrides `--preset`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in preset used when no config file is given.
    #[arg(long, default_value = "mint")]
    preset: String,

    /// PRNG seed. A random seed is drawn and logged when neither this nor the config sets one.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of balls per generation.
    #[arg(long)]
    balls: Option<u32>,
}

#[derive(Args, Debug)]
struct StillArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Mp4,
    Png,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output MP4 path, or a directory for `--format png`.
    #[arg(long)]
    out: PathBuf,

    /// Output frame rate. Defaults to one frame per reveal interval.
    #[arg(long)]
    fps: Option<u32>,

    /// Frames to hold the finished artwork for. Defaults to one second.
    #[arg(long)]
    hold: Option<u32>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Mp4)]
    format: Format,

    /// Fail instead of overwriting an existing MP4.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Args, Debug)]
struct PathsArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("info"))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Still(args) => cmd_still(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Paths(args) => cmd_paths(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<galton::AnimatorConfig> {
    let mut cfg = match &args.config {
        Some(path) => galton::AnimatorConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => galton::AnimatorConfig::preset(&args.preset)?,
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(balls) = args.balls {
        cfg.num_balls = balls;
    }
    cfg.validate()?;
    let seed = galton::resolve_seed(&mut cfg);
    tracing::info!(seed, balls = cfg.num_balls, "config loaded");
    Ok(cfg)
}

fn cmd_still(args: StillArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let frame = galton::render_still(cfg)?.into_straight();

    galton::encode::ensure_parent_dir(&args.out)?;
    galton::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;

    let mut opts = galton::PlaybackOpts::for_config(&cfg);
    if let Some(fps) = args.fps {
        opts.fps = fps;
    }
    opts.hold_frames = args.hold.unwrap_or(opts.fps);

    let mut renderer = galton::CpuRenderer::with_surface(cfg.canvas, cfg.stroke)?;
    let mut animator = galton::PathAnimator::new(cfg, galton::VirtualScheduler::new(), ())?;
    let mut sink: Box<dyn galton::FrameSink> = match args.format {
        Format::Mp4 => Box::new(galton::FfmpegSink::new(galton::FfmpegSinkOpts {
            overwrite: !args.no_overwrite,
            ..galton::FfmpegSinkOpts::new(&args.out)
        })),
        Format::Png => Box::new(galton::PngSequenceSink::new(&args.out)),
    };

    let stats = galton::play_to_sink(&mut animator, &mut renderer, sink.as_mut(), &opts)?;
    tracing::info!(frames = stats.frames, ticks = stats.ticks, "animation exported");

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_paths(args: PathsArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let dump = galton::simulate_generation(cfg)?;

    match &args.out {
        Some(path) => {
            galton::encode::ensure_parent_dir(path)?;
            let f = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            serde_json::to_writer_pretty(std::io::BufWriter::new(f), &dump)
                .with_context(|| format!("write json '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &dump).context("write json to stdout")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
