use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use shimmer::{Background, BatchConfig, Canvas, FrameIndex, GenerateConfig, Generator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shimmer", version, about = "Looping triangle-grid shimmer GIFs")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one looping GIF.
    Render(RenderArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render one GIF per tile size listed in a batch config.
    Batch(BatchArgs),
    /// Fill the viewer page template from the batch config.
    Page(PageArgs),
}

/// Loop and look options shared by every generating command.
#[derive(Args, Debug)]
struct LoopArgs {
    /// Base generation config JSON; flags below override it.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Frames in one loop.
    #[arg(long)]
    frames: Option<u32>,

    /// Milliseconds per frame.
    #[arg(long)]
    duration: Option<u32>,

    /// Fixed seed for reproducible phase offsets.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum)]
    background: Option<Background>,

    /// Number of gray stops.
    #[arg(long)]
    stops: Option<usize>,

    #[arg(long)]
    min_brightness: Option<f64>,

    #[arg(long)]
    max_brightness: Option<f64>,

    /// Render frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Square canvas edge; shorthand for --width and --height.
    #[arg(long, conflicts_with_all = ["width", "height"])]
    size: Option<u32>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Tile size in pixels.
    #[arg(long)]
    tile: Option<u32>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    grid: GridArgs,

    #[command(flatten)]
    looping: LoopArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    index: u64,

    #[command(flatten)]
    grid: GridArgs,

    #[command(flatten)]
    looping: LoopArgs,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Batch config JSON (`i_size`, `t_sizes`, `prefix`).
    #[arg(long = "batch", default_value = "config.json")]
    batch: PathBuf,

    /// Directory the GIFs are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    #[command(flatten)]
    looping: LoopArgs,
}

#[derive(Args, Debug)]
struct PageArgs {
    #[arg(long = "config", default_value = "config.json")]
    config: PathBuf,

    #[arg(long, default_value = "test.html.template")]
    template: PathBuf,

    #[arg(long, default_value = "test.html")]
    out: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    initialise_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Page(args) => Ok(cmd_page(args)),
    }
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let mut cfg = base_config(&args.looping)?;
    apply_grid(&mut cfg, &args.grid)?;
    cfg.out_path = args.out;

    let stats = shimmer::generate(&cfg)
        .with_context(|| format!("generate '{}'", cfg.out_path.display()))?;
    eprintln!(
        "wrote {} ({} frames, {}x{} grid)",
        cfg.out_path.display(),
        stats.frames,
        stats.columns,
        stats.rows
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<ExitCode> {
    let mut cfg = base_config(&args.looping)?;
    apply_grid(&mut cfg, &args.grid)?;

    let generator = Generator::new(&cfg)?;
    let frame = generator.render_frame(FrameIndex(args.index));
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<ExitCode> {
    let batch = BatchConfig::from_path(&args.batch)?;
    let base = base_config(&args.looping)?;
    let written = shimmer::generate_batch(&batch, &args.out_dir, &base)?;
    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_page(args: PageArgs) -> ExitCode {
    match shimmer::page::render_page(&args.config, &args.template, &args.out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn base_config(args: &LoopArgs) -> anyhow::Result<GenerateConfig> {
    let mut cfg = match &args.config {
        Some(path) => GenerateConfig::from_path(path)?,
        None => GenerateConfig::default(),
    };
    if let Some(v) = args.frames {
        cfg.frames_count = v;
    }
    if let Some(v) = args.duration {
        cfg.duration_ms = v;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(v) = args.background {
        cfg.background = v;
    }
    if let Some(v) = args.stops {
        cfg.gradient.stop_count = v;
    }
    if let Some(v) = args.min_brightness {
        cfg.gradient.min_brightness = v;
    }
    if let Some(v) = args.max_brightness {
        cfg.gradient.max_brightness = v;
    }
    cfg.threading.parallel |= args.parallel;
    if args.threads.is_some() {
        cfg.threading.threads = args.threads;
    }
    Ok(cfg)
}

fn apply_grid(cfg: &mut GenerateConfig, args: &GridArgs) -> anyhow::Result<()> {
    let (width, height) = match args.size {
        Some(s) => (s, s),
        None => (
            args.width.unwrap_or(cfg.canvas.width),
            args.height.unwrap_or(cfg.canvas.height),
        ),
    };
    cfg.canvas = Canvas::new(width, height)?;
    if let Some(t) = args.tile {
        cfg.tile_size = t;
    }
    Ok(())
}
