use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pixcomp::{
    Canvas, Compositor, CompositorSettings, Offset, PixelCanvas, Region, RotateDir, TRANSPARENT,
    pixel,
};

#[derive(Parser, Debug)]
#[command(name = "pixcomp", version)]
struct Cli {
    /// JSON compositor settings (parallelism, thread count).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log verbosity: -v for info, -vv for debug.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a foreground PNG on a background PNG.
    Compose(ComposeArgs),
    /// Fill and/or stroke a rectangle.
    Rect(RectArgs),
    /// Rotate by a quarter turn.
    Rotate(RotateArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Alpha blend.
    Blend,
    /// Copy pixels, skipping fully transparent black.
    Fast,
    /// Copy pixels unconditionally.
    Replace,
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Background PNG.
    #[arg(long)]
    bg: PathBuf,

    /// Foreground PNG.
    #[arg(long)]
    fg: PathBuf,

    /// Horizontal offset of the foreground.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dx: i64,

    /// Vertical offset of the foreground.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dy: i64,

    /// Placement mode.
    #[arg(long, value_enum, default_value_t = Mode::Blend)]
    mode: Mode,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RectArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    x0: u32,
    #[arg(long)]
    y0: u32,
    #[arg(long)]
    x1: u32,
    #[arg(long)]
    y1: u32,

    /// Border color, `RRGGBB` or `RRGGBBAA`.
    #[arg(long)]
    stroke: Option<String>,

    /// Fill color, `RRGGBB` or `RRGGBBAA`.
    #[arg(long)]
    fill: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RotateArgs {
    /// Input PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// `left` (counter-clockwise) or `right` (clockwise).
    #[arg(long)]
    dir: RotateDir,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match &cli.settings {
        Some(path) => CompositorSettings::from_path(path)?,
        None => CompositorSettings::default(),
    };
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args, settings),
        Command::Rect(args) => cmd_rect(args),
        Command::Rotate(args) => cmd_rotate(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_compose(args: ComposeArgs, settings: CompositorSettings) -> anyhow::Result<()> {
    let compositor = Compositor::new(settings)?;
    let mut bg = load_png(&args.bg)?;
    let fg = load_png(&args.fg)?;
    let offset = Offset::new(args.dx, args.dy);

    let mut bg_view = bg.view_mut()?;
    let fg_view = fg.view()?;
    match args.mode {
        Mode::Blend => compositor.compose_onto(&mut bg_view, fg_view, offset)?,
        Mode::Fast => compositor.fast_compose_onto(&mut bg_view, fg_view, offset)?,
        Mode::Replace => compositor.replace_onto(&mut bg_view, fg_view, offset)?,
    }
    tracing::info!(mode = ?args.mode, ?offset, "composed");

    save_png(&bg, &args.out)
}

fn cmd_rect(args: RectArgs) -> anyhow::Result<()> {
    let mut canvas = load_png(&args.in_path)?;
    let region = Region::new(args.x0, args.y0, args.x1, args.y1)?;
    let stroke = parse_color(args.stroke.as_deref())?;
    let fill = parse_color(args.fill.as_deref())?;

    canvas.draw_rect(region, stroke, fill)?;
    tracing::info!(
        ?region,
        width = region.width(),
        height = region.height(),
        stroke,
        fill,
        "drew rectangle"
    );

    save_png(&canvas, &args.out)
}

fn cmd_rotate(args: RotateArgs) -> anyhow::Result<()> {
    let mut canvas = load_png(&args.in_path)?;
    canvas.rotate(args.dir)?;
    tracing::info!(dir = ?args.dir, width = canvas.width(), height = canvas.height(), "rotated");

    save_png(&canvas, &args.out)
}

fn parse_color(s: Option<&str>) -> anyhow::Result<pixcomp::Pixel> {
    match s {
        Some(s) => Ok(pixel::parse_hex(s)?),
        None => Ok(TRANSPARENT),
    }
}

fn load_png(path: &Path) -> anyhow::Result<Canvas> {
    let img = image::open(path)
        .with_context(|| format!("read image '{}'", path.display()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    let pixels = img
        .as_raw()
        .chunks_exact(4)
        .map(|c| pixel::from_rgba8([c[0], c[1], c[2], c[3]]))
        .collect();
    Ok(Canvas::from_pixels(w, h, pixels)?)
}

fn save_png(canvas: &Canvas, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let bytes: Vec<u8> = canvas
        .pixels()
        .iter()
        .flat_map(|&p| pixel::to_rgba8(p))
        .collect();
    image::save_buffer_with_format(
        path,
        &bytes,
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    eprintln!("wrote {}", path.display());
    Ok(())
}
