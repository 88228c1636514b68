use std::time::{Duration, Instant};

use anyhow::Context as _;
use pixcomp::{
    Canvas, Compositor, CompositorSettings, Offset, PixelCanvas, Region, RotateDir, pixel,
};
use sha2::Digest as _;

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    fg_width: u32,
    fg_height: u32,
    warmup: u32,
    repeats: u32,
    parallel: bool,
    threads: Option<usize>,
    min_parallel_pixels: usize,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    compose: Duration,
    fast_compose: Duration,
    replace: Duration,
    draw_rect: Duration,
    rotate: Duration,
    wall_total: Duration,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    if args.width == 0 || args.height == 0 || args.fg_width == 0 || args.fg_height == 0 {
        anyhow::bail!("--width/--height/--fg-width/--fg-height must be > 0");
    }
    if args.fg_width > args.width || args.fg_height > args.height {
        anyhow::bail!("foreground must fit inside the background");
    }
    if let Some(n) = args.threads
        && n == 0
    {
        anyhow::bail!("--threads must be >= 1 when set");
    }

    let compositor = Compositor::new(CompositorSettings {
        parallel: args.parallel,
        threads: args.threads,
        min_parallel_pixels: args.min_parallel_pixels,
    })
    .context("build compositor")?;

    let bg = pattern(args.width, args.height, 0x5eed)?;
    let fg = pattern(args.fg_width, args.fg_height, 0xf00d)?;
    let offset = Offset::new(
        i64::from((args.width - args.fg_width) / 2),
        i64::from((args.height - args.fg_height) / 2),
    );

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for _ in 0..args.warmup {
            let _ = run_once(&compositor, &bg, &fg, offset)?;
        }
    }

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), bg={w}x{h}, fg={fw}x{fh}, mode={mode}, threads={threads}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        w = args.width,
        h = args.height,
        fw = args.fg_width,
        fh = args.fg_height,
        mode = if args.parallel {
            "parallel"
        } else {
            "sequential"
        },
        threads = args
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string()),
    );

    let mut runs = Vec::<RunMetrics>::with_capacity(args.repeats as usize);
    let mut digest = String::new();
    for _ in 0..args.repeats {
        let (metrics, out) = run_once(&compositor, &bg, &fg, offset)?;
        runs.push(metrics);
        digest = sha256_hex(out.pixels());
    }

    report_percentiles(&runs);
    // Identical across sequential and parallel runs of the same arguments.
    eprintln!("output sha256: {digest}");
    Ok(())
}

fn run_once(
    compositor: &Compositor,
    bg: &Canvas,
    fg: &Canvas,
    offset: Offset,
) -> anyhow::Result<(RunMetrics, Canvas)> {
    let wall = Instant::now();
    let mut m = RunMetrics::default();
    let mut out = bg.clone();

    let t = Instant::now();
    compositor.compose_onto(&mut out.view_mut()?, fg.view()?, offset)?;
    m.compose = t.elapsed();

    let t = Instant::now();
    compositor.fast_compose_onto(&mut out.view_mut()?, fg.view()?, offset)?;
    m.fast_compose = t.elapsed();

    let t = Instant::now();
    compositor.replace_onto(&mut out.view_mut()?, fg.view()?, offset)?;
    m.replace = t.elapsed();

    let t = Instant::now();
    let region = Region::new(0, 0, out.width() - 1, out.height() - 1)?;
    out.draw_rect(region, pixel::rgb(255, 0, 0), pixel::rgb(0, 0, 64))?;
    m.draw_rect = t.elapsed();

    let t = Instant::now();
    out.rotate(RotateDir::Left)?;
    out.rotate(RotateDir::Right)?;
    m.rotate = t.elapsed();

    m.wall_total = wall.elapsed();
    Ok((m, out))
}

fn pattern(w: u32, h: u32, seed: u32) -> anyhow::Result<Canvas> {
    let px = (0..w * h)
        .map(|i| {
            let v = (i ^ seed).wrapping_mul(0x9e37_79b9);
            // Mix of sentinel, opaque and translucent pixels.
            match i % 5 {
                0 => 0,
                1 | 2 => v | 0xff,
                _ => v,
            }
        })
        .collect();
    Ok(Canvas::from_pixels(w, h, px)?)
}

fn sha256_hex(pixels: &[pixcomp::Pixel]) -> String {
    let mut hasher = sha2::Sha256::new();
    for &p in pixels {
        hasher.update(p.to_be_bytes());
    }
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        width: 1920,
        height: 1080,
        fg_width: 1280,
        fg_height: 720,
        warmup: 1,
        repeats: 50,
        parallel: false,
        threads: None,
        min_parallel_pixels: CompositorSettings::default().min_parallel_pixels,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--fg-width" => out.fg_width = parse_u32(args.next(), "--fg-width")?,
            "--fg-height" => out.fg_height = parse_u32(args.next(), "--fg-height")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--parallel" => out.parallel = true,
            "--threads" => out.threads = Some(parse_usize(args.next(), "--threads")?),
            "--min-parallel-pixels" => {
                out.min_parallel_pixels = parse_usize(args.next(), "--min-parallel-pixels")?
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"pixcomp-bench

Runs every compositor operation repeatedly and reports p50/p90/p99 per operation.

Usage:
  cargo run -q -p pixcomp-bench --release
  cargo run -q -p pixcomp-bench --release -- --parallel --threads 4

Args:
  --width N                (default 1920)
  --height N               (default 1080)
  --fg-width N             (default 1280)
  --fg-height N            (default 720)
  --warmup N               (default 1)
  --repeats N              (default 50)
  --parallel               split placements across rows on a rayon pool
  --threads N              worker threads for parallel mode (default auto)
  --min-parallel-pixels N  foreground size below which placements stay sequential
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn report_percentiles(runs: &[RunMetrics]) {
    type Getter = fn(&RunMetrics) -> Duration;
    type Field = (&'static str, Getter);

    fn collect(runs: &[RunMetrics], f: fn(&RunMetrics) -> Duration) -> Vec<Duration> {
        let mut v = runs.iter().map(f).collect::<Vec<_>>();
        v.sort_by_key(|d| d.as_nanos());
        v
    }

    fn p(v: &[Duration], p: f64) -> Duration {
        if v.is_empty() {
            return Duration::ZERO;
        }
        let n = v.len();
        let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
        v[rank - 1]
    }

    fn fmt_ms(d: Duration) -> String {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }

    let fields: &[Field] = &[
        ("compose", |m| m.compose),
        ("fast_compose", |m| m.fast_compose),
        ("replace", |m| m.replace),
        ("draw_rect", |m| m.draw_rect),
        ("rotate_lr", |m| m.rotate),
        ("wall_total", |m| m.wall_total),
    ];

    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let v = collect(runs, *getter);
        eprintln!(
            "  {name:14} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            name = *name,
            p50 = fmt_ms(p(&v, 0.50)),
            p90 = fmt_ms(p(&v, 0.90)),
            p99 = fmt_ms(p(&v, 0.99))
        );
    }
}
