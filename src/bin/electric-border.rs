use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "electric-border", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump one frame's path points as JSON.
    Path(PathArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render the animation as a numbered PNG sequence.
    Render(RenderArgs),
    /// Print the SHA-256 of one rendered frame's pixels.
    Digest(DigestArgs),
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Style JSON (`{"borderRadius": 12, "color": "#7df9ff", ...}`).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Corner radius override.
    #[arg(long)]
    radius: Option<f64>,

    /// Glow color override (hex).
    #[arg(long)]
    color: Option<String>,

    /// Animation speed override.
    #[arg(long)]
    speed: Option<f64>,

    /// Noise amplitude override.
    #[arg(long)]
    chaos: Option<f64>,

    /// Core stroke width override.
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Content width.
    #[arg(long, default_value_t = 320.0)]
    width: f64,

    /// Content height.
    #[arg(long, default_value_t = 180.0)]
    height: f64,
}

#[derive(Args, Debug)]
struct PathArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Animation time in seconds (already scaled by speed).
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Animation time in seconds (already scaled by speed).
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background color (hex); transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Duration in wall-clock seconds.
    #[arg(long, default_value_t = 4.0)]
    seconds: f64,

    /// Output directory; frames are written as `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Background color (hex); transparent when omitted.
    #[arg(long)]
    background: Option<String>,

    /// Rasterize frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct DigestArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Animation time in seconds (already scaled by speed).
    #[arg(long, default_value_t = 0.0)]
    time: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Digest(args) => cmd_digest(args),
    }
}

fn load_style(args: &StyleArgs) -> anyhow::Result<electric_border::BorderStyle> {
    let mut style = match &args.config {
        Some(path) => read_style_json(path)?,
        None => electric_border::BorderStyle::default(),
    };
    if let Some(v) = args.radius {
        style.border_radius = v;
    }
    if let Some(c) = &args.color {
        style.color = electric_border::Rgba8::from_hex(c)?;
    }
    if let Some(v) = args.speed {
        style.speed = v;
    }
    if let Some(v) = args.chaos {
        style.chaos = v;
    }
    if let Some(v) = args.stroke_width {
        style.stroke_width = v;
    }
    Ok(style.sanitized())
}

fn read_style_json(path: &Path) -> anyhow::Result<electric_border::BorderStyle> {
    let f = File::open(path).with_context(|| format!("open style '{}'", path.display()))?;
    let style = electric_border::BorderStyle::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse style '{}'", path.display()))?;
    Ok(style)
}

fn make_border(args: &StyleArgs) -> anyhow::Result<electric_border::ElectricBorder> {
    let style = load_style(args)?;
    let mut border = electric_border::ElectricBorder::new(style);
    border.on_layout(args.width, args.height);
    Ok(border)
}

fn background_rgba(hex: Option<&str>) -> anyhow::Result<Option<[u8; 4]>> {
    let Some(hex) = hex else {
        return Ok(None);
    };
    let c = electric_border::Rgba8::from_hex(hex)?;
    Ok(Some([c.r, c.g, c.b, c.a]))
}

fn render_one(
    args: &StyleArgs,
    time: f64,
    background: Option<&str>,
) -> anyhow::Result<electric_border::FrameRGBA> {
    let mut border = make_border(args)?;
    let frame = border.frame_at(time);
    let settings = electric_border::RenderSettings {
        clear_rgba: background_rgba(background)?,
    };
    let mut renderer = electric_border::CpuRenderer::new(settings);
    Ok(renderer.render(&frame)?)
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let mut border = make_border(&args.style)?;
    let frame = border.frame_at(args.time);
    let json = serde_json::to_string_pretty(&frame).context("serialize frame JSON")?;

    match &args.out {
        Some(out) => {
            ensure_parent_dir(out)?;
            std::fs::write(out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let frame = render_one(&args.style, args.time, args.background.as_deref())?;
    ensure_parent_dir(&args.out)?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let style = load_style(&args.style)?;
    let size = electric_border::RegionSize::new(args.style.width, args.style.height);
    let fps = electric_border::Fps::new(args.fps, 1)?;
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        anyhow::bail!("--seconds must be > 0");
    }
    let frame_count = (args.seconds * fps.as_f64()).round().max(1.0) as u64;

    let settings = electric_border::RenderSettings {
        clear_rgba: background_rgba(args.background.as_deref())?,
    };
    let threading = electric_border::RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
        static_frame_elision: true,
    };

    let (frames, stats) =
        electric_border::render_sequence(&style, size, fps, frame_count, &settings, &threading)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory '{}'", args.out_dir.display()))?;
    for (idx, frame) in frames.iter().enumerate() {
        write_png(&args.out_dir.join(format!("frame_{idx:05}.png")), frame)?;
    }

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} elided)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let frame = render_one(&args.style, args.time, None)?;
    println!("{}", sha256_hex(&frame.data));
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn write_png(path: &Path, frame: &electric_border::FrameRGBA) -> anyhow::Result<()> {
    let straight = if frame.premultiplied {
        unpremultiply(&frame.data)
    } else {
        frame.data.clone()
    };
    image::save_buffer_with_format(
        path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
