use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use umbra::{Raster, Rgb, ShadowSpec, ShadowStrategy, plan, render_shadow};

#[derive(Parser, Debug)]
#[command(name = "umbra", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drop a shadow behind a PNG and write the composited PNG.
    Shadow(ShadowArgs),
    /// Print the planned shadow geometry for a source size as JSON.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct SpecArgs {
    /// Shadow spec as a JSON file; overrides all spec flags below.
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Shadow size (blur/halo radius) in pixels.
    #[arg(long, default_value_t = 8)]
    size: u32,

    /// Silhouette layers (layered strategy).
    #[arg(long, default_value_t = 4)]
    layers: u32,

    /// Shadow color as #rrggbb.
    #[arg(long, default_value = "#000000")]
    color: String,

    /// Paint opacity of the first layer.
    #[arg(long, default_value_t = 100)]
    alpha_initial: u8,

    /// Opacity increment per layer.
    #[arg(long, default_value_t = 10)]
    alpha_step: i16,

    /// Horizontal shadow offset in pixels.
    #[arg(long, default_value_t = 0)]
    offset_left: i32,

    /// Vertical shadow offset in pixels.
    #[arg(long, default_value_t = 0)]
    offset_top: i32,

    /// Extra halo expansion in pixels.
    #[arg(long, default_value_t = 0)]
    spread: u32,

    /// Keep the source size instead of growing the canvas.
    #[arg(long, default_value_t = false)]
    no_expand: bool,
}

impl SpecArgs {
    fn resolve(&self) -> anyhow::Result<ShadowSpec> {
        if let Some(path) = &self.spec {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read spec '{}'", path.display()))?;
            let spec: ShadowSpec = serde_json::from_str(&json)
                .with_context(|| format!("parse spec '{}'", path.display()))?;
            return Ok(spec);
        }
        let mut spec = ShadowSpec::new(self.size, self.layers, Rgb::from_hex(&self.color)?);
        spec.alpha_initial = self.alpha_initial;
        spec.alpha_step = self.alpha_step;
        spec.offset_left = self.offset_left;
        spec.offset_top = self.offset_top;
        spec.spread = self.spread;
        spec.expand = !self.no_expand;
        Ok(spec)
    }
}

#[derive(Parser, Debug)]
struct ShadowArgs {
    /// Input PNG (read as RGBA).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Shadow strategy: layered | box-blur. (gaussian needs a platform
    /// compute kernel and is unavailable from the CLI.)
    #[arg(long, default_value = "layered")]
    strategy: String,

    #[command(flatten)]
    spec: SpecArgs,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Source raster width in pixels.
    #[arg(long)]
    width: u32,

    /// Source raster height in pixels.
    #[arg(long)]
    height: u32,

    #[command(flatten)]
    spec: SpecArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Shadow(args) => cmd_shadow(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn cmd_shadow(args: ShadowArgs) -> anyhow::Result<()> {
    let img = image::open(&args.in_path)
        .with_context(|| format!("read png '{}'", args.in_path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    let source = Raster::from_rgba8(width, height, img.into_raw())?;

    let spec = args.spec.resolve()?;
    let strategy: ShadowStrategy = args.strategy.parse()?;
    let out = render_shadow(&source, &spec, strategy, None)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &out.data,
        out.width,
        out.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let spec = args.spec.resolve()?;
    let geometry = plan(args.width, args.height, &spec)?;
    println!("{}", serde_json::to_string_pretty(&geometry)?);
    Ok(())
}
