use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vatbake", version)]
struct Cli {
    /// Log pipeline progress to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake a clip from a scene JSON into a PNG vertex animation texture.
    Bake(BakeArgs),
    /// Print the texture size a bake would produce.
    Plan(PlanArgs),
    /// List the clips in a scene JSON.
    Clips(ClipsArgs),
}

#[derive(Parser, Debug)]
struct SizeArgs {
    /// Samples per second of clip time.
    #[arg(long, default_value_t = vatbake::DEFAULT_SAMPLING_RATE)]
    rate: f64,

    /// Keep exact dimensions instead of rounding up to powers of two.
    #[arg(long)]
    no_pow2: bool,

    /// Largest accepted texture edge.
    #[arg(long, default_value_t = vatbake::DEFAULT_MAX_TEXTURE_SIZE)]
    max_size: u32,
}

impl SizeArgs {
    fn settings(&self) -> vatbake::BakeSettings {
        vatbake::BakeSettings {
            sampling_rate: self.rate,
            power_of_two: !self.no_pow2,
            max_texture_size: self.max_size,
        }
    }
}

#[derive(Parser, Debug)]
struct BakeArgs {
    /// Input scene JSON.
    #[arg(long)]
    scene: PathBuf,

    /// Clip to bake.
    #[arg(long)]
    clip: String,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Texture name (defaults to `VATTexture_<clip>`).
    #[arg(long)]
    name: Option<String>,

    /// Row holding vertex 0.
    #[arg(long, value_enum, default_value_t = OriginChoice::Top)]
    origin: OriginChoice,

    /// Skip writing the JSON manifest next to the PNG.
    #[arg(long)]
    no_manifest: bool,

    /// Replace an existing texture instead of failing.
    #[arg(long)]
    overwrite: bool,

    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Vertex count of the mesh.
    #[arg(long)]
    vertices: usize,

    /// Clip duration in seconds.
    #[arg(long)]
    duration: f64,

    #[command(flatten)]
    size: SizeArgs,
}

#[derive(Parser, Debug)]
struct ClipsArgs {
    /// Input scene JSON.
    #[arg(long)]
    scene: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OriginChoice {
    Top,
    Bottom,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Bake(args) => cmd_bake(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Clips(args) => cmd_clips(args),
    }
}

fn load_scene(path: &std::path::Path) -> anyhow::Result<vatbake::SceneFile> {
    let scene = vatbake::SceneFile::from_path(path)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    scene
        .validate()
        .with_context(|| format!("validate scene '{}'", path.display()))?;
    Ok(scene)
}

fn cmd_bake(args: BakeArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    let clip = scene.clip(&args.clip)?;
    let mut rig = scene.rig()?;
    let mut mesh = scene.mesh.clone();

    let mut opts = vatbake::PngSinkOpts::new(&args.out);
    opts.overwrite = args.overwrite;
    opts.write_manifest = !args.no_manifest;
    opts.row_origin = match args.origin {
        OriginChoice::Top => vatbake::RowOrigin::Top,
        OriginChoice::Bottom => vatbake::RowOrigin::Bottom,
    };
    let mut sink = vatbake::PngSink::new(opts);

    let result = vatbake::bake(
        &args.size.settings(),
        clip,
        &mut rig,
        &mut mesh,
        &mut sink,
        args.name.as_deref(),
    )
    .with_context(|| format!("bake clip '{}'", args.clip))?;

    eprintln!("wrote {}", result.asset);
    eprintln!(
        "  size:     {}x{} ({} vertices)",
        result.dims.width, result.dims.height, result.vertex_count
    );
    eprintln!("  duration: {}s", result.duration_secs);
    eprintln!("  bounds:   [{}, {}]", result.bounds.min, result.bounds.max);
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.duration.is_finite() && args.duration > 0.0,
        "duration must be a positive number of seconds, got {}",
        args.duration
    );
    let settings = args.size.settings();
    settings.validate()?;
    let dims = vatbake::plan_dimensions(
        args.vertices,
        args.duration,
        settings.sampling_rate,
        settings.power_of_two,
        settings.max_texture_size,
    )?;
    println!("{}x{}", dims.width, dims.height);
    Ok(())
}

fn cmd_clips(args: ClipsArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.scene)?;
    for clip in &scene.clips {
        println!(
            "{}\t{}s\t{} channels",
            clip.name,
            clip.duration,
            clip.channels.len()
        );
    }
    Ok(())
}
