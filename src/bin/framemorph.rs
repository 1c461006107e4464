use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use framemorph::{
    ConstraintSpec, ControllerOpts, EndpointResolver, EndpointSource, FramePair, Script, Size,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "framemorph", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Constraint description JSON. Defaults to the built-in screen.
    #[arg(long, global = true)]
    spec: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the floating element's start and end frames for a container size.
    Resolve(SizeArgs),
    /// Print the interpolated floating frame at a given progress.
    Frame(FrameArgs),
    /// Replay an event script and print every step.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct SizeArgs {
    /// Container width.
    #[arg(long)]
    width: f64,

    /// Container height.
    #[arg(long)]
    height: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    size: SizeArgs,

    /// Progress in `[0, 1]`; values outside are clamped.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Controller options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let spec = match &cli.spec {
        Some(path) => read_spec(path)?,
        None => ConstraintSpec::default(),
    };

    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(spec, args),
        Command::Frame(args) => cmd_frame(spec, args),
        Command::Simulate(args) => cmd_simulate(spec, args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_spec(path: &Path) -> anyhow::Result<ConstraintSpec> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read constraint spec '{}'", path.display()))?;
    ConstraintSpec::from_json_str(&s)
        .with_context(|| format!("load constraint spec '{}'", path.display()))
}

fn resolve(spec: ConstraintSpec, size: &SizeArgs) -> anyhow::Result<FramePair> {
    let resolver = EndpointResolver::new(spec)?;
    Ok(resolver.resolve(Size::new(size.width, size.height))?)
}

fn cmd_resolve(spec: ConstraintSpec, args: SizeArgs) -> anyhow::Result<()> {
    let pair = resolve(spec, &args)?;
    println!("{}", serde_json::to_string_pretty(&pair)?);
    Ok(())
}

fn cmd_frame(spec: ConstraintSpec, args: FrameArgs) -> anyhow::Result<()> {
    let pair = resolve(spec, &args.size)?;
    let progress = framemorph::Progress::new(args.progress);
    let r = framemorph::lerp_rect(pair.start, pair.end, progress.get());
    let out = serde_json::json!({
        "progress": progress,
        "x": r.x0,
        "y": r.y0,
        "width": r.width(),
        "height": r.height(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_simulate(spec: ConstraintSpec, args: SimulateArgs) -> anyhow::Result<()> {
    let s = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script '{}'", args.script.display()))?;
    let script = Script::from_json_str(&s).with_context(|| "parse script JSON")?;

    let opts = match &args.opts {
        Some(path) => {
            let f =
                File::open(path).with_context(|| format!("open options '{}'", path.display()))?;
            serde_json::from_reader::<_, ControllerOpts>(BufReader::new(f))
                .with_context(|| "parse controller options JSON")?
        }
        None => ControllerOpts::default(),
    };

    let steps = framemorph::run_script(&script, spec, opts)?;
    println!("{}", serde_json::to_string_pretty(&steps)?);
    Ok(())
}
