use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gridfeed", version)]
struct Cli {
    /// Log layout decisions to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a JSON array of posts and write the placements as JSON.
    Layout(LayoutArgs),
    /// Print the effective shape table as JSON.
    Shapes(ShapesArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input posts JSON (array of post objects).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Optional grid config JSON; missing fields use the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the grid column count.
    #[arg(long)]
    columns: Option<usize>,

    /// Maximum resident posts; older posts are dropped before layout.
    #[arg(long, default_value_t = gridfeed::MAX_RESIDENT_POSTS)]
    window: usize,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Include container/load-more/skeleton anchors in the output.
    #[arg(long)]
    anchors: bool,
}

#[derive(Parser, Debug)]
struct ShapesArgs {
    /// Optional grid config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct LayoutOutput<'a> {
    #[serde(flatten)]
    layout: &'a gridfeed::LayoutResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    anchors: Option<gridfeed::FeedAnchors>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Shapes(args) => cmd_shapes(args),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "gridfeed=debug",
        _ => "gridfeed=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<gridfeed::GridConfig> {
    let Some(path) = path else {
        return Ok(gridfeed::GridConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    gridfeed::GridConfig::from_json_str(&json)
        .with_context(|| format!("load config '{}'", path.display()))
}

fn read_posts_json(path: &Path) -> anyhow::Result<Vec<gridfeed::Post>> {
    let f = File::open(path).with_context(|| format!("open posts '{}'", path.display()))?;
    let r = BufReader::new(f);
    let posts: Vec<gridfeed::Post> =
        serde_json::from_reader(r).with_context(|| "parse posts JSON")?;
    Ok(posts)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_deref())?;
    if let Some(columns) = args.columns {
        config = config.with_columns(columns);
    }
    let engine = gridfeed::LayoutEngine::new(config)?;

    let posts = read_posts_json(&args.in_path)?;
    let window = gridfeed::FeedWindow::with_posts(args.window, posts)?;

    let layout = engine.layout(window.posts());
    if !layout.is_clean() {
        eprintln!(
            "warning: {} of {} posts used degraded placement",
            layout.degraded_count(),
            layout.len()
        );
    }

    let output = LayoutOutput {
        layout: &layout,
        anchors: args
            .anchors
            .then(|| gridfeed::FeedAnchors::from_layout(&layout, engine.config())),
    };
    write_json(args.out.as_deref(), &output)?;

    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_shapes(args: ShapesArgs) -> anyhow::Result<()> {
    let config = read_config(args.config.as_deref())?;
    write_json(None, &config.shapes)
}

fn write_json(out: Option<&Path>, value: &impl serde::Serialize) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            serde_json::to_writer_pretty(f, value)
                .with_context(|| format!("write output '{}'", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value).with_context(|| "write stdout")?;
            writeln!(stdout).with_context(|| "write stdout")?;
        }
    }
    Ok(())
}
