use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "atelier", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the static site.
    Build(BuildArgs),
    /// Render the seating chart of one event record.
    Chart(ChartArgs),
    /// Print the hall's seat grid.
    Layout,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Site source directory.
    #[arg(long, default_value = "site")]
    source: PathBuf,

    /// Output directory. Removed and recreated on every build.
    #[arg(long, default_value = ".www")]
    out: PathBuf,

    /// Site configuration JSON (defaults to the built-in site).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// Event record (`*.txt`): what, where, when, then one reserved seat per line.
    #[arg(long)]
    record: PathBuf,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write a PNG preview.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Scale of the PNG preview.
    #[arg(long, default_value_t = 1.0)]
    png_scale: f32,

    /// Print the diagram tree as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Chart(args) => cmd_chart(args),
        Command::Layout => cmd_layout(),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => atelier::SiteConfig::from_json_file(path)?,
        None => atelier::SiteConfig::default(),
    };
    let report = atelier::build_site(&args.source, &args.out, &config)?;
    eprintln!(
        "wrote {} ({} pages, {} charts, {} images)",
        args.out.display(),
        report.pages,
        report.charts,
        report.images
    );
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> anyhow::Result<()> {
    let record = atelier::EventRecord::from_file(&args.record)?;
    let layout = atelier::SeatLayout::venue()?;
    for id in record.reserved.unmatched(&layout) {
        tracing::warn!(id, "reserved id matches no seat");
    }

    let diagram = atelier::render_chart(&layout, &record.reserved);
    let svg = atelier::to_svg(&diagram);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &svg)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());

    if let Some(png) = &args.png {
        atelier::write_png(&svg, png, args.png_scale)?;
        eprintln!("wrote {}", png.display());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&diagram).context("serialize diagram")?;
        println!("{json}");
    }
    Ok(())
}

fn cmd_layout() -> anyhow::Result<()> {
    let layout = atelier::SeatLayout::venue()?;
    print!("{layout}");
    Ok(())
}
