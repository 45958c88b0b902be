use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nup",
    about = "Tile PDF pages N-up for duplex cut-stack printing",
    version
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Pages per sheet side (N in N-up)
    #[arg(short = 'n', long, default_value = "2")]
    pages_per_side: usize,

    /// Output paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Output orientation
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Skip the dashed cut guide lines
    #[arg(long)]
    no_cut_guides: bool,

    /// Skip the page-number stamps
    #[arg(long)]
    no_page_labels: bool,

    /// Show statistics only, don't generate PDF
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<PaperArg> for nup_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for nup_impose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = nup_impose::ImposeOptions {
        pages_per_side: cli.pages_per_side,
        paper_size: cli.paper.into(),
        orientation: cli.orientation.into(),
        cut_guides: !cli.no_cut_guides,
        page_labels: !cli.no_page_labels,
    };

    let document = nup_impose::load_pdf(&cli.input).await?;

    let stats = nup_impose::calculate_statistics(&document, &options)?;
    println!("Imposition Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!(
        "  Grid: {} columns x {} rows ({}-up)",
        stats.grid_cols, stats.grid_rows, stats.pages_per_side
    );
    println!("  Output sheets: {}", stats.output_sheets);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Empty cells: {}", stats.empty_cells);

    if cli.stats_only {
        return Ok(());
    }

    let imposed = nup_impose::impose(&document, &options).await?;
    nup_impose::save_pdf(imposed, &cli.output).await?;
    println!("Imposed → {}", cli.output.display());

    Ok(())
}
