mod logger;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use print_layout::layout::LargeItemPolicy;
use print_layout::{
    CanvasPreset, DuplexOrder, JobOptions, JobPlan, Orientation, PaperSize, Product, Quantity,
    SheetMode, plan_job,
};
use std::path::PathBuf;

use logger::StderrLogger;

#[derive(Parser)]
#[command(name = "prt", about = "Print shop layout tools", version)]
struct Cli {
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tile 90x50mm business cards onto A4/A3 sheets
    Cards {
        #[command(flatten)]
        job: JobArgs,

        /// Number of full sheets to print
        #[arg(long)]
        sheets: Option<usize>,

        /// Sheet size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Bleed added on every side of a card in mm
        #[arg(long)]
        bleed: Option<f32>,
    },

    /// Tile an arbitrary item size, picking the sheet automatically
    Layout {
        #[command(flatten)]
        job: JobArgs,

        /// Item width in mm
        #[arg(long)]
        width: Option<f32>,

        /// Item height in mm
        #[arg(long)]
        height: Option<f32>,

        /// Number of items
        #[arg(short = 'n', long)]
        quantity: Option<usize>,

        /// Sheet size
        #[arg(long, value_enum)]
        paper: Option<PaperArg>,

        /// Sheet orientation for a fixed paper size
        #[arg(long, value_enum, requires = "paper")]
        orientation: Option<OrientationArg>,

        /// Gap between items in mm
        #[arg(long)]
        spacing: Option<f32>,

        /// Bleed added on every side of an item in mm
        #[arg(long)]
        bleed: Option<f32>,

        /// Minimum sheet utilization for automatic sheet choice (0-1)
        #[arg(long)]
        threshold: Option<f32>,

        /// Relax the threshold for items with a side over 500mm
        #[arg(long)]
        large_items: bool,
    },

    /// Lay out stretched canvas prints, one per sheet
    Canvas {
        #[command(flatten)]
        job: JobArgs,

        /// Standard canvas size
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// Canvas face width in mm
        #[arg(long)]
        width: Option<f32>,

        /// Canvas face height in mm
        #[arg(long)]
        height: Option<f32>,

        /// Stretcher frame depth in mm
        #[arg(long)]
        thickness: Option<f32>,

        /// Extra fold allowance in mm
        #[arg(long)]
        extra: Option<f32>,

        /// Keep the canvas as given instead of matching the first image
        #[arg(long)]
        no_auto_rotate: bool,
    },
}

/// Options shared by every job
#[derive(Args)]
struct JobArgs {
    /// Front artwork, cycled across items
    #[arg(short, long, num_args = 1..)]
    front: Vec<PathBuf>,

    /// Back artwork; enables double-sided output
    #[arg(short, long, num_args = 1..)]
    back: Vec<PathBuf>,

    /// Output PDF file (defaults to a name derived from the layout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Page order for double-sided output
    #[arg(long, value_enum)]
    duplex_order: Option<DuplexArg>,

    /// Load job options from a JSON file; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the final job options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Show the layout only, don't generate PDF
    #[arg(long)]
    stats_only: bool,

    /// Print the layout summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Auto,
    A4,
    A3,
    A2,
    A1,
    A0,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum DuplexArg {
    Appended,
    Interleaved,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Gallery,
    Square,
}

impl PaperArg {
    fn paper(self) -> Option<PaperSize> {
        match self {
            PaperArg::Auto => None,
            PaperArg::A4 => Some(PaperSize::A4),
            PaperArg::A3 => Some(PaperSize::A3),
            PaperArg::A2 => Some(PaperSize::A2),
            PaperArg::A1 => Some(PaperSize::A1),
            PaperArg::A0 => Some(PaperSize::A0),
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<DuplexArg> for DuplexOrder {
    fn from(arg: DuplexArg) -> Self {
        match arg {
            DuplexArg::Appended => Self::Appended,
            DuplexArg::Interleaved => Self::Interleaved,
        }
    }
}

impl From<PresetArg> for CanvasPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Small => Self::Small,
            PresetArg::Medium => Self::Medium,
            PresetArg::Large => Self::Large,
            PresetArg::ExtraLarge => Self::ExtraLarge,
            PresetArg::Gallery => Self::Gallery,
            PresetArg::Square => Self::Square,
        }
    }
}

impl Commands {
    fn product(&self) -> Product {
        match self {
            Commands::Cards { .. } => Product::BusinessCard,
            Commands::Layout { .. } => Product::CustomLayout,
            Commands::Canvas { .. } => Product::CanvasWrap,
        }
    }

    fn job(&self) -> &JobArgs {
        match self {
            Commands::Cards { job, .. }
            | Commands::Layout { job, .. }
            | Commands::Canvas { job, .. } => job,
        }
    }

    /// Apply command-line flags on top of base options
    fn apply(&self, options: &mut JobOptions) {
        let job = self.job();
        if !job.front.is_empty() {
            options.front_images = job.front.clone();
        }
        if !job.back.is_empty() {
            options.back_images = job.back.clone();
            options.double_sided = true;
        }
        if let Some(order) = job.duplex_order {
            options.duplex_order = order.into();
        }

        match self {
            Commands::Cards {
                sheets,
                paper,
                bleed,
                ..
            } => {
                if let Some(sheets) = *sheets {
                    options.quantity = Quantity::Sheets(sheets);
                }
                if let Some(paper) = *paper {
                    options.sheet_mode = sheet_mode(paper, None);
                }
                if let Some(bleed) = *bleed {
                    options.bleed_mm = bleed;
                }
            }
            Commands::Layout {
                width,
                height,
                quantity,
                paper,
                orientation,
                spacing,
                bleed,
                threshold,
                large_items,
                ..
            } => {
                if let Some(width) = *width {
                    options.item_width_mm = width;
                }
                if let Some(height) = *height {
                    options.item_height_mm = height;
                }
                if let Some(quantity) = *quantity {
                    options.quantity = Quantity::Items(quantity);
                }
                if let Some(paper) = *paper {
                    options.sheet_mode = sheet_mode(paper, *orientation);
                }
                if let Some(spacing) = *spacing {
                    options.spacing_mm = spacing;
                }
                if let Some(bleed) = *bleed {
                    options.bleed_mm = bleed;
                }
                if let Some(threshold) = *threshold {
                    options.selection.efficiency_threshold = threshold;
                }
                if *large_items {
                    options.selection.large_item = Some(LargeItemPolicy::default());
                }
            }
            Commands::Canvas {
                preset,
                width,
                height,
                thickness,
                extra,
                no_auto_rotate,
                ..
            } => {
                if let Some(preset) = *preset {
                    let (w, h) = CanvasPreset::from(preset).dimensions_mm();
                    options.item_width_mm = w;
                    options.item_height_mm = h;
                }
                if let Some(width) = *width {
                    options.item_width_mm = width;
                }
                if let Some(height) = *height {
                    options.item_height_mm = height;
                }
                if let Some(thickness) = *thickness {
                    options.canvas.thickness_mm = thickness;
                }
                if let Some(extra) = *extra {
                    options.canvas.extra_mm = extra;
                }
                if *no_auto_rotate {
                    options.canvas.auto_rotate = false;
                }
            }
        }
    }
}

fn sheet_mode(paper: PaperArg, orientation: Option<OrientationArg>) -> SheetMode {
    match paper.paper() {
        Some(paper) => SheetMode::Manual {
            paper,
            orientation: orientation.map(Into::into).unwrap_or_default(),
        },
        None => SheetMode::Auto,
    }
}

fn print_summary(plan: &JobPlan, json: bool) -> Result<()> {
    let summary = plan.summary();
    if json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!("Layout:");
    println!("  Sheet: {} ({:?})", summary.sheet, summary.orientation);
    if summary.oversized {
        println!("  Grid: oversized, 1 item per sheet");
    } else {
        println!(
            "  Grid: {} ({} per sheet)",
            summary.grid, summary.items_per_sheet
        );
    }
    println!("  Items: {}", summary.quantity);
    println!("  Sheets: {}", summary.total_sheets);
    println!("  Output pages: {}", plan.page_count());
    println!("  Efficiency: {:.1}%", summary.efficiency_percent);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    StderrLogger::new(StderrLogger::level_for(cli.verbose, cli.quiet)).init()?;

    let product = cli.command.product();
    let job = cli.command.job();

    let mut options = match &job.config {
        Some(path) => {
            let options = JobOptions::load(path).await?;
            if options.product != product {
                bail!(
                    "{} describes a {:?} job, not {:?}",
                    path.display(),
                    options.product,
                    product
                );
            }
            options
        }
        None => JobOptions::for_product(product),
    };
    cli.command.apply(&mut options);

    if let Some(path) = &job.save_config {
        options.save(path).await?;
        log::info!("Saved job options to {}", path.display());
    }

    if job.stats_only {
        let plan = plan_job(&options)?;
        print_summary(&plan, job.json)?;
        return Ok(());
    }

    let composed = print_compose::compose(&options).await?;
    if composed.plan.layout.oversized {
        log::warn!(
            "Item does not fit on {}; printing one per sheet, scaled to fit",
            composed.plan.layout.sheet
        );
    }
    print_summary(&composed.plan, job.json)?;

    let output = job
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(composed.plan.filename()));
    print_compose::save_pdf(composed.document, &output).await?;
    println!("Generated {} pages → {}", composed.plan.page_count(), output.display());

    Ok(())
}
