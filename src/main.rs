use course_heatmap::color::Palette;
use course_heatmap::{diagnostics, generate_report, ChartConfig, OutputFormat};

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "course-heatmap")]
#[command(about = "Course approval-rate heatmap generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a heatmap from a JSON dataset.
    Render {
        /// JSON array of {"Course", "approved_rate"} records.
        #[arg(long)]
        data: String,

        #[arg(short = 'o', long)]
        out: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// JSON chart config; missing fields use defaults.
        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        /// Legend gradient stop count.
        #[arg(long)]
        stops: Option<usize>,

        #[arg(long, value_enum)]
        palette: Option<Palette>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Render {
            data,
            out,
            format,
            config,
            width,
            height,
            stops,
            palette,
        } => {
            // 1) Config file, then command-line overrides.
            let mut cfg = match config {
                Some(path) => ChartConfig::from_file(&path)?,
                None => ChartConfig::default(),
            };
            if let Some(w) = width {
                cfg.width = w;
            }
            if let Some(h) = height {
                cfg.height = h;
            }
            if let Some(n) = stops {
                cfg.legend.stops = n;
            }
            if let Some(p) = palette {
                cfg.palette = p;
            }

            // 2) Load, lay out and render; any failure aborts before writing.
            let doc = generate_report(&data, &cfg, format)?;

            // 3) Replace the output file as a whole.
            std::fs::write(&out, doc)
                .with_context(|| diagnostics::error_message(format!("write {}", out)))?;
            diagnostics::info(format!("Wrote {}", out));
        }
    }

    Ok(())
}
