use crate::chart::{ChartProps, PieChart};
use crate::config::{Config, load_config};
use crate::ir::ChartData;
use crate::layout_dump::write_layout_dump;
use crate::parser::parse_chart_data;
use crate::render::{render_animated_svg, render_frame_svg, write_output_png, write_output_svg};
use crate::theme::Theme;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "piechart", version, about = "Animated SVG pie chart renderer")]
pub struct Args {
    /// Data file (JSON5 or plain numbers) or '-' for stdin
    #[arg(short = 'i', long = "input", conflicts_with_all = ["values", "sample"])]
    pub input: Option<PathBuf>,

    /// Inline data, e.g. "48,21,65"
    #[arg(long = "values", conflicts_with = "sample")]
    pub values: Option<String>,

    /// Use the built-in sample data
    #[arg(long = "sample")]
    pub sample: bool,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, chart, render)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Render a static frame at this many milliseconds after mount
    #[arg(long = "at")]
    pub at: Option<f64>,

    /// Show this segment fully hovered. Pointer events only start once the
    /// entry finishes, so an earlier `--at` moves to the end of the hover
    /// expansion.
    #[arg(long = "hover")]
    pub hover: Option<usize>,

    /// Write the computed layout as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    execute(&args)
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

pub fn execute(args: &Args) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.chart.width = width;
    }
    if let Some(height) = args.height {
        config.chart.height = height;
    }

    let data = read_data(args)?;
    let mut chart = PieChart::new(
        ChartProps::from_config(data, &config.chart),
        config.chart.clone(),
        config.theme.clone(),
    );
    let layout = chart.init(0.0).clone();

    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout)
            .with_context(|| format!("failed to write layout dump {}", path.display()))?;
    }

    let wants_frame = args.at.is_some()
        || args.hover.is_some()
        || args.output_format == OutputFormat::Png;
    let svg = if wants_frame {
        let at = frame_time(&mut chart, &config, args)?;
        render_frame_svg(&chart.frame(at)?, &frame_theme(&config, args.output_format))
    } else {
        render_animated_svg(&layout, &config.theme, &config.chart)
    };

    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, args.output.as_deref()),
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_output_png(&svg, &output, &config.render)
        }
    }
}

/// PNG has no transparent page, so a `none` background takes the render one.
fn frame_theme(config: &Config, format: OutputFormat) -> Theme {
    let mut theme = config.theme.clone();
    if format == OutputFormat::Png && theme.background == "none" {
        theme.background = config.render.background.clone();
    }
    theme
}

/// Resolves the snapshot time, hovering the requested segment as soon as
/// pointer events are live. With `--hover`, the frame is never taken
/// before the hover expansion settles.
fn frame_time(chart: &mut PieChart, config: &Config, args: &Args) -> Result<f64> {
    let entry_end = config.chart.entry.duration_ms.max(0.0);
    let mut at = args.at.unwrap_or(entry_end);
    if let Some(index) = args.hover {
        chart.pointer_enter(index, entry_end)?;
        let settled = entry_end + config.chart.hover_enter.duration_ms.max(0.0);
        if at < settled {
            if args.at.is_some() {
                tracing::warn!(requested = at, used = settled, "--hover moves the frame time");
            }
            at = settled;
        }
    }
    Ok(at)
}

fn read_data(args: &Args) -> Result<ChartData> {
    if args.sample {
        return Ok(ChartData::sample());
    }
    if let Some(values) = args.values.as_deref() {
        return Ok(parse_chart_data(values)?);
    }
    let input = read_input(args.input.as_deref())?;
    Ok(parse_chart_data(&input)?)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read data {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
