// File: crates/benchplot-demo/src/main.rs
// Summary: `insert-bench` CLI; charts the insertion benchmark in a window or to a PNG file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use benchplot_core::{render, Dataset, LegendPosition, RenderOptions, ScaleKind, StylePreset};
use benchplot_skia::SkiaBackend;
use benchplot_window::WindowBackend;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod insertion;

use insertion::insertion_benchmark;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chart sorted-container insertion costs on log/log axes")]
struct Cli {
    /// Write a PNG here instead of opening a window
    #[arg(long)]
    out: Option<PathBuf>,
    /// TOML file with render options (xScale, yScale, legendPosition, stylePreset, width, height, drawLabels)
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON dataset in the interchange form; defaults to the built-in benchmark
    #[arg(long)]
    data: Option<PathBuf>,
    /// linear | log
    #[arg(long)]
    x_scale: Option<ScaleKind>,
    /// linear | log
    #[arg(long)]
    y_scale: Option<ScaleKind>,
    /// upper-left | upper-right | lower-left | lower-right, or a numeric location code 1-4
    #[arg(long)]
    legend: Option<LegendPosition>,
    /// default | dark | light | solarized-dark | solarized-light | high-contrast-dark
    #[arg(long)]
    preset: Option<StylePreset>,
    /// Print the dataset as JSON and exit
    #[arg(long)]
    dump_json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let dataset = match &cli.data {
        Some(path) => load_dataset(path)?,
        None => insertion_benchmark()?,
    };

    if cli.dump_json {
        println!("{}", dataset.to_json()?);
        return Ok(());
    }

    let options = resolve_options(&cli)?;
    match &cli.out {
        Some(path) => {
            let mut backend = SkiaBackend::to_png(path);
            render(&dataset, &options, &mut backend)?;
        }
        None => {
            let title = dataset.title().unwrap_or("insert-bench").to_owned();
            let mut backend = WindowBackend::new(title);
            render(&dataset, &options, &mut backend)?;
        }
    }
    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let dataset = Dataset::from_json(&text).with_context(|| format!("load dataset {}", path.display()))?;
    info!(path = %path.display(), series = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Config file first, then command-line overrides.
fn resolve_options(cli: &Cli) -> Result<RenderOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parse render options {}", path.display()))?
        }
        None => RenderOptions::default(),
    };
    if let Some(kind) = cli.x_scale {
        options.x_scale = kind;
    }
    if let Some(kind) = cli.y_scale {
        options.y_scale = kind;
    }
    if let Some(anchor) = cli.legend {
        options.legend_position = anchor;
    }
    if let Some(preset) = cli.preset {
        options.style_preset = preset;
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["insert-bench", "--y-scale", "linear", "--legend", "1", "--preset", "dark"])
            .unwrap();
        let options = resolve_options(&cli).unwrap();
        assert_eq!(options.x_scale, ScaleKind::Log);
        assert_eq!(options.y_scale, ScaleKind::Linear);
        assert_eq!(options.legend_position, LegendPosition::UpperRight);
        assert_eq!(options.style_preset, StylePreset::Dark);
    }

    fn write_config(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("insert-bench-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn config_file_then_flag_overrides() {
        let path = write_config(
            "opts",
            "yScale = \"linear\"\nlegendPosition = 4\nstylePreset = \"light\"\nwidth = 800\n",
        );
        let config = path.to_str().unwrap();
        let cli = Cli::try_parse_from(["insert-bench", "--config", config, "--preset", "dark"]).unwrap();
        let options = resolve_options(&cli).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.x_scale, ScaleKind::Log);
        assert_eq!(options.y_scale, ScaleKind::Linear);
        assert_eq!(options.legend_position, LegendPosition::LowerRight);
        assert_eq!(options.width, 800);
        assert_eq!(options.style_preset, StylePreset::Dark);
    }

    #[test]
    fn bad_config_reports_the_path() {
        let path = write_config("bad", "zScale = \"log\"\n");
        let cli = Cli::try_parse_from(["insert-bench", "--config", path.to_str().unwrap()]).unwrap();
        let err = resolve_options(&cli).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(format!("{err:#}").contains("parse render options"), "{err:#}");

        let missing = Cli::try_parse_from(["insert-bench", "--config", "/nonexistent/insert-bench.toml"]).unwrap();
        assert!(resolve_options(&missing).is_err());
    }

    #[test]
    fn unknown_scale_is_a_usage_error() {
        assert!(Cli::try_parse_from(["insert-bench", "--x-scale", "sqrt"]).is_err());
    }

    #[test]
    fn dataset_survives_json_interchange() {
        let ds = insertion_benchmark().unwrap();
        let back = Dataset::from_json(&ds.to_json().unwrap()).unwrap();
        assert_eq!(back, ds);
    }
}
