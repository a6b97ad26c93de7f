use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use shared::{SceneDescription, ViewPlane};

use lineart_lib::{compose_scene, svg, GeneratorRegistry, ProjectionConfig};

#[derive(Parser)]
#[command(name = "lineart")]
#[command(about = "Project the edges of a 3D scene into a 2D SVG line drawing", long_about = None)]
#[command(version)]
struct Cli {
    /// Scene description (JSON)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    scene: PathBuf,

    /// Projection settings (JSON); unspecified fields use defaults
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Look straight at a world plane instead of the configured transform
    #[arg(long)]
    view: Option<ViewArg>,

    /// Output file; stdout when omitted
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    out: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "svg")]
    format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ViewArg {
    Xy,
    Xz,
    Yz,
}

impl From<ViewArg> for ViewPlane {
    fn from(v: ViewArg) -> Self {
        match v {
            ViewArg::Xy => ViewPlane::Xy,
            ViewArg::Xz => ViewPlane::Xz,
            ViewArg::Yz => ViewPlane::Yz,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    Svg,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lineart=info,lineart_lib=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let scene: SceneDescription = read_json(&cli.scene).context("Failed to load scene")?;
    tracing::info!("Loaded scene from {} ({} objects)", cli.scene.display(), scene.objects.len());

    let mut config = match &cli.config {
        Some(path) => read_json(path).context("Failed to load projection config")?,
        None => ProjectionConfig::default(),
    };
    if let Some(view) = cli.view {
        config = config.with_view(view.into());
    }

    let registry = GeneratorRegistry::new();
    let document = compose_scene(&scene, &registry, &config).context("Export failed")?;

    let output = match cli.format {
        OutputFormat::Svg => svg::to_svg(&document),
        OutputFormat::Json => serde_json::to_string_pretty(&document)?,
    };

    match &cli.out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{output}"),
    }

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
}
