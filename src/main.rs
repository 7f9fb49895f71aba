use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tagflow::{FlowError, OffsetConvention, Scene, SceneOverrides};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Convention {
    Absolute,
    Delta,
}

impl From<Convention> for OffsetConvention {
    fn from(c: Convention) -> Self {
        match c {
            Convention::Absolute => OffsetConvention::Absolute,
            Convention::Delta => OffsetConvention::Delta,
        }
    }
}

/// Lays out a JSON scene of tags and prints each tag's position and the
/// resulting container height as JSON.
#[derive(Debug, Parser)]
#[command(name = "tagflow", version)]
struct Cli {
    /// Path to the scene file.
    scene: PathBuf,

    /// Overrides the scene's container width.
    #[arg(long)]
    width: Option<f32>,

    /// Overrides the scene's spacing.
    #[arg(long)]
    spacing: Option<f32>,

    /// Offset convention used in the output.
    #[arg(long, value_enum)]
    convention: Option<Convention>,

    /// Reject negative sizes and duplicate ids instead of laying them out.
    #[arg(long)]
    strict: bool,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), FlowError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scene = Scene::from_path(&cli.scene)?;
    scene.apply(&SceneOverrides {
        width: cli.width,
        spacing: cli.spacing,
        convention: cli.convention.map(Into::into),
        strict: cli.strict,
    });

    let layout = scene.layout()?;
    let output = if cli.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{}", output);
    Ok(())
}
