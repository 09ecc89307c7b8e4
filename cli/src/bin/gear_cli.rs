use clap::{Parser, Subcommand};
use cli::InspectionJob;
use color_eyre::eyre::{eyre, Result};
use image::Rgb;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use inspect::{GearInspector, InspectionConfig, InspectionResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a sample gear image against an ideal reference
    Inspect {
        /// Path to the ideal (reference) gear image
        #[arg(short, long, required_unless_present = "job")]
        ideal: Option<PathBuf>,
        /// Path to the sample gear image
        #[arg(short, long, required_unless_present = "job")]
        sample: Option<PathBuf>,
        /// Path to a TOML/JSON job file (alternative to --ideal/--sample)
        #[arg(short, long, conflicts_with_all = ["ideal", "sample"])]
        job: Option<PathBuf>,
        /// Directory for report, difference-mask and annotation outputs
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
        /// Global threshold on the 0-255 grayscale range
        #[arg(long)]
        threshold: Option<u8>,
        /// Minimum defect region area in squared pixels
        #[arg(long)]
        defect_area_min: Option<f64>,
    },
    /// Print the JSON Schema for inspection job files
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            ideal,
            sample,
            job,
            output_dir,
            threshold,
            defect_area_min,
        } => {
            let job = match job {
                Some(path) => InspectionJob::from_file(path)?,
                None => InspectionJob {
                    // Presence enforced by clap when no job file is given.
                    ideal_path: ideal
                        .ok_or_else(|| eyre!("missing --ideal"))?
                        .display()
                        .to_string(),
                    sample_path: sample
                        .ok_or_else(|| eyre!("missing --sample"))?
                        .display()
                        .to_string(),
                    output_dir: None,
                    config: InspectionConfig::default(),
                },
            };

            let mut config = job.config.clone();
            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }
            if let Some(defect_area_min) = defect_area_min {
                config.defect_area_min = defect_area_min;
            }

            let output_dir = output_dir.or_else(|| job.output_dir.as_ref().map(PathBuf::from));

            run_inspection(&job, config, output_dir.as_deref())
        }
        Commands::Schema => {
            let schema = schemars::schema_for!(InspectionJob);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn run_inspection(
    job: &InspectionJob,
    config: InspectionConfig,
    output_dir: Option<&Path>,
) -> Result<()> {
    info!(ideal = %job.ideal_path, sample = %job.sample_path, "loading image pair");
    let ideal = image::open(&job.ideal_path)?;
    let sample = image::open(&job.sample_path)?;

    let inspector = GearInspector::builder().with_config(config).build();
    let result = inspector.inspect(&ideal, &sample)?;

    println!("Detected gear defects:");
    for line in result.summary() {
        println!("- {line}");
    }

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)?;
        write_outputs(&result, &sample, dir)?;
    }

    Ok(())
}

fn write_outputs(result: &InspectionResult, sample: &image::DynamicImage, dir: &Path) -> Result<()> {
    let report_path = dir.join("report.json");
    fs::write(
        &report_path,
        serde_json::to_string_pretty(&result.to_report())?,
    )?;
    info!(path = %report_path.display(), "wrote report");

    let geojson_path = dir.join("defects.geojson");
    result.save_geojson(&geojson_path)?;
    info!(path = %geojson_path.display(), "wrote defect regions");

    let diff_path = dir.join("difference.png");
    result.difference_mask.save(&diff_path)?;
    info!(path = %diff_path.display(), "wrote difference mask");

    let annotated_path = dir.join("annotated.png");
    annotate(result, sample).save(&annotated_path)?;
    info!(path = %annotated_path.display(), "wrote annotated sample");

    Ok(())
}

/// Draw each defect region's bounding box over the sample image.
fn annotate(result: &InspectionResult, sample: &image::DynamicImage) -> image::RgbImage {
    let mut canvas = sample.to_rgb8();
    for region in &result.regions {
        let bbox = region.bounding_box;
        let rect = Rect::at(bbox.x as i32, bbox.y as i32)
            .of_size(bbox.width.max(1.0) as u32, bbox.height.max(1.0) as u32);
        draw_hollow_rect_mut(&mut canvas, rect, Rgb([0, 255, 0]));
    }
    canvas
}
