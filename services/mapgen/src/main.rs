//! Park visitation map generator.
//!
//! Renders orthographic globe maps of US National Park data:
//! - Visitor-count map for one year
//! - Visitor-density map for one year
//! - Absolute and percent year-over-year change maps

mod parks;
mod variants;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use globe_common::{GeoPoint, RenderConfig, Rgb};
use landmask::LandPolygonSet;
use renderer::{GlobeRenderer, PointFeature};

#[derive(Parser, Debug)]
#[command(name = "mapgen")]
#[command(about = "Orthographic globe maps of park visitation data")]
struct Args {
    /// GeoJSON file with world landmass polygons
    #[arg(long, default_value = "World_Continents.geojson")]
    world: PathBuf,

    /// JSON file with park data
    #[arg(long, default_value = "USNP_data.json")]
    parks: PathBuf,

    /// Final output image side length in pixels
    #[arg(long, default_value = "2048")]
    image_size: u32,

    /// Super-sampling factor for anti-aliasing
    #[arg(long, default_value = "2")]
    supersample: u32,

    /// Latitude placed at the image center
    #[arg(long, default_value = "45.0")]
    center_lat: f64,

    /// Longitude placed at the image center
    #[arg(long, default_value = "-105.0")]
    center_lon: f64,

    /// Camera roll in degrees (positive = clockwise)
    #[arg(long, default_value = "-13.0")]
    roll: f64,

    /// Empty border fraction around the globe disk
    #[arg(long, default_value = "0.05")]
    margin: f64,

    /// Park marker radius in kilometers
    #[arg(long, default_value = "50.0")]
    marker_radius_km: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map of raw visitor counts for one year
    Popularity {
        /// Year to analyze
        #[arg(long)]
        year: String,

        /// Output path (default: map_visitors_<year>.png)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Map of cube-root visitor density for one year
    Density {
        /// Year to analyze
        #[arg(long)]
        year: String,

        /// Output path (default: map_density_<year>.png)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Absolute and percent change maps between two years
    Change {
        /// Baseline year
        #[arg(long)]
        year_a: String,

        /// Comparison year
        #[arg(long)]
        year_b: String,

        /// Absolute-change output path
        /// (default: map_change_absolute_<a>_vs_<b>.png)
        #[arg(long)]
        absolute_output: Option<PathBuf>,

        /// Percent-change output path
        /// (default: map_change_percent_<a>_vs_<b>.png)
        #[arg(long)]
        percent_output: Option<PathBuf>,
    },
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            image_size: self.image_size,
            supersample: self.supersample,
            center: GeoPoint::new(self.center_lat, self.center_lon),
            roll_deg: self.roll,
            margin_fraction: self.margin,
            land_color: Rgb::new(78, 97, 65),
            ocean_color: Rgb::new(130, 160, 194),
            space_color: Rgb::new(10, 15, 20),
            marker_radius_km: self.marker_radius_km,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let land = LandPolygonSet::from_geojson_file(&args.world)
        .with_context(|| format!("loading land polygons from {}", args.world.display()))?;
    let parks = parks::load_parks(&args.parks)
        .with_context(|| format!("loading park data from {}", args.parks.display()))?;

    // Derive every output's feature set before the expensive base-map
    // rasterization so an empty variant aborts up front.
    let mut jobs: Vec<(String, Vec<PointFeature>, PathBuf)> = Vec::new();
    match &args.command {
        Command::Popularity { year, output } => {
            info!(%year, "generating visitor-count map");
            let features = variants::popularity_features(&parks, year);
            if features.is_empty() {
                bail!("no parks with visitor data for {}", year);
            }
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("map_visitors_{}.png", year)));
            jobs.push((format!("visitor-count map for {}", year), features, path));
        }
        Command::Density { year, output } => {
            info!(%year, "generating visitor-density map");
            let features = variants::density_features(&parks, year);
            if features.is_empty() {
                bail!("no parks with valid density data for {}", year);
            }
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("map_density_{}.png", year)));
            jobs.push((format!("visitor-density map for {}", year), features, path));
        }
        Command::Change {
            year_a,
            year_b,
            absolute_output,
            percent_output,
        } => {
            info!(%year_a, %year_b, "generating change maps");
            let (absolute, percent) = variants::change_features(&parks, year_a, year_b);
            if absolute.is_empty() {
                bail!("no parks with visitor data for both {} and {}", year_a, year_b);
            }

            let absolute_path = absolute_output.clone().unwrap_or_else(|| {
                PathBuf::from(format!("map_change_absolute_{}_vs_{}.png", year_a, year_b))
            });
            jobs.push((
                format!("absolute change map {} vs {}", year_a, year_b),
                absolute,
                absolute_path,
            ));

            if percent.is_empty() {
                warn!("no parks had valid data for percent change; skipping percent map");
            } else {
                let percent_path = percent_output.clone().unwrap_or_else(|| {
                    PathBuf::from(format!("map_change_percent_{}_vs_{}.png", year_a, year_b))
                });
                jobs.push((
                    format!("percent change map {} vs {}", year_a, year_b),
                    percent,
                    percent_path,
                ));
            }
        }
    }

    // The base map is rasterized once and shared by every job.
    let renderer = GlobeRenderer::new(args.render_config(), &land)?;
    for (label, features, path) in &jobs {
        write_map(&renderer, features, path).with_context(|| label.clone())?;
    }

    Ok(())
}

/// Render one variant's features and write the PNG.
fn write_map(renderer: &GlobeRenderer, features: &[PointFeature], path: &Path) -> Result<()> {
    let png = renderer.render_png(features)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &png)?;
    info!(path = %path.display(), bytes = png.len(), "map image written");
    Ok(())
}
