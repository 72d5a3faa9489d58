//! Shared render pipeline.
//!
//! One renderer instance holds the camera and the base map, both built once;
//! each analysis variant supplies its own colored feature set and gets back a
//! finished (downsampled) canvas. Variants never share canvas state: the base
//! map is cloned before overlay drawing.

use globe_common::{MapError, MapResult, RenderConfig};
use landmask::LandPolygonSet;
use projection::Camera;

use crate::basemap::render_base_map;
use crate::canvas::Canvas;
use crate::overlay::{draw_features, PointFeature};
use crate::{downsample, png};

/// Renderer for one camera setup, reusable across analysis variants.
#[derive(Debug)]
pub struct GlobeRenderer {
    config: RenderConfig,
    camera: Camera,
    base: Canvas,
}

impl GlobeRenderer {
    /// Validate the configuration, build the camera, and rasterize the base
    /// map. The expensive part is the per-pixel land/ocean classification, so
    /// construct once and render many variants.
    pub fn new(config: RenderConfig, land: &LandPolygonSet) -> MapResult<Self> {
        config.validate()?;
        let camera = Camera::from_config(&config);
        let base = render_base_map(&config, &camera, land);
        Ok(Self {
            config,
            camera,
            base,
        })
    }

    /// The camera shared by base map and overlays.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one variant: overlay the features on a copy of the base map,
    /// then downsample to the output resolution.
    ///
    /// An empty feature set is a fatal input error; per-feature exclusions
    /// happen upstream when the variant's metrics are derived.
    pub fn render(&self, features: &[PointFeature]) -> MapResult<Canvas> {
        if features.is_empty() {
            return Err(MapError::MissingData(
                "no features qualified for this variant".into(),
            ));
        }

        let mut canvas = self.base.clone();
        draw_features(&mut canvas, &self.config, &self.camera, features);
        downsample::downsample(&canvas, self.config.image_size)
    }

    /// Render a variant and encode it as a PNG.
    pub fn render_png(&self, features: &[PointFeature]) -> MapResult<Vec<u8>> {
        let canvas = self.render(features)?;
        png::encode_png_auto(&canvas)
    }
}
