use crate::{error::Result, report::InspectionResult};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

impl InspectionResult {
    /// Export the defect regions as a GeoJSON FeatureCollection, one polygon
    /// feature per region with its classification and metrics as properties.
    /// Image dimensions travel as foreign members.
    pub fn to_geojson(&self) -> Result<GeoJson> {
        let mut features = Vec::new();

        for (i, region) in self.regions.iter().enumerate() {
            let ring: Vec<Vec<f64>> = region
                .contour
                .points
                .iter()
                .map(|&[x, y]| vec![f64::from(x), f64::from(y)])
                .collect();
            let geometry = Geometry::new(Value::Polygon(vec![ring]));

            let mut properties = serde_json::Map::new();
            properties.insert("id".to_string(), serde_json::Value::from(i as u64));
            properties.insert("area".to_string(), serde_json::Value::from(region.area));
            properties.insert(
                "classification".to_string(),
                serde_json::Value::String(region.kind.to_string()),
            );
            properties.insert(
                "bbox".to_string(),
                serde_json::to_value(region.bounding_box)?,
            );

            features.push(Feature {
                bbox: None,
                geometry: Some(geometry),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }

        let mut foreign_members = serde_json::Map::new();
        foreign_members.insert(
            "image_width".to_string(),
            serde_json::Value::from(self.image_width),
        );
        foreign_members.insert(
            "image_height".to_string(),
            serde_json::Value::from(self.image_height),
        );
        foreign_members.insert(
            "findings".to_string(),
            serde_json::to_value(self.summary())?,
        );

        Ok(GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(foreign_members),
        }))
    }

    /// Write the GeoJSON export to a file.
    pub fn save_geojson<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let geojson = self.to_geojson()?;
        std::fs::write(path, geojson.to_string())?;
        Ok(())
    }
}
