use geojson::{Feature, GeoJson};
use log::debug;

/// Extracts the feature list from a raw hazard payload.
///
/// The provider is never required to be well-formed: unreadable payloads
/// yield an empty list, and a bare feature or geometry is promoted to a
/// single-entry collection.
pub fn parse_collection(raw: &str) -> Vec<Feature> {
    match raw.parse::<GeoJson>() {
        Ok(GeoJson::FeatureCollection(collection)) => collection.features,
        Ok(GeoJson::Feature(feature)) => vec![feature],
        Ok(GeoJson::Geometry(geometry)) => vec![Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: None,
            foreign_members: None,
        }],
        Err(err) => {
            debug!("Discarding unreadable hazard payload: {err}");
            Vec::new()
        }
    }
}
