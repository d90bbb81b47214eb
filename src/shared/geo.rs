//! Geocoding types
//!
//! The backend proxies a Kakao-style address search. Each document carries
//! `x` (longitude) and `y` (latitude) as strings; [`Coordinates`] keeps them
//! as strings too and names them properly.

use reqwest::Url;
use serde::{Deserialize, Serialize};

const MAP_LINK_BASE: &str = "https://map.kakao.com/link/map/";

/// Payload of `GET /api/v1/proxy/kakao/address`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub documents: Vec<GeocodeDocument>,
}

/// One address match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeDocument {
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_name: Option<String>,
}

impl GeocodeResponse {
    /// Coordinates of the first match, if any
    pub fn first_coordinates(&self) -> Option<Coordinates> {
        self.documents.first().map(Coordinates::from)
    }
}

/// Latitude/longitude pair derived from a group's address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinates {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Numeric `(latitude, longitude)`, `None` if either is not a number
    pub fn as_f64(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.trim().parse::<f64>().ok()?;
        let lng = self.longitude.trim().parse::<f64>().ok()?;
        Some((lat, lng))
    }

    /// Link that opens the position in Kakao Map, `None` unless both axes
    /// are numeric. The label is percent-encoded; commas separate fields.
    pub fn map_link(&self, label: &str) -> Option<String> {
        let (lat, lng) = self.as_f64()?;
        let mut url = Url::parse(MAP_LINK_BASE).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .push(&format!("{},{},{}", label.replace(',', " "), lat, lng));
        Some(url.to_string())
    }
}

impl From<&GeocodeDocument> for Coordinates {
    fn from(doc: &GeocodeDocument) -> Self {
        Self {
            latitude: doc.y.clone(),
            longitude: doc.x.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_document_swaps_axes() {
        let response: GeocodeResponse = serde_json::from_str(
            r#"{"documents":[{"x":"127.05","y":"37.50"},{"x":"126.0","y":"36.0"}]}"#,
        )
        .unwrap();
        assert_eq!(response.first_coordinates(), Some(Coordinates::new("37.50", "127.05")));
    }

    #[test]
    fn test_no_documents() {
        let response: GeocodeResponse = serde_json::from_str(r#"{"documents":[]}"#).unwrap();
        assert_eq!(response.first_coordinates(), None);
        let response: GeocodeResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(response.first_coordinates(), None);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Coordinates::new("37.50", "127.05").as_f64(), Some((37.5, 127.05)));
        assert_eq!(Coordinates::new("north", "127.05").as_f64(), None);
    }

    #[test]
    fn test_map_link_encodes_label() {
        let link = Coordinates::new("37.50", "127.05").map_link("러닝, 모임/a").unwrap();
        assert_eq!(
            link,
            "https://map.kakao.com/link/map/%EB%9F%AC%EB%8B%9D%20%20%EB%AA%A8%EC%9E%84%2Fa,37.5,127.05"
        );
    }

    #[test]
    fn test_map_link_needs_numeric_coordinates() {
        assert_eq!(Coordinates::new("north", "127.05").map_link("모임"), None);
    }
}
