//! Geocoding through the backend's Kakao address proxy.

use async_trait::async_trait;
use reqwest::Method;

use super::http::HttpClient;
use super::GeocodingApi;
use crate::shared::{Address, ClientError, Coordinates, GeocodeResponse};

const ADDRESS_PROXY_PATH: &str = "/api/v1/proxy/kakao/address";

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: HttpClient,
}

impl GeocodingClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl GeocodingApi for GeocodingClient {
    async fn geocode(&self, address: &Address, token: Option<&str>) -> Result<Option<Coordinates>, ClientError> {
        let request = self
            .http
            .request(Method::GET, ADDRESS_PROXY_PATH, token)
            .query(&[
                ("province", address.province.as_str()),
                ("city", address.city.as_str()),
                ("town", address.town.as_str()),
            ]);
        let response: GeocodeResponse = self.http.send_envelope(request).await?;
        Ok(response.first_coordinates())
    }
}
