//! Mock server helpers for integration tests
//!
//! [`TestBackend`] wraps a wiremock server and builds clients pointed at it.

use std::sync::Arc;
use std::time::Duration;

use moim::egui_app::api::{HttpClient, Services};
use moim::egui_app::group_detail::{ControllerSettings, GroupDetailController};
use moim::egui_app::navigation::{ChannelNavigator, Route};
use moim::egui_app::session::StaticCredentials;
use moim::egui_app::Config;
use moim::shared::AppConfig;
use serde_json::Value;
use std::sync::mpsc::Receiver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::envelope;

pub struct TestBackend {
    pub server: MockServer,
    pub config: Config,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self::with_timeout(Duration::from_secs(5)).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url(server.uri())
                .request_timeout(timeout),
        )
        .unwrap();
        Self { server, config }
    }

    pub fn http(&self) -> HttpClient {
        HttpClient::new(self.config.clone()).unwrap()
    }

    pub fn services(&self) -> Services {
        Services::http(self.config.clone()).unwrap()
    }

    /// Controller wired to this backend, plus the navigation it requests
    pub fn controller(&self, token: Option<&str>) -> (GroupDetailController, Receiver<Route>) {
        let credentials = match token {
            Some(token) => StaticCredentials::new(token),
            None => StaticCredentials::anonymous(),
        };
        let (navigator, routes) = ChannelNavigator::new();
        let controller = GroupDetailController::new(
            self.services(),
            Arc::new(credentials),
            Arc::new(navigator),
            ControllerSettings::from(&self.config),
        );
        (controller, routes)
    }

    /// Answer `GET {route}` with `data` inside a success envelope
    pub async fn mount_enveloped(&self, route: &str, data: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(data)))
            .mount(&self.server)
            .await;
    }
}
