use std::sync::mpsc::Receiver;
use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Runtime;
use tokio::sync::watch;

use crate::egui_app::api::Services;
use crate::egui_app::group_detail::{
    ControllerError, ControllerSettings, GroupDetailController, GroupDetailState,
};
use crate::egui_app::navigation::{ChannelNavigator, Route};
use crate::egui_app::session::{CredentialProvider, SessionError, SessionStore};
use crate::egui_app::Config;
use crate::shared::{ClientError, GroupId};

/// Failures while starting the desktop shell
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] ClientError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// A mounted detail page: its controller plus the receiver the views read
struct DetailPage {
    controller: GroupDetailController,
    state: watch::Receiver<GroupDetailState>,
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub route: Route,
    pub group_id_input: String,
    pub token_input: String,
    /// Banner shown under the top bar
    pub notice: Option<String>,
    runtime: Runtime,
    services: Services,
    navigator: Arc<ChannelNavigator>,
    navigation: Receiver<Route>,
    page: Option<DetailPage>,
}

impl AppState {
    pub fn new(config: Config, session: SessionStore) -> Result<Self, StartupError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let services = Services::http(config.clone())?;
        let (navigator, navigation) = ChannelNavigator::new();
        tracing::info!("[SESSION] Using server {}", config.server_url());

        Ok(Self {
            config,
            session: Arc::new(session),
            route: Route::Groups,
            group_id_input: String::new(),
            token_input: String::new(),
            notice: None,
            runtime,
            services,
            navigator: Arc::new(navigator),
            navigation,
            page: None,
        })
    }

    /// Apply navigation requested by the controller since the last frame
    pub fn check_navigation(&mut self) {
        while let Ok(route) = self.navigation.try_recv() {
            self.open(route);
        }
    }

    /// Switch pages. The detail page is remounted for a new group and
    /// re-read in place for the same one.
    pub fn open(&mut self, route: Route) {
        match &route {
            Route::GroupDetail(id) => {
                let same_group = self
                    .page
                    .as_ref()
                    .map(|page| page.state.borrow().group_id.as_ref() == Some(id))
                    .unwrap_or(false);
                if !same_group {
                    self.unmount();
                    self.page = Some(self.mount());
                }
                if let Some(page) = &self.page {
                    let controller = page.controller.clone();
                    let id = id.clone();
                    self.runtime.spawn(async move { controller.load(id).await });
                }
            }
            _ => self.unmount(),
        }
        self.route = route;
    }

    /// Open the group typed into the top bar
    pub fn open_group_input(&mut self) {
        match GroupId::parse(&self.group_id_input) {
            Some(id) => {
                self.notice = None;
                self.open(Route::GroupDetail(id));
            }
            None => self.notice = Some("모임 번호를 입력해 주세요.".to_string()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.access_token().is_some()
    }

    pub fn sign_in(&mut self) {
        let token = std::mem::take(&mut self.token_input);
        if let Err(e) = self.session.set_token(Some(token)) {
            tracing::error!("[SESSION] Failed to save token: {}", e);
            self.notice = Some(e.to_string());
        }
    }

    pub fn sign_out(&mut self) {
        if let Err(e) = self.session.clear() {
            tracing::error!("[SESSION] Failed to clear token: {}", e);
            self.notice = Some(e.to_string());
        }
    }

    /// Latest detail page state, if a detail page is mounted
    pub fn detail(&self) -> Option<GroupDetailState> {
        self.page.as_ref().map(|page| page.state.borrow().clone())
    }

    pub fn refresh(&self) {
        self.spawn(|controller| async move { controller.refresh().await });
    }

    pub fn leave(&self) {
        self.spawn(|controller| async move {
            if let Err(e) = controller.request_leave().await {
                tracing::warn!("[ACTION] Leave not completed: {}", e);
            }
        });
    }

    pub fn confirm_delete(&self) {
        self.spawn(|controller| async move {
            if let Err(e) = controller.confirm_delete().await {
                tracing::warn!("[ACTION] Delete not completed: {}", e);
            }
        });
    }

    /// Run a synchronous controller action and log a refusal
    pub fn act(&self, action: impl FnOnce(&GroupDetailController) -> Result<(), ControllerError>) {
        if let Some(page) = &self.page {
            if let Err(e) = action(&page.controller) {
                tracing::warn!("[ACTION] {}", e);
            }
        }
    }

    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(GroupDetailController) -> Fut,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        if let Some(page) = &self.page {
            self.runtime.spawn(task(page.controller.clone()));
        }
    }

    fn mount(&self) -> DetailPage {
        let credentials: Arc<dyn CredentialProvider> = self.session.clone();
        let controller = GroupDetailController::new(
            self.services.clone(),
            credentials,
            self.navigator.clone(),
            ControllerSettings::from(&self.config),
        );
        let state = controller.subscribe();
        DetailPage { controller, state }
    }

    fn unmount(&mut self) {
        if let Some(page) = self.page.take() {
            page.controller.close();
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.unmount();
    }
}
