//! Group Detail Controller
//!
//! Drives the three reads behind the detail page (group, coordinates, board
//! preview) and the user actions on it. State lives in a
//! [`tokio::sync::watch`] channel: the controller is the only writer, views
//! and tests subscribe.
//!
//! # Ordering
//!
//! - the group read and the board read start together
//! - the coordinate read starts only after a group detail has been applied,
//!   and only for an address that has not been looked up before; a page that
//!   returns to an address whose lookup is still running joins that lookup
//! - every result is checked against the ticket it was issued with before it
//!   touches the state (see [`super::state`])
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use moim::egui_app::api::Services;
//! use moim::egui_app::group_detail::{ControllerSettings, GroupDetailController};
//! use moim::egui_app::navigation::ChannelNavigator;
//! use moim::egui_app::session::StaticCredentials;
//! use moim::egui_app::Config;
//! use moim::shared::GroupId;
//!
//! # async fn example() {
//! let config = Config::new();
//! let (navigator, routes) = ChannelNavigator::new();
//! let controller = GroupDetailController::new(
//!     Services::http(config.clone()).unwrap(),
//!     Arc::new(StaticCredentials::new("jwt")),
//!     Arc::new(navigator),
//!     ControllerSettings::from(&config),
//! );
//! controller.load(GroupId::parse("42").unwrap()).await;
//! println!("{:?}", controller.snapshot().phase());
//! # }
//! ```

use futures_util::future::{join, BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

use super::messages;
use super::state::{GroupDetailState, PostsState, Ticket};
use crate::egui_app::api::Services;
use crate::egui_app::config::Config;
use crate::egui_app::navigation::{Navigator, Route};
use crate::egui_app::session::CredentialProvider;
use crate::shared::{Address, ClientError, Coordinates, GroupAction, GroupId, PostQuery};

/// Why a user action was refused or failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("the page has been closed")]
    Closed,
    #[error("no group is loaded")]
    NotLoaded,
    #[error("{0:?} is not available to this viewer")]
    NotPermitted(GroupAction),
    #[error("delete has not been confirmed")]
    ConfirmationRequired,
    #[error("another action is still running")]
    ActionInFlight,
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("{action:?} failed: {source}")]
    Action {
        action: GroupAction,
        #[source]
        source: ClientError,
    },
}

/// Tunables taken from [`Config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    pub request_timeout: Duration,
    pub preview_len: usize,
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            request_timeout: config.request_timeout(),
            preview_len: config.preview_len(),
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Remote mutations the page can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Leave,
    Delete,
}

impl Mutation {
    fn action(self) -> GroupAction {
        match self {
            Mutation::Leave => GroupAction::Leave,
            Mutation::Delete => GroupAction::Delete,
        }
    }

    fn failure_message(self, error: &ClientError) -> &'static str {
        match (self, error.is_transport()) {
            (Mutation::Leave, false) => messages::LEAVE_FAILED,
            (Mutation::Leave, true) => messages::LEAVE_ERROR,
            (Mutation::Delete, false) => messages::DELETE_FAILED,
            (Mutation::Delete, true) => messages::DELETE_ERROR,
        }
    }
}

/// One geocoding request per address, shared by every page state that needs it.
/// A resolved entry doubles as the memo.
type Lookup = Shared<BoxFuture<'static, Option<Coordinates>>>;

struct Inner {
    services: Services,
    credentials: Arc<dyn CredentialProvider>,
    navigator: Arc<dyn Navigator>,
    settings: ControllerSettings,
    state: watch::Sender<GroupDetailState>,
    geocodes: Mutex<HashMap<Address, Lookup>>,
}

/// Controller for one group detail page instance
#[derive(Clone)]
pub struct GroupDetailController {
    inner: Arc<Inner>,
}

impl GroupDetailController {
    pub fn new(
        services: Services,
        credentials: Arc<dyn CredentialProvider>,
        navigator: Arc<dyn Navigator>,
        settings: ControllerSettings,
    ) -> Self {
        let (state, _) = watch::channel(GroupDetailState::default());
        Self {
            inner: Arc::new(Inner {
                services,
                credentials,
                navigator,
                settings,
                state,
                geocodes: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<GroupDetailState> {
        self.inner.state.subscribe()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> GroupDetailState {
        self.inner.state.borrow().clone()
    }

    /// Show the group `id`. A different id starts a new visit; the current id
    /// is re-read in place.
    pub async fn load(&self, id: GroupId) {
        let same_page = {
            let state = self.inner.state.borrow();
            !state.closed && state.group_id.as_ref() == Some(&id)
        };
        if same_page {
            self.refresh().await;
            return;
        }

        let mut tickets = None;
        self.inner.state.send_if_modified(|state| {
            if state.closed {
                return false;
            }
            tickets = Some(state.start_page(id.clone()));
            true
        });
        let Some((group_ticket, posts_ticket)) = tickets else {
            tracing::debug!("[GROUP] Ignoring load of {} on a closed page", id);
            return;
        };

        tracing::info!("[GROUP] Loading group {}", id);
        join(
            self.load_group(id.clone(), group_ticket),
            self.load_posts(id, posts_ticket),
        )
        .await;
    }

    /// Re-read the current group, keeping the rendered detail on failure
    pub async fn refresh(&self) {
        let mut started = None;
        self.inner.state.send_if_modified(|state| {
            started = state.start_group_refresh();
            started.is_some()
        });
        if let Some((id, ticket)) = started {
            tracing::info!("[GROUP] Refreshing group {}", id);
            self.load_group(id, ticket).await;
        }
    }

    /// Unmount: every later result is dropped
    pub fn close(&self) {
        self.inner.state.send_if_modified(|state| {
            if state.closed {
                return false;
            }
            state.close();
            true
        });
    }

    async fn load_group(&self, id: GroupId, ticket: Ticket) {
        let token = self.inner.credentials.access_token();
        let result = self
            .bounded(self.inner.services.groups.fetch_group(&id, token.as_deref()))
            .await;

        let memo = match &result {
            Ok(group) => self.memoized(&group.address()),
            Err(_) => None,
        };

        let mut lookup = None;
        let applied = self.inner.state.send_if_modified(|state| {
            if !state.group_ticket_is_current(ticket) {
                return false;
            }
            match result {
                Ok(group) => {
                    tracing::info!("[GROUP] Loaded group {} ({})", id, group.name);
                    lookup = state.apply_group(group, memo);
                }
                Err(e) => {
                    tracing::warn!("[GROUP] Failed to load group {}: {}", id, e);
                    state.fail_group(messages::GROUP_LOAD_FAILED);
                }
            }
            true
        });

        if !applied {
            tracing::warn!("[GROUP] Discarding stale response for group {}", id);
            return;
        }
        if let Some(address) = lookup {
            self.load_coordinates(ticket.page(), address).await;
        }
    }

    async fn load_coordinates(&self, page: u64, address: Address) {
        let outcome = self.lookup(&address).await;
        let applied = self
            .inner
            .state
            .send_if_modified(|state| state.apply_coordinates(page, &address, outcome));
        if !applied {
            tracing::debug!("[GEO] Dropping coordinates for {}; page moved on", address);
        }
    }

    async fn load_posts(&self, id: GroupId, ticket: Ticket) {
        let token = self.inner.credentials.access_token();
        let result = self
            .bounded(
                self.inner
                    .services
                    .posts
                    .list_posts(&id, &PostQuery::first_page(), token.as_deref()),
            )
            .await;
        let preview_len = self.inner.settings.preview_len;

        self.inner.state.send_if_modified(|state| {
            if !state.posts_ticket_is_current(ticket) {
                return false;
            }
            state.posts = match result {
                Ok(page) => PostsState::Loaded(page.preview(preview_len)),
                Err(e) => {
                    tracing::warn!("[POSTS] Failed to load board preview for {}: {}", id, e);
                    PostsState::Failed
                }
            };
            true
        });
    }

    /// Navigate to the join flow
    pub fn request_join(&self) -> Result<(), ControllerError> {
        let id = self.check_action(GroupAction::Join)?;
        self.inner.navigator.navigate(Route::GroupJoin(id));
        Ok(())
    }

    /// Navigate to the edit flow
    pub fn request_edit(&self) -> Result<(), ControllerError> {
        let id = self.check_action(GroupAction::Edit)?;
        self.inner.navigator.navigate(Route::GroupEdit(id));
        Ok(())
    }

    /// Navigate to the full board
    pub fn open_board(&self) -> Result<(), ControllerError> {
        let id = self.current_id()?;
        self.inner.navigator.navigate(Route::GroupBoard(id));
        Ok(())
    }

    /// Navigate to one post of the board
    pub fn open_post(&self, post_id: i64) -> Result<(), ControllerError> {
        let id = self.current_id()?;
        self.inner.navigator.navigate(Route::GroupPost(id, post_id));
        Ok(())
    }

    /// Leave the group; on success the page navigates to `/groups`
    pub async fn request_leave(&self) -> Result<(), ControllerError> {
        self.run_mutation(Mutation::Leave).await
    }

    /// Open the delete confirmation
    pub fn request_delete(&self) -> Result<(), ControllerError> {
        self.check_action(GroupAction::Delete)?;
        self.inner.state.send_modify(|state| state.confirm_pending = true);
        Ok(())
    }

    /// Close the delete confirmation without touching the backend
    pub fn cancel_delete(&self) {
        self.inner.state.send_if_modified(|state| {
            let was_open = state.confirm_pending;
            state.confirm_pending = false;
            was_open
        });
    }

    /// Delete the group. Only valid while the confirmation is open; a
    /// confirmation the page can no longer honour is reported in
    /// `action_error`.
    pub async fn confirm_delete(&self) -> Result<(), ControllerError> {
        let mut confirmed = Err(ControllerError::ConfirmationRequired);
        self.inner.state.send_if_modified(|state| {
            if !std::mem::replace(&mut state.confirm_pending, false) {
                return false;
            }
            confirmed = Self::admit(state, GroupAction::Delete).map(|_| ());
            if confirmed.is_err() {
                state.action_error = Some(messages::DELETE_UNAVAILABLE.to_string());
            }
            true
        });
        if let Err(e) = confirmed {
            tracing::warn!("[ACTION] Delete not confirmed: {}", e);
            return Err(e);
        }
        self.run_mutation(Mutation::Delete).await
    }

    async fn run_mutation(&self, mutation: Mutation) -> Result<(), ControllerError> {
        let action = mutation.action();
        let token = self.inner.credentials.access_token();

        let mut admitted = Err(ControllerError::NotLoaded);
        self.inner.state.send_if_modified(|state| {
            admitted = Self::admit(state, action);
            if admitted.is_err() {
                return false;
            }
            if token.is_none() {
                state.action_error = Some(messages::LOGIN_REQUIRED.to_string());
                admitted = Err(ControllerError::AuthenticationRequired);
            } else {
                state.action_error = None;
                state.action_in_flight = Some(action);
            }
            true
        });
        let (id, page) = admitted?;
        let Some(token) = token else {
            return Err(ControllerError::AuthenticationRequired);
        };

        tracing::info!("[ACTION] {:?} group {}", action, id);
        let groups = &self.inner.services.groups;
        let result = match mutation {
            Mutation::Leave => self.bounded(groups.leave_group(&id, &token)).await,
            Mutation::Delete => self.bounded(groups.delete_group(&id, &token)).await,
        };

        match result {
            Ok(()) => {
                let current = self.inner.state.send_if_modified(|state| {
                    if !state.page_is_current(page) {
                        return false;
                    }
                    state.finish();
                    true
                });
                if current {
                    self.inner.navigator.navigate(Route::Groups);
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("[ACTION] {:?} group {} failed: {}", action, id, e);
                let message = mutation.failure_message(&e);
                self.inner.state.send_if_modified(|state| {
                    if !state.page_is_current(page) {
                        return false;
                    }
                    state.action_in_flight = None;
                    state.action_error = Some(message.to_string());
                    true
                });
                Err(ControllerError::Action { action, source: e })
            }
        }
    }

    /// Gate shared by every action: loaded page, permitted role, nothing running
    fn admit(state: &GroupDetailState, action: GroupAction) -> Result<(GroupId, u64), ControllerError> {
        if state.closed {
            return Err(ControllerError::Closed);
        }
        let (Some(group), Some(id)) = (state.loaded_group(), state.group_id.as_ref()) else {
            return Err(ControllerError::NotLoaded);
        };
        if !group.permits(action) {
            return Err(ControllerError::NotPermitted(action));
        }
        if state.action_in_flight.is_some() {
            return Err(ControllerError::ActionInFlight);
        }
        Ok((id.clone(), state.current_page()))
    }

    fn check_action(&self, action: GroupAction) -> Result<GroupId, ControllerError> {
        let state = self.inner.state.borrow();
        Self::admit(&state, action).map(|(id, _)| id)
    }

    fn current_id(&self) -> Result<GroupId, ControllerError> {
        let state = self.inner.state.borrow();
        if state.closed {
            return Err(ControllerError::Closed);
        }
        state.group_id.clone().ok_or(ControllerError::NotLoaded)
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T, ClientError>>) -> Result<T, ClientError> {
        with_timeout(self.inner.settings.request_timeout, call).await
    }

    fn geocodes(&self) -> MutexGuard<'_, HashMap<Address, Lookup>> {
        self.inner.geocodes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Finished outcome for `address`, failures included
    fn memoized(&self, address: &Address) -> Option<Option<Coordinates>> {
        self.geocodes().get(address).and_then(|lookup| lookup.peek().cloned())
    }

    /// The lookup for `address`, issuing the request only the first time
    fn lookup(&self, address: &Address) -> Lookup {
        let mut geocodes = self.geocodes();
        if let Some(running) = geocodes.get(address) {
            tracing::debug!("[GEO] Joining lookup for {}", address);
            return running.clone();
        }

        let geocoding = Arc::clone(&self.inner.services.geocoding);
        let token = self.inner.credentials.access_token();
        let limit = self.inner.settings.request_timeout;
        let target = address.clone();
        let lookup = async move {
            match with_timeout(limit, geocoding.geocode(&target, token.as_deref())).await {
                Ok(Some(coordinates)) => Some(coordinates),
                Ok(None) => {
                    tracing::info!("[GEO] No match for {}", target);
                    None
                }
                Err(e) => {
                    tracing::warn!("[GEO] Geocoding failed for {}: {}", target, e);
                    None
                }
            }
        }
        .boxed()
        .shared();

        geocodes.insert(address.clone(), lookup.clone());
        lookup
    }
}

/// Bound a remote call by `limit`
async fn with_timeout<T>(limit: Duration, call: impl Future<Output = Result<T, ClientError>>) -> Result<T, ClientError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::Timeout),
    }
}
