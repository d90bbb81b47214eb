//! Moim - Group Detail Client
//!
//! Desktop client for the detail page of a community-groups service. The page
//! shows one group, its location and a short preview of its board, and offers
//! the join / leave / edit / delete actions the viewer's role allows.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types and errors, free of I/O
//!   - Response envelope, group detail, geocoding documents, board posts
//!   - `ClientError` and layered `AppConfig`
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - reqwest clients behind `GroupApi` / `GeocodingApi` / `PostApi`
//!   - `GroupDetailController`, publishing `GroupDetailState` over a watch channel
//!   - Session token storage, routes, views
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use moim::egui_app::api::Services;
//! use moim::egui_app::group_detail::{ControllerSettings, GroupDetailController};
//! use moim::egui_app::navigation::ChannelNavigator;
//! use moim::egui_app::{Config, SessionStore};
//! use moim::shared::GroupId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let (navigator, _routes) = ChannelNavigator::new();
//! let controller = GroupDetailController::new(
//!     Services::http(config.clone())?,
//!     Arc::new(SessionStore::open_default()?),
//!     Arc::new(navigator),
//!     ControllerSettings::from(&config),
//! );
//! controller.load(GroupId::from(42)).await;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Controller**: cheap to clone; all clones drive the same page
//! - **Native**: egui is single-threaded immediate mode GUI; remote calls run
//!   on a tokio runtime owned by `AppState`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
