//! egui Native Desktop App Module
//!
//! Desktop client for the group detail page of the groups backend.
//!
//! # Architecture
//!
//! - **`config`** - Client configuration (server URL, timeouts, preview size)
//! - **`session`** - Access token storage behind the `CredentialProvider` seam
//! - **`navigation`** - Routes and the `Navigator` seam
//! - **`api`** - HTTP clients for groups, geocoding and board posts
//! - **`group_detail`** - Page state and the controller that drives it
//! - **`state`** - Shell state: runtime, mounted page, inputs
//! - **`views`** / **`theme`** - egui rendering
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration
//! ├── session.rs      - Token storage
//! ├── navigation.rs   - Routes
//! ├── api/            - Remote clients
//! ├── group_detail/   - Controller, state, messages
//! ├── state/          - Shell state
//! ├── views/          - egui views
//! └── theme/          - Colors and frames
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin moim
//! ```

pub mod config;
pub mod session;
pub mod navigation;
pub mod api;
pub mod group_detail;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use group_detail::{GroupDetailController, GroupDetailState};
pub use navigation::{Navigator, Route};
pub use session::{CredentialProvider, SessionStore};
pub use state::AppState;
