//! VTU dashboard core.
//!
//! Browser-independent state, purchase flow and rendering. The WASM front end
//! supplies the wallet widget, timers and clock through [`services`].

pub mod amount;
pub mod config;
pub mod controller;
pub mod error;
pub mod flow;
pub mod history;
pub mod notice;
pub mod services;
pub mod state;
pub mod view;

pub use config::DashboardConfig;
pub use controller::{Collaborators, Controller};
pub use error::DashboardError;
pub use flow::{FlowState, PendingPurchase, StatusDisplay};
pub use notice::{Notice, NoticeKind};
pub use state::AppState;
pub use view::{ConfirmationSummary, DashboardView};
