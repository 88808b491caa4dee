//! Client side of the logo search
//!
//! `LogoSearchController` debounces keystrokes and reconciles out-of-order
//! responses; `LogoApi` is the seam to the search endpoint.

pub mod api;
pub mod debouncer;
pub mod state;

pub use api::{ClientError, HttpLogoApi, LogoApi};
pub use debouncer::{DebounceConfig, LogoSearchController};
pub use state::{SearchStatus, SearchView};
