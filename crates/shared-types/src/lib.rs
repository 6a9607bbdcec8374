pub mod config;
pub mod error;

// Identity and session
pub mod models;
pub mod session;

// Access scoping
pub mod layout;
pub mod navigation;
pub mod route_guard;

pub use config::*;
pub use error::*;
pub use layout::*;
pub use models::*;
pub use navigation::*;
pub use route_guard::*;
pub use session::*;
