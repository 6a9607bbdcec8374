pub mod form_field;
pub mod sidebar;
pub mod toast;
pub mod user_avatar;

pub use form_field::*;
pub use sidebar::*;
pub use toast::*;
pub use user_avatar::*;
