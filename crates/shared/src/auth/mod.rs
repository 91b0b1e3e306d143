mod policy;
mod session;

pub use self::policy::{Action, authorize};
pub use self::session::{Role, Session};
