// handlers/auth/mod.rs - Auth handler module
//
// POST /api/Auth/Login is public; GET /api/Auth/WhoAmI sits behind the JWT gate.

pub mod login;
pub mod whoami;

pub use login::{login, LoginRequest};
pub use whoami::whoami;
