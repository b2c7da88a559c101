//! `vettrack-auth` — roles, users, and the route access policy.
//!
//! This crate is intentionally decoupled from HTTP and storage: it consumes
//! only the user id and role the external auth collaborator resolves, and
//! answers pure policy questions.

pub mod policy;
pub mod role;
pub mod route;
pub mod user;

pub use policy::{AuthState, RouteDecision, allowed_routes, is_allowed, resolve};
pub use role::Role;
pub use route::Route;
pub use user::AppUser;
