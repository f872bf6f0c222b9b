//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Each struct is plain data; reactivity comes from
//! wrapping them in `RwSignal` at the application root.

pub mod auth;
pub mod register;
