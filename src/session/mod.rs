//! Session persistence and authentication state.
//!
//! DESIGN
//! ======
//! Three layers with one writer each: [`store::SessionStore`] owns the
//! durable copy in client storage, [`controller::SessionController`]
//! owns the in-memory [`crate::state::auth::AuthState`] projection, and
//! [`context::SessionContext`] bridges the controller into the Leptos
//! tree. Views never touch the store directly.

pub mod context;
pub mod controller;
pub mod store;
