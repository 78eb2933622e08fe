//! Network layer: HTTP helpers, service wrappers, and wire types.
//!
//! DESIGN
//! ======
//! `api` owns the low-level request plumbing (base path, auth header, JSON
//! decoding). `auth` and `courses` are flat endpoint wrappers on top of it,
//! one function per backend operation. `types` mirrors the backend
//! serializers so pages never touch raw JSON.

pub mod api;
pub mod auth;
pub mod courses;
pub mod error;
pub mod types;
