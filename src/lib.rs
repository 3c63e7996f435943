//! inventario - Sistema de Gestión de Inventarios
//!
//! A small inventory REST API backed by a single JSON file: the `store`
//! module owns the file, the `http` module exposes it, and the `cli`
//! module boots the server.

pub mod cli;
pub mod http;
pub mod store;
