//! # testbed-core
//!
//! The decision logic behind the UI-testing demo pages, free of any rendering:
//!
//! * **[`classify`]**: the format classifier (IPv4, IPv6, CIDR, domain, URL, port)
//!   and its bounded history.
//! * **[`todo`]**: the todo list store.
//! * **[`form`]**: registration form field rules.
//! * **[`upload`]**: simulated upload queue and file size formatting.
//! * **[`api`]**, **[`http`]** and **[`server`]**: the two JSON endpoints and the
//!   small tokio server that exposes them.

pub mod api;
pub mod classify;
pub mod form;
pub mod http;
pub mod server;
pub mod todo;
pub mod upload;
