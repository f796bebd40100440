//! Cross-crate tests: the server over a real loopback socket, and the
//! page-level flows built from several core modules.

#[cfg(test)]
mod api;
#[cfg(test)]
mod classify;
#[cfg(test)]
mod pages;
#[cfg(test)]
mod utils;
