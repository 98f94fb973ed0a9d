pub mod config;
pub mod detail;
pub mod element;
pub mod engine;
pub mod net;
pub mod render;
pub mod search;
pub mod session;

#[cfg(test)]
mod testdata;
