//! Perfect maze generation with an animated terminal front end.
//!
//! The engine builds a square [`Grid`](grid::Grid) and its DFS
//! [`SpanningTree`](tree::SpanningTree), then carves a maze with one of four
//! [`Algorithm`](algorithms::Algorithm)s. Generators report every step as a
//! [`MazeEvent`](events::MazeEvent) through an [`EventSink`](events::EventSink) and stop
//! cooperatively when their [`CancellationToken`](events::CancellationToken) fires. The
//! [`Engine`](engine::Engine) runs them on a worker thread; the [`App`] renders the stream with
//! ratatui.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod algorithms;
mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod grid;
mod input;
pub mod logging;
mod playback;
#[cfg(test)]
mod test_support;
pub mod tree;
mod types;
mod ui;
pub mod union_find;
pub mod wall;

pub use app::{run_headless, App};
