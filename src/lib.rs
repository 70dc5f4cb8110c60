//! # tickerdeck — client-side portfolio synchronization core
//!
//! A terminal client over a remote stock-portfolio service. The service
//! owns the ticker list and computes the price/change summary; this crate
//! only orchestrates requests and reconciles the local view with whatever
//! the server last confirmed.
//!
//! ```text
//!  user command → Controller → ApiClient → portfolio service
//!                     │                          │
//!                     └── ViewState ◀── response ┘
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod render;
pub mod state;
pub mod transport;
