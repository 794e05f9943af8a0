// src/lib.rs
//! Client for the exaroton server hosting API.
//!
//! ```no_run
//! # async fn run() -> exaroton_client::Result<()> {
//! let client = exaroton_client::Exaroton::new("my-token")?;
//! let server = client.server("Pn8J6Yy0TWUqflP6");
//! println!("{:?}", server.get().await?.status);
//! server.start().await?;
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{Exaroton, ServerHandle};
pub use config::Config;
pub use error::{Error, Result};
pub use models::server::{Server, ServerStatus};
