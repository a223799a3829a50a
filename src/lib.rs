//! Gemini text-generation client with sequential model fallback
//!
//! This crate produces generated text for a prompt by attempting an ordered
//! list of candidate Gemini models, one at a time. A failed attempt —
//! transport error, non-success status, or a response with no usable text —
//! advances to the next model; the call fails only after every candidate has
//! been exhausted, with a single aggregate error listing every attempt.
//!
//! ```no_run
//! use gemini_fallback::{FallbackClient, GenerationConfig};
//!
//! # async fn run() -> gemini_fallback::Result<()> {
//! let client = FallbackClient::from_env()?;
//! let text = client
//!     .generate("Explain quicksort in two sentences.", &GenerationConfig::default())
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod transport;


pub use client::FallbackClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, GenerationConfig};
pub use error::{Error, Result};
pub use models::{FALLBACK_MODELS, fallback_models};
pub use transport::{GenerateTransport, HttpTransport};
