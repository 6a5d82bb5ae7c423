//! # regulayer
//!
//! Client SDK for the Regulayer compliance-logging API.
//!
//! Each automated decision (a credit approval, a fraud score, a model output)
//! is reported as one JSON event over HTTPS. The SDK fills in defaults,
//! attaches SHA-256 hashes of the decision's input and output for
//! tamper-evidence, and sends a single synchronous `POST /v1/decisions`.
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use regulayer::{Client, ClientConfig, Decision};
//! use serde_json::json;
//!
//! let client = Client::new(ClientConfig::new("rl_live_...")).unwrap();
//!
//! let input = json!({"amount": 1200, "country": "DE"});
//! let output = json!({"approved": true});
//! let decision = Decision::new("loan-approval")
//!     .with_risk_level("high")
//!     .with_input(input.as_object().cloned().unwrap())
//!     .with_output(output.as_object().cloned().unwrap());
//!
//! client.record_decision(&decision).unwrap();
//! ```

pub mod client;
pub mod config;
pub mod decision;
pub mod error;
pub mod hasher;
pub mod id;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use decision::{Decision, DecisionEvent, Payload};
pub use error::RegulayerError;
pub use hasher::hash_payload;
pub use id::{generate_id, generate_id_with, OsRandom, RandomSource};
