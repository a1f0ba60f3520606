#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Shipping Tracker
//!
//! > **Order status tracking with a keyword-driven question interpreter.**
//!
//! This crate records how shipped orders move through their lifecycle and answers
//! free-text customer questions ("where is my order?", "when will it arrive?") from each
//! order's current state.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### A recorder, not a workflow engine
//! Any [`ShippingStatus`](model::ShippingStatus) may follow any other. The registry's job is
//! to keep an honest, append-only trail of what happened, not to decide what may happen.
//!
//! ### Plain values at the core, actors at the edge
//! [`TrackingRegistry`](registry::TrackingRegistry) is an ordinary synchronous value owned by
//! whoever creates it; there is no global instance. When several tasks need it, the
//! [`actor`] module moves it into a single Tokio task and serializes every request, so
//! status updates never interleave.
//!
//! ### Deterministic by injection
//! Time ([`Clock`](registry::Clock)) and id generation ([`IdGenerator`](registry::IdGenerator))
//! are injected. The [`mock`] module provides a manual clock and scripted ids for tests.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`OrderRecord`](model::OrderRecord), its [`TrackingUpdate`](model::TrackingUpdate) history,
//! and the closed [`ShippingStatus`](model::ShippingStatus) enum.
//!
//! ### 2. The Store ([`registry`])
//! Creates orders, records status changes, looks orders up. Unknown ids are
//! [`TrackingError::NotFound`](registry::TrackingError::NotFound).
//!
//! ### 3. The Conversation ([`query`])
//! [`QueryInterpreter`](query::QueryInterpreter) classifies a question with a first-match-wins
//! keyword table and renders the answer. It always returns text, even for unknown orders.
//!
//! ### 4. The Host ([`actor`], [`lifecycle`])
//! [`TrackingActor`](actor::TrackingActor) / [`TrackingClient`](actor::TrackingClient) for
//! concurrent use, and [`ShippingSystem`](lifecycle::ShippingSystem) to start and stop them.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Interactive menu with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod actor;
pub mod config;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod query;
pub mod registry;
