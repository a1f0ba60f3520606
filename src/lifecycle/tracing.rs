//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole process.
//!
//! Log lines are compact and hide the module path (`with_target(false)`); the structured
//! fields (`order_id`, `status`, `size`) carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown with the registry size
//! - **Registry Operations**: `Created`, `Updated` at `info`; `Get` and payloads at `debug`
//! - **Misses**: unknown order ids and id collisions at `warn`
//! - **Client Calls**: one span per [`TrackingClient`](crate::actor::TrackingClient) method
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run                       # state changes only
//! RUST_LOG=debug cargo run                      # plus lookups, payloads and intents
//! RUST_LOG=shipping_tracker::query=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an order's life looks like:
//!
//! ```text
//! INFO Created order_id=ORD-10001 size=1
//! INFO Updated order_id="ORD-10001" status=Shipped location=Some("Warehouse A")
//! INFO Updated order_id="ORD-10001" status=In Transit location=Some("Distribution Center B")
//! ```

/// Initializes the global subscriber. Verbosity comes from `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
