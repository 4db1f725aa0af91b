//! Nimbus Connect: client-side RPC connectivity for a cloud orchestration daemon
//!
//! This crate lets an application issue authenticated calls against a cloud
//! orchestration daemon's RPC interface, optionally acting on behalf of a
//! secondary user while authenticating as an administrative identity.
//!
//! # Architecture
//!
//! - **SessionAuth**: credential context holding the endpoint, the admin
//!   identity/secret, and the currently impersonated identity; derives the
//!   session token that authenticates every call
//! - **CallAdapter**: binds transport proxies to the endpoint and converts
//!   raw responses into typed results with uniform error translation
//! - **RpcTransport / RpcProxy / ResponseCodec**: narrow seams for the
//!   external transport and serializer collaborators; the wire format is
//!   never specified here
//!
//! The daemon expects the session token as the first positional argument of
//! every call. The token is a plaintext concatenation
//! (`admin:secret[:target]`), not a server-issued credential — the name is
//! inherited from the remote protocol's own terminology.
//!
//! # Example
//!
//! ```
//! use nimbus_connect::SessionAuth;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = SessionAuth::new("https://one.example/RPC2", "oneadmin", "secretpw")?;
//!
//! // Issue a few calls on behalf of alice, then drop back to the admin.
//! session.begin_delegation("alice");
//! assert_eq!(session.session_token(), "oneadmin:secretpw:alice");
//! session.end_delegation();
//! assert_eq!(session.session_token(), "oneadmin:secretpw");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Concurrency
//!
//! A `SessionAuth` has a single logical owner: delegation mutates state the
//! token derivation reads, so one instance must not serve two concurrent
//! call paths. Give each concurrent delegation scope its own clone (cheap
//! value object), or serialize begin→call→end through a mutex. The core
//! itself never blocks; all I/O lives in the transport collaborator.

pub mod adapter;
pub mod codec;
pub mod error;
pub mod session;
pub mod transport;

pub use adapter::CallAdapter;
pub use codec::{JsonCodec, ResponseCodec};
pub use error::ConnectError;
pub use session::SessionAuth;
pub use transport::{MethodSet, RpcProxy, RpcTransport};
