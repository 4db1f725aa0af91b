//! Collaborator seams for the external RPC transport
//!
//! The crate never touches the wire itself. A transport implementation binds
//! an endpoint to a method set and hands back a proxy; the proxy performs
//! the actual network round-trips. The original deployment speaks XML-RPC,
//! but nothing here depends on the wire format — any transport satisfying
//! these traits is substitutable.

use async_trait::async_trait;
use serde_json::Value;

/// Marker describing a group of remote-callable method signatures.
///
/// The daemon groups its methods into dotted namespaces (for example
/// `one.vm` for machine lifecycle calls or `one.user` for account calls).
/// Implementors define one zero-sized type per namespace and a proxy is
/// bound per type, which replaces the original runtime method-set
/// descriptor with a compile-time one.
///
/// # Example
///
/// ```
/// use nimbus_connect::MethodSet;
///
/// /// Virtual machine lifecycle calls.
/// struct VmMethods;
///
/// impl MethodSet for VmMethods {
///     const NAMESPACE: &'static str = "one.vm";
/// }
/// ```
pub trait MethodSet: Send + Sync + 'static {
    /// Dotted method-namespace this set covers on the daemon.
    const NAMESPACE: &'static str;
}

/// A callable proxy bound to one endpoint and one method set.
///
/// Produced by [`RpcTransport::bind`]. By convention of the remote protocol
/// the caller passes the current session token as the first argument of
/// every call (see [`crate::SessionAuth::session_token`]); the proxy does
/// not inject it.
#[async_trait]
pub trait RpcProxy: Send + Sync {
    /// The transport-level failure type for a round-trip.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Invoke `method` with `args` and return the daemon's raw textual
    /// response.
    ///
    /// `method` is relative to the bound [`MethodSet::NAMESPACE`]. The call
    /// is a single synchronous round-trip from the daemon's point of view;
    /// no retries happen at this layer.
    async fn call(&self, method: &str, args: &[Value]) -> Result<String, Self::Error>;
}

/// Factory for call proxies.
///
/// Implementations own whatever connection state the wire protocol needs
/// (channels, pools, TLS configuration); this crate only ever asks them to
/// bind an endpoint to a method-set type.
pub trait RpcTransport: Send + Sync {
    /// The proxy type this transport produces.
    type Proxy: RpcProxy;

    /// The transport-level failure type for binding.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Produce a proxy for method set `M` bound to `endpoint`.
    ///
    /// The endpoint string is passed through opaquely; validating its
    /// well-formedness is the transport's job.
    fn bind<M: MethodSet>(&self, endpoint: &str) -> Result<Self::Proxy, Self::Error>;
}
