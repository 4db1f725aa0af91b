//! CallAdapter: proxy factory and response-deserialization boundary
//!
//! One adapter per client, bound to the credential context's endpoint. Each
//! [`CallAdapter::new_proxy`] produces a fresh proxy and each
//! [`CallAdapter::deserialize`] a fresh typed value; the adapter caches
//! nothing and reuses no connections beyond what the transport manages
//! internally.

use crate::codec::{JsonCodec, ResponseCodec};
use crate::error::{ConnectError, Result};
use crate::session::SessionAuth;
use crate::transport::{MethodSet, RpcTransport};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Builds call proxies for a daemon endpoint and converts raw responses
/// into typed results.
///
/// Generic over the transport collaborator `T` and the response codec `C`
/// ([`JsonCodec`] by default).
///
/// # Example
///
/// ```
/// use nimbus_connect::{CallAdapter, MethodSet, RpcProxy, RpcTransport, SessionAuth};
/// use serde_json::json;
///
/// struct UserMethods;
///
/// impl MethodSet for UserMethods {
///     const NAMESPACE: &'static str = "one.user";
/// }
///
/// async fn show_user<T: RpcTransport>(
///     session: &SessionAuth,
///     adapter: &CallAdapter<T>,
/// ) -> anyhow::Result<()> {
///     let proxy = adapter.new_proxy::<UserMethods>()?;
///
///     // Session token first, per the remote protocol convention.
///     let raw = proxy
///         .call("info", &[json!(session.session_token()), json!(42)])
///         .await?;
///
///     let user: serde_json::Value = adapter.deserialize(Some(&raw))?;
///     println!("{user}");
///     Ok(())
/// }
/// ```
pub struct CallAdapter<T: RpcTransport, C: ResponseCodec = JsonCodec> {
    /// Transport collaborator producing bound proxies.
    transport: T,

    /// Structural serializer for raw responses.
    codec: C,

    /// Endpoint copied from the credential context for transport binding.
    endpoint: String,
}

impl<T: RpcTransport> CallAdapter<T> {
    /// Create an adapter for `session`'s endpoint using the default JSON
    /// codec.
    pub fn new(transport: T, session: &SessionAuth) -> Self {
        Self::with_codec(transport, JsonCodec, session)
    }
}

impl<T: RpcTransport, C: ResponseCodec> CallAdapter<T, C> {
    /// Create an adapter for `session`'s endpoint with an explicit codec.
    pub fn with_codec(transport: T, codec: C, session: &SessionAuth) -> Self {
        Self {
            transport,
            codec,
            endpoint: session.endpoint().to_string(),
        }
    }

    /// The endpoint proxies are bound to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Produce a proxy for method set `M` bound to this adapter's endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::TransportBinding`] when the transport cannot
    /// construct the proxy. The endpoint string itself is not validated
    /// here; that is the transport's job.
    pub fn new_proxy<M: MethodSet>(&self) -> Result<T::Proxy> {
        debug!(namespace = M::NAMESPACE, endpoint = %self.endpoint, "binding RPC proxy");

        self.transport
            .bind::<M>(&self.endpoint)
            .map_err(|e| ConnectError::TransportBinding {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })
    }

    /// Convert a raw response into a typed value.
    ///
    /// An absent or whitespace-only response is treated as an empty document
    /// and yields `D::default()` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::ResponseDeserialization`] when the codec
    /// rejects the text. The error carries the original response verbatim
    /// and discards the codec's own message, so callers see exactly what
    /// the daemon sent.
    pub fn deserialize<D: DeserializeOwned + Default>(&self, raw: Option<&str>) -> Result<D> {
        let text = raw.unwrap_or("");
        if text.trim().is_empty() {
            debug!("empty response, yielding default value");
            return Ok(D::default());
        }

        match self.codec.decode(text) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(error = %e, len = text.len(), "failed to decode RPC response");
                Err(ConnectError::ResponseDeserialization {
                    raw: text.to_string(),
                })
            }
        }
    }
}
