//! Capability seam for the text-generation service.

use crate::error::Result;

/// A text-generation backend: one instruction in, one free-text reply out.
///
/// The live implementation calls a chat-completions endpoint; tests supply
/// deterministic stubs so prompt construction and reply parsing can be
/// exercised without a network.
pub trait TextGenerator {
    /// Send `instruction` under the given system role and return the raw
    /// reply text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NormalizeError::ServiceCall`] when the request
    /// fails (transport, auth, quota, timeout) or the response shape is
    /// unusable.
    fn generate(&self, system: &str, instruction: &str) -> Result<String>;
}
