//! Type aliases for domain concepts.

/// A recipient identity (gpg key id, fingerprint, e-mail or age public key).
///
/// Opaque to the store; only the cipher backend interprets it.
pub type Identity = String;
