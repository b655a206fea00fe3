//! AT Protocol Identity Resolver
//!
//! Fetches Bluesky profiles (DID + canonical handle) via the public Bluesky
//! API. All lookups are cached using a moka async cache.

mod error;
mod resolver;
mod types;

pub use error::ResolveError;
pub use resolver::IdentityResolver;
pub use types::Profile;
