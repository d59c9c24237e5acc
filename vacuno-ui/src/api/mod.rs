//! Browser side of the API layer: the gloo-net transport and the configurable
//! base URL.

mod transport;

pub use transport::GlooTransport;
