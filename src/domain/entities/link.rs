//! Link entity representing a content-addressed destination.

/// A registered destination and the identifier derived from it.
///
/// The identifier is a digest of the destination, so two links with equal
/// destinations are the same link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub identifier: String,
    pub destination: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(identifier: String, destination: String) -> Self {
        Self {
            identifier,
            destination,
        }
    }
}
