//! Error types shared by every module of the crate.

/// Errors raised while building a network, querying it, or allocating orders.
///
/// Configuration problems are reported before any graph is built; lookups of
/// nodes that do not exist are reported instead of silently returning an
/// unreachable distance.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("no distribution centers configured")]
    NoCenters,

    #[error("no delivery destinations configured")]
    NoDestinations,

    #[error("node name must not be empty")]
    EmptyNodeName,

    #[error("duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("invalid weight range: [{min}, {max}]")]
    InvalidWeightRange { min: u32, max: u32 },

    #[error("invalid edge weight {weight} between {from} and {to}")]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("invalid node id: {0}")]
    InvalidNodeId(usize),

    #[error("order {order_id} targets {node}, which is not a destination")]
    NotADestination { order_id: usize, node: String },

    #[error("duplicate order id: {0}")]
    DuplicateOrder(usize),

    #[error("duplicate vehicle id: {0}")]
    DuplicateVehicle(usize),

    #[error("invalid vehicle {id}: {reason}")]
    InvalidVehicle { id: usize, reason: String },

    #[error("invalid order {id}: {reason}")]
    InvalidOrder { id: usize, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, DeliveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DeliveryError::UnknownNode("Recife".into()).to_string(),
            "unknown node: Recife"
        );
        assert_eq!(
            DeliveryError::InvalidWeightRange { min: 9, max: 1 }.to_string(),
            "invalid weight range: [9, 1]"
        );
        assert_eq!(
            DeliveryError::NotADestination {
                order_id: 3,
                node: "Belém".into()
            }
            .to_string(),
            "order 3 targets Belém, which is not a destination"
        );
        assert_eq!(
            DeliveryError::Serialization("key must be a string".into()).to_string(),
            "serialization failed: key must be a string"
        );
    }
}
