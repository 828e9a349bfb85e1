//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions. Each carries the
/// sequence number of the submission it belongs to so the completion
/// actions can be matched against the newest one.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch card data for a normalized identifier
    FetchPokemon { seq: u64, query: String },
    /// Fetch and decode the card sprite
    FetchSprite { seq: u64, url: String },
}
