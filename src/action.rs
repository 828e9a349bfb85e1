//! Actions with category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sprite::SpriteImage;
use crate::state::{LookupFailure, PokemonCard};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Lookup category =====
    /// Intent: look up a Pokemon by name or dex number (raw user text)
    LookupSubmit(String),

    /// Re-run the current identifier
    LookupRetry,

    /// Result: card data arrived for the tagged submission
    LookupDidLoad { seq: u64, card: PokemonCard },

    /// Result: the tagged submission failed
    LookupDidError { seq: u64, failure: LookupFailure },

    // ===== Sprite category =====
    /// Result: sprite decoded for the tagged submission
    SpriteDidLoad { seq: u64, sprite: SpriteImage },

    /// Result: sprite fetch or decode failed (cosmetic, card stays up)
    SpriteDidError { seq: u64, error: String },

    // ===== Search category =====
    /// Open the lookup overlay
    SearchOpen,

    /// Close the lookup overlay (cancel)
    SearchClose,

    /// Overlay query text changed
    SearchQueryChange(String),

    /// Submit the overlay query
    SearchQuerySubmit(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Periodic tick for the spinner
    Tick,

    /// Exit the application
    Quit,
}
