//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::sprite::SpriteImage;

/// A Pokemon from PokeAPI, reduced to the fields the card shows
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonCard {
    /// National dex number (the API never issues 0)
    pub id: u16,
    /// Name exactly as the API returns it (lowercase)
    pub name: String,
    /// Height in decimeters
    pub height: u16,
    /// Weight in hectograms
    pub weight: u16,
    /// Type names in slot order, always at least one
    pub types: Vec<String>,
    /// Default front sprite URL, if the API has one
    pub sprite_url: Option<String>,
}

/// Why a lookup failed. The card panel shows one uniform message for all
/// of these; the kinds stay apart for the debug overlay and action log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LookupFailure {
    /// The API answered 404: no Pokemon matches the identifier
    NotFound { query: String },
    /// Any other non-success HTTP status
    Api { status: u16 },
    /// The request never produced a response (connection, DNS, ...)
    Transport { detail: String },
    /// The response body did not decode into a valid Pokemon
    Decode { detail: String },
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupFailure::NotFound { query } => {
                write!(f, "No Pokemon matches '{}'", query)
            }
            LookupFailure::Api { status } => {
                write!(f, "PokeAPI returned status {}", status)
            }
            LookupFailure::Transport { detail } => {
                write!(f, "Request failed: {}", detail)
            }
            LookupFailure::Decode { detail } => {
                write!(f, "Could not decode Pokemon data: {}", detail)
            }
        }
    }
}

impl std::error::Error for LookupFailure {}

/// Identifier looked up when the app starts with no arguments
pub const DEFAULT_QUERY: &str = "pikachu";

/// Interval for the loading spinner animation
pub const SPINNER_TICK_MS: u64 = 120;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Lookup (visible in debug) ---
    /// Identifier of the current lookup, trimmed and lowercased
    #[debug(section = "Lookup", label = "Identifier", debug_fmt)]
    pub identifier: String,

    /// Card lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Lookup", label = "Card", debug_fmt)]
    pub card: DataResource<PokemonCard>,

    /// Sequence number of the newest submission; responses tagged with an
    /// older number are discarded
    #[debug(section = "Lookup", label = "Sequence", debug_fmt)]
    pub lookup_seq: u64,

    /// Kind of the most recent failure (the UI shows a uniform message)
    #[debug(section = "Lookup", label = "Last failure", debug_fmt)]
    pub last_failure: Option<LookupFailure>,

    // --- Sprite ---
    /// Decoded sprite for the loaded card
    #[debug(skip)]
    pub sprite: Option<SpriteImage>,

    /// Whether a sprite fetch is in flight
    #[debug(section = "Sprite", label = "Loading")]
    pub sprite_loading: bool,

    // --- Animation internals (skipped) ---
    /// Spinner frame counter
    #[debug(skip)]
    pub tick_count: u32,

    // --- Search overlay (skipped) ---
    /// Whether the search overlay is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Current overlay query text
    #[debug(skip)]
    pub search_query: String,

    /// Prompt pinned after an empty submission, cleared on the next input
    #[debug(skip)]
    pub prompt: Option<String>,
}

impl AppState {
    /// Create state pointed at the given identifier, nothing fetched yet
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            card: DataResource::Empty,
            lookup_seq: 0,
            last_failure: None,
            sprite: None,
            sprite_loading: false,
            tick_count: 0,
            search_mode: false,
            search_query: String::new(),
            prompt: None,
        }
    }

    /// The spinner runs while the card or its sprite is being fetched
    pub fn spinner_active(&self) -> bool {
        self.card.is_loading() || self.sprite_loading
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}
