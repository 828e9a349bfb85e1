//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// Prompt pinned when a submission is empty after trimming
pub const EMPTY_PROMPT: &str = "Enter a Pokemon name or number.";

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Lookup actions =====
        Action::LookupSubmit(query) => submit_lookup(state, &query),

        Action::LookupRetry => {
            let identifier = state.identifier.clone();
            submit_lookup(state, &identifier)
        }

        Action::LookupDidLoad { seq, card } => {
            if seq != state.lookup_seq {
                return DispatchResult::unchanged();
            }
            state.last_failure = None;
            state.sprite = None;
            let sprite_url = card.sprite_url.clone();
            state.card = DataResource::Loaded(card);
            match sprite_url {
                Some(url) => {
                    state.sprite_loading = true;
                    DispatchResult::changed_with(Effect::FetchSprite { seq, url })
                }
                None => {
                    state.sprite_loading = false;
                    DispatchResult::changed()
                }
            }
        }

        Action::LookupDidError { seq, failure } => {
            if seq != state.lookup_seq {
                return DispatchResult::unchanged();
            }
            state.card = DataResource::Failed(failure.to_string());
            state.last_failure = Some(failure);
            state.sprite = None;
            state.sprite_loading = false;
            DispatchResult::changed()
        }

        // ===== Sprite actions =====
        Action::SpriteDidLoad { seq, sprite } => {
            if seq != state.lookup_seq {
                return DispatchResult::unchanged();
            }
            state.sprite = Some(sprite);
            state.sprite_loading = false;
            DispatchResult::changed()
        }

        Action::SpriteDidError { seq, .. } => {
            // Missing artwork is cosmetic; the card stays up and the alt
            // text keeps the image's place
            if seq != state.lookup_seq {
                return DispatchResult::unchanged();
            }
            state.sprite_loading = false;
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_query.clear();
            state.prompt = None;
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_query.clear();
            state.prompt = None;
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query;
            state.prompt = None;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            if !query.trim().is_empty() {
                state.search_mode = false;
                state.search_query.clear();
            }
            submit_lookup(state, &query)
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.spinner_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Normalize and run a lookup. Empty input switches the card to Empty and
/// pins the prompt instead of touching the network.
fn submit_lookup(state: &mut AppState, query: &str) -> DispatchResult<Effect> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        state.card = DataResource::Empty;
        state.sprite = None;
        state.sprite_loading = false;
        state.prompt = Some(EMPTY_PROMPT.into());
        return DispatchResult::changed();
    }
    state.identifier = query.clone();
    state.lookup_seq += 1;
    state.card = DataResource::Loading;
    state.sprite = None;
    state.sprite_loading = false;
    state.last_failure = None;
    state.prompt = None;
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchPokemon {
        seq: state.lookup_seq,
        query,
    })
}
