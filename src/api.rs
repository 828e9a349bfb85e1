//! PokeAPI client

use std::sync::OnceLock;

use serde::Deserialize;

use crate::state::{LookupFailure, PokemonCard};

const API_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u16,
    name: String,
    height: u16,
    weight: u16,
    types: Vec<PokemonTypeSlot>,
    sprites: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

/// Fetch one Pokemon by its normalized identifier (name or dex number).
/// One attempt, no caching; the caller decides what to do with failures.
pub async fn fetch_pokemon(identifier: &str) -> Result<PokemonCard, LookupFailure> {
    let url = format!("{API_BASE}/pokemon/{}/", urlencoding::encode(identifier));
    let response = http_client()
        .get(&url)
        .send()
        .await
        .map_err(transport_failure)?;
    if let Some(failure) = classify_status(response.status(), identifier) {
        return Err(failure);
    }
    let bytes = response.bytes().await.map_err(transport_failure)?;
    decode_card(&bytes)
}

/// Map a response status to a failure, or None when the lookup can proceed
fn classify_status(status: reqwest::StatusCode, identifier: &str) -> Option<LookupFailure> {
    if status == reqwest::StatusCode::NOT_FOUND {
        return Some(LookupFailure::NotFound {
            query: identifier.to_string(),
        });
    }
    if !status.is_success() {
        return Some(LookupFailure::Api {
            status: status.as_u16(),
        });
    }
    None
}

/// Decode and validate a Pokemon response body into a card
pub fn decode_card(bytes: &[u8]) -> Result<PokemonCard, LookupFailure> {
    let response: PokemonResponse =
        serde_json::from_slice(bytes).map_err(|err| LookupFailure::Decode {
            detail: err.to_string(),
        })?;
    card_from_response(response)
}

fn card_from_response(response: PokemonResponse) -> Result<PokemonCard, LookupFailure> {
    if response.id == 0 {
        return Err(LookupFailure::Decode {
            detail: "dex number must be positive".into(),
        });
    }
    if response.types.is_empty() {
        return Err(LookupFailure::Decode {
            detail: "pokemon has no types".into(),
        });
    }
    let types = response
        .types
        .into_iter()
        .map(|slot| slot.type_info.name)
        .collect();
    let sprite_url =
        pointer_string(&response.sprites, "/front_default").filter(|url| !url.is_empty());
    Ok(PokemonCard {
        id: response.id,
        name: response.name,
        height: response.height,
        weight: response.weight,
        types,
        sprite_url,
    })
}

fn transport_failure(err: reqwest::Error) -> LookupFailure {
    LookupFailure::Transport {
        detail: err.to_string(),
    }
}

/// Fetch raw bytes (sprite images)
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let response = response.error_for_status().map_err(|err| err.to_string())?;
    let bytes = response
        .bytes()
        .await
        .map_err(|err| err.to_string())?
        .to_vec();
    Ok(bytes)
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
