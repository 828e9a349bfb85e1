//! Integration tests using EffectStoreTestHarness

use dexcard::{
    action::Action,
    components::{CardBody, CardBodyProps, CardDisplay, CardDisplayProps, Component},
    effect::Effect,
    reducer::{EMPTY_PROMPT, reducer},
    sprite::SpriteImage,
    state::{AppState, LookupFailure, PokemonCard},
};
use tui_dispatch::NumericComponentId;
use tui_dispatch::testing::*;

const SPRITE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png";

fn pikachu() -> PokemonCard {
    PokemonCard {
        id: 25,
        name: "pikachu".into(),
        height: 4,
        weight: 60,
        types: vec!["electric".into()],
        sprite_url: None,
    }
}

fn pikachu_with_sprite() -> PokemonCard {
    PokemonCard {
        sprite_url: Some(SPRITE_URL.into()),
        ..pikachu()
    }
}

fn test_sprite() -> SpriteImage {
    SpriteImage {
        payload: "aGVsbG8=".into(),
        width: 96,
        height: 96,
    }
}

// ============================================================================
// Lookup flows
// ============================================================================

#[test]
fn test_lookup_flow_with_harness() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    harness.assert_state(|s| s.card.is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchPokemon { seq: 1, query } if query == "pikachu"),
    );

    // Simulate async completion
    harness.complete_action(Action::LookupDidLoad {
        seq: 1,
        card: pikachu(),
    });
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1, "Should have processed 1 action");
    assert_eq!(changed, 1, "Action should have changed state");

    harness.assert_state(|s| s.card.is_loaded());
    harness.assert_state(|s| s.card.data().unwrap().name == "pikachu");
}

#[test]
fn test_lookup_error_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("missingno".into()));
    harness.assert_state(|s| s.card.is_loading());

    harness.complete_action(Action::LookupDidError {
        seq: 1,
        failure: LookupFailure::NotFound {
            query: "missingno".into(),
        },
    });
    harness.process_emitted();

    harness.assert_state(|s| s.card.is_failed());
    harness.assert_state(|s| s.card.error() == Some("No Pokemon matches 'missingno'"));
    harness.assert_state(|s| {
        matches!(s.last_failure, Some(LookupFailure::NotFound { .. }))
    });
}

#[test]
fn test_stale_response_discarded() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    harness.dispatch_collect(Action::LookupSubmit("mew".into()));
    harness.drain_effects();

    // The first submission's response arrives after the second went out
    harness.complete_action(Action::LookupDidLoad {
        seq: 1,
        card: pikachu(),
    });
    let (changed, total) = harness.process_emitted();
    assert_eq!(total, 1);
    assert_eq!(changed, 0, "Stale response must not change state");
    harness.assert_state(|s| s.card.is_loading());

    harness.complete_action(Action::LookupDidLoad {
        seq: 2,
        card: PokemonCard {
            id: 151,
            name: "mew".into(),
            height: 4,
            weight: 40,
            types: vec!["psychic".into()],
            sprite_url: None,
        },
    });
    harness.process_emitted();
    harness.assert_state(|s| s.card.data().unwrap().name == "mew");
}

#[test]
fn test_empty_submission_has_no_effects() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("  ".into()));

    let effects = harness.drain_effects();
    effects.effects_empty();
    harness.assert_state(|s| s.card.is_empty());
    harness.assert_state(|s| s.prompt.as_deref() == Some(EMPTY_PROMPT));
}

// ============================================================================
// Sprite flows
// ============================================================================

#[test]
fn test_sprite_follows_card() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    harness.drain_effects();

    harness.dispatch_collect(Action::LookupDidLoad {
        seq: 1,
        card: pikachu_with_sprite(),
    });
    harness.assert_state(|s| s.sprite_loading);

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchSprite { seq: 1, url } if url == SPRITE_URL),
    );

    harness.dispatch_collect(Action::SpriteDidLoad {
        seq: 1,
        sprite: test_sprite(),
    });
    harness.assert_state(|s| s.sprite.is_some());
    harness.assert_state(|s| !s.sprite_loading);
}

#[test]
fn test_sprite_error_keeps_card() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    harness.drain_effects();
    harness.dispatch_collect(Action::LookupDidLoad {
        seq: 1,
        card: pikachu_with_sprite(),
    });
    harness.drain_effects();

    harness.dispatch_collect(Action::SpriteDidError {
        seq: 1,
        error: "unsupported image format".into(),
    });

    // The card stays up; only the artwork is missing
    harness.assert_state(|s| s.card.is_loaded());
    harness.assert_state(|s| s.sprite.is_none());
    harness.assert_state(|s| !s.sprite_loading);
}

#[test]
fn test_card_without_artwork_skips_sprite_fetch() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    harness.drain_effects();

    harness.dispatch_collect(Action::LookupDidLoad {
        seq: 1,
        card: pikachu(),
    });

    let effects = harness.drain_effects();
    effects.effects_empty();
    harness.assert_state(|s| !s.sprite_loading);
}

// ============================================================================
// Search overlay flows
// ============================================================================

#[test]
fn test_search_overlay_round_trip() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchOpen);
    harness.assert_state(|s| s.search_mode);

    harness.dispatch_collect(Action::SearchQueryChange("mew".into()));
    harness.assert_state(|s| s.search_query == "mew");

    harness.dispatch_collect(Action::SearchQuerySubmit("mew".into()));
    harness.assert_state(|s| !s.search_mode);
    harness.assert_state(|s| s.card.is_loading());

    let effects = harness.drain_effects();
    effects
        .effects_first_matches(|e| matches!(e, Effect::FetchPokemon { query, .. } if query == "mew"));
}

#[test]
fn test_search_empty_submit_keeps_overlay_open() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchOpen);
    harness.dispatch_collect(Action::SearchQuerySubmit("   ".into()));

    let effects = harness.drain_effects();
    effects.effects_empty();
    harness.assert_state(|s| s.search_mode);
    harness.assert_state(|s| s.prompt.is_some());
}

// ============================================================================
// Component + store integration
// ============================================================================

#[test]
fn test_keyboard_triggers_retry() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = CardDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("r", |state, event| {
        let props = CardDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::LookupRetry);

    harness.dispatch_collect(Action::LookupRetry);
    harness.assert_state(|s| s.card.is_loading());

    let effects = harness.drain_effects();
    effects.effects_first_matches(|e| matches!(e, Effect::FetchPokemon { .. }));
}

// ============================================================================
// Render through the store
// ============================================================================

#[test]
fn test_render_after_lookup_completes() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = CardBody;

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    harness.dispatch_collect(Action::LookupDidLoad {
        seq: 1,
        card: pikachu(),
    });

    let output = harness.render_plain(60, 24, |frame, area, state| {
        let props = CardBodyProps { state };
        component.render(frame, area, props);
    });

    assert!(
        output.contains("Pikachu") && output.contains("#025"),
        "Loaded card should be visible in output:\n{}",
        output
    );
}

// ============================================================================
// Spinner gating
// ============================================================================

#[test]
fn test_tick_only_animates_while_loading() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    let results = harness.dispatch_all([Action::Tick]);
    assert_eq!(results, vec![false], "Idle ticks should be no-ops");

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));
    let results = harness.dispatch_all([Action::Tick, Action::Tick]);
    assert_eq!(results, vec![true, true]);
    harness.assert_state(|s| s.tick_count == 2);
}

// ============================================================================
// Async simulation
// ============================================================================

#[test]
fn test_multiple_async_completions() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::LookupSubmit("pikachu".into()));

    harness.complete_action(Action::LookupDidLoad {
        seq: 1,
        card: pikachu(),
    });
    harness.complete_action(Action::SearchOpen);

    let (changed, total) = harness.process_emitted();
    assert_eq!(total, 2);
    assert_eq!(changed, 2);

    harness.assert_state(|s| s.card.is_loaded());
    harness.assert_state(|s| s.search_mode);
}
