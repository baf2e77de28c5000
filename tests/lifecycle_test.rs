//! Cog lifecycle integration tests
//! Run with: cargo test --test lifecycle_test

mod common;

use common::{ensure_init, registry_of, SlowCog, TestCog};

use cogbot::application::services::LifecycleManager;
use cogbot::domain::entities::{LifecycleOp, OutcomeKind};
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn load_transitions_to_loaded_then_reports_already_in_state() {
    ensure_init();
    let registry = registry_of(vec![Arc::new(TestCog::new("beta"))]);
    let lifecycle = LifecycleManager::new(registry.clone());

    let outcomes = lifecycle
        .execute(LifecycleOp::Load, &names(&["beta"]))
        .await;
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].kind, OutcomeKind::Success);
    assert!(registry.lock().await.is_loaded("beta"));

    let outcomes = lifecycle
        .execute(LifecycleOp::Load, &names(&["beta"]))
        .await;
    assert_eq!(outcomes[0].kind, OutcomeKind::AlreadyInState);
    assert!(registry.lock().await.is_loaded("beta"));
}

#[tokio::test]
async fn unload_of_unloaded_cog_reports_already_in_state() {
    ensure_init();
    let registry = registry_of(vec![Arc::new(TestCog::new("beta"))]);
    let lifecycle = LifecycleManager::new(registry.clone());

    let outcomes = lifecycle
        .execute(LifecycleOp::Unload, &names(&["beta"]))
        .await;
    assert_eq!(outcomes[0].kind, OutcomeKind::AlreadyInState);

    lifecycle.execute(LifecycleOp::Load, &names(&["beta"])).await;
    let outcomes = lifecycle
        .execute(LifecycleOp::Unload, &names(&["beta"]))
        .await;
    assert_eq!(outcomes[0].kind, OutcomeKind::Success);
    assert!(!registry.lock().await.is_loaded("beta"));
}

#[tokio::test]
async fn reload_is_one_outcome_covering_teardown_and_setup() {
    ensure_init();
    let cog = TestCog::new("beta");
    let (setups, teardowns) = cog.counters();
    let registry = registry_of(vec![Arc::new(cog)]);
    let lifecycle = LifecycleManager::new(registry.clone());

    lifecycle.execute(LifecycleOp::Load, &names(&["beta"])).await;
    let outcomes = lifecycle
        .execute(LifecycleOp::Reload, &names(&["beta"]))
        .await;

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].kind, OutcomeKind::Success);
    assert_eq!(setups.load(Ordering::SeqCst), 2);
    assert_eq!(teardowns.load(Ordering::SeqCst), 1);
    assert!(registry.lock().await.is_loaded("beta"));
}

#[tokio::test]
async fn reload_of_unloaded_or_unknown_cog_is_not_found() {
    ensure_init();
    let cog = TestCog::new("beta");
    let (setups, teardowns) = cog.counters();
    let registry = registry_of(vec![Arc::new(cog)]);
    let lifecycle = LifecycleManager::new(registry.clone());

    let outcomes = lifecycle
        .execute(LifecycleOp::Reload, &names(&["beta", "ghost"]))
        .await;
    assert_eq!(outcomes[0].kind, OutcomeKind::NotFound);
    assert_eq!(outcomes[1].kind, OutcomeKind::NotFound);
    assert_eq!(setups.load(Ordering::SeqCst), 0);
    assert_eq!(teardowns.load(Ordering::SeqCst), 0);
    assert!(!registry.lock().await.is_loaded("beta"));
}

#[tokio::test]
async fn empty_invocation_is_a_noop() {
    ensure_init();
    let registry = registry_of(vec![Arc::new(TestCog::new("beta"))]);
    let lifecycle = LifecycleManager::new(registry.clone());

    let outcomes = lifecycle.execute(LifecycleOp::Load, &[]).await;
    assert!(outcomes.is_empty());
    assert!(registry.lock().await.loaded_names().is_empty());
}

#[tokio::test]
async fn per_name_outcomes_are_independent_and_ordered() {
    ensure_init();
    let registry = registry_of(vec![Arc::new(TestCog::new("beta"))]);
    let lifecycle = LifecycleManager::new(registry.clone());

    // alpha is unknown; beta must still load
    let outcomes = lifecycle
        .execute(LifecycleOp::Load, &names(&["alpha", "beta"]))
        .await;

    assert_eq!(outcomes[0].cog, "alpha");
    assert_eq!(outcomes[0].kind, OutcomeKind::NotFound);
    assert_eq!(outcomes[1].cog, "beta");
    assert_eq!(outcomes[1].kind, OutcomeKind::Success);

    let registry = registry.lock().await;
    assert!(registry.is_loaded("beta"));
    assert!(!registry.contains("alpha"));
}

#[tokio::test]
async fn setup_failure_reports_error_and_leaves_registry_unchanged() {
    ensure_init();
    let registry = registry_of(vec![
        Arc::new(TestCog::failing("broken")),
        Arc::new(TestCog::new("beta")),
    ]);
    let lifecycle = LifecycleManager::new(registry.clone());

    let outcomes = lifecycle
        .execute(LifecycleOp::Load, &names(&["broken", "beta"]))
        .await;

    match &outcomes[0].kind {
        OutcomeKind::Error(reason) => assert!(reason.contains("deliberate failure")),
        other => panic!("expected Error, got {:?}", other),
    }
    assert_eq!(outcomes[1].kind, OutcomeKind::Success);

    let registry = registry.lock().await;
    assert!(!registry.is_loaded("broken"));
    assert!(registry.is_loaded("beta"));
}

#[tokio::test]
async fn shutdown_grace_period_bounds_teardown() {
    ensure_init();
    let registry = registry_of(vec![Arc::new(SlowCog)]);
    let lifecycle = LifecycleManager::new(registry.clone());

    lifecycle.execute(LifecycleOp::Load, &names(&["slow"])).await;

    // Mirrors the shutdown path: teardown work past the grace period
    // is abandoned rather than waited on.
    let result = tokio::time::timeout(
        std::time::Duration::from_millis(100),
        lifecycle.unload_all(),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn unload_all_unloads_every_loaded_cog() {
    ensure_init();
    let registry = registry_of(vec![
        Arc::new(TestCog::new("alpha")),
        Arc::new(TestCog::new("beta")),
    ]);
    let lifecycle = LifecycleManager::new(registry.clone());

    lifecycle
        .execute(LifecycleOp::Load, &names(&["alpha", "beta"]))
        .await;
    let outcomes = lifecycle.unload_all().await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.kind == OutcomeKind::Success));
    assert!(registry.lock().await.loaded_names().is_empty());
}
