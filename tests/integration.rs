// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, Config};
use iced_toast::diagnostics::{DiagnosticEventKind, DiagnosticsCollector, RemovalReason};
use iced_toast::error::ScopeError;
use iced_toast::i18n::fluent::I18n;
use iced_toast::toast::{Dispatch, ManualClock, Provider, Store, ToastSpec, Variant};
use std::time::Duration;
use tempfile::tempdir;

fn provider<M: Clone>() -> (Provider<M>, ManualClock) {
    let clock = ManualClock::new();
    (Provider::with_store(Store::with_clock(clock.clone())), clock)
}

#[test]
fn default_toast_expires_after_five_seconds() {
    let (provider, clock) = provider::<()>();
    let toasts = provider.dispatch();

    let id = toasts.add(ToastSpec::success("Saved").description("All changes stored."));
    assert_eq!(toasts.toasts().ids(), vec![id]);

    clock.advance_ms(4_999);
    assert!(toasts.expire_due().is_empty());
    assert_eq!(toasts.toasts().len(), 1);

    clock.advance_ms(1);
    assert_eq!(toasts.expire_due(), vec![id]);
    assert!(toasts.toasts().is_empty());
}

#[test]
fn mixed_lifetimes_expire_independently() {
    let (provider, clock) = provider::<()>();
    let toasts = provider.dispatch();

    let quick = toasts.add(ToastSpec::new().title("quick").duration_ms(1_000));
    let sticky = toasts.add(ToastSpec::new().title("sticky").duration_ms(0));
    let normal = toasts.add(ToastSpec::new().title("normal"));
    assert_eq!(toasts.toasts().ids(), vec![quick, sticky, normal]);

    clock.advance_ms(1_000);
    assert_eq!(toasts.expire_due(), vec![quick]);
    assert_eq!(toasts.toasts().ids(), vec![sticky, normal]);

    clock.advance_ms(4_000);
    assert_eq!(toasts.expire_due(), vec![normal]);
    assert_eq!(toasts.toasts().ids(), vec![sticky]);

    clock.advance(Duration::from_secs(3_600));
    assert!(toasts.expire_due().is_empty());
    assert_eq!(toasts.toasts().ids(), vec![sticky]);
}

#[test]
fn manual_dismissal_before_expiry_is_final() {
    let (provider, clock) = provider::<()>();
    let toasts = provider.dispatch();

    let id = toasts.add(ToastSpec::new().title("bye"));
    assert!(toasts.remove(id));
    assert!(!toasts.remove(id));

    let other = toasts.add(ToastSpec::new().title("later").duration_ms(10_000));
    clock.advance_ms(5_000);
    assert!(toasts.expire_due().is_empty());
    assert_eq!(toasts.toasts().ids(), vec![other]);
}

#[test]
fn action_payload_is_carried_untouched() {
    #[derive(Debug, Clone, PartialEq)]
    enum Command {
        Retry(u32),
    }

    let (provider, _clock) = provider::<Command>();
    let toasts = provider.dispatch();
    toasts.add(
        ToastSpec::error("Upload failed")
            .action("Retry", Command::Retry(3))
            .persistent(),
    );

    let snapshot = toasts.toasts();
    let action = snapshot[0].action().expect("action is kept");
    assert_eq!(snapshot[0].variant(), Variant::Error);
    assert_eq!(action.label(), "Retry");
    assert_eq!(action.on_press(), &Command::Retry(3));
}

#[test]
fn snapshots_are_stable_across_mutations() {
    let (provider, _clock) = provider::<()>();
    let toasts = provider.dispatch();
    let a = toasts.add(ToastSpec::new().title("A"));

    let before = toasts.toasts();
    let b = toasts.add(ToastSpec::new().title("B"));
    toasts.remove(a);

    assert_eq!(before.ids(), vec![a]);
    assert_eq!(toasts.toasts().ids(), vec![b]);
}

#[test]
fn dispatch_outlives_provider_only_as_an_error() {
    let (provider, _clock) = provider::<()>();
    let toasts: Dispatch<()> = provider.dispatch();
    drop(provider);

    assert_eq!(
        toasts.try_add(ToastSpec::new().title("late")),
        Err(ScopeError::OutsideProvider)
    );
    assert_eq!(toasts.try_expire_due(), Err(ScopeError::OutsideProvider));
}

#[test]
#[should_panic(expected = "outside of an active toast provider")]
fn detached_dispatch_is_fatal() {
    Dispatch::<()>::detached().toasts();
}

#[test]
fn lifecycle_is_recorded_in_diagnostics_report() {
    let mut collector = DiagnosticsCollector::new(100);
    let (mut provider, clock) = provider::<()>();
    provider.set_diagnostics(collector.handle());
    let toasts = provider.dispatch();

    let dismissed = toasts.add(ToastSpec::new().title("dismissed"));
    let expired = toasts.add(ToastSpec::new().title("expired").duration_ms(100));
    toasts.remove(dismissed);
    clock.advance_ms(100);
    toasts.expire_due();
    collector.process_pending();

    let removals: Vec<_> = collector
        .iter()
        .filter_map(|event| match &event.kind {
            DiagnosticEventKind::ToastRemoved { id, reason } => Some((*id, *reason)),
            _ => None,
        })
        .collect();
    assert_eq!(
        removals,
        vec![
            (dismissed, RemovalReason::Dismissed),
            (expired, RemovalReason::Expired)
        ]
    );

    let dir = tempdir().expect("Failed to create temporary directory");
    let path = collector
        .export_to_file(dir.path().join("report.json"))
        .expect("Failed to export report");
    let json = std::fs::read_to_string(path).expect("Failed to read report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("report is valid json");
    assert_eq!(value["metadata"]["event_count"], 4);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("toast-dismiss"), "Dismiss");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("toast-dismiss"), "Fermer");
}

#[test]
fn configured_default_duration_drives_store() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[toasts]\ndefault_duration_ms = 2000\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let clock = ManualClock::new();
    let provider: Provider<()> = Provider::with_store(
        Store::with_clock(clock.clone()).with_default_duration(config.default_toast_duration()),
    );
    let toasts = provider.dispatch();
    toasts.add(ToastSpec::info("configured"));

    clock.advance_ms(2_000);
    assert_eq!(toasts.expire_due().len(), 1);
}
