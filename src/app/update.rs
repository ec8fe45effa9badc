// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the gallery and the toast overlay.
//!
//! Handlers talk to the toast store only through a [`Dispatch`] handle, the
//! same way any other consumer of the provider would.

use super::{GalleryAction, Message};
use crate::diagnostics::{DiagnosticsHandle, UserAction};
use crate::i18n::fluent::I18n;
use crate::toast::{Dispatch, ToastSpec, Variant};
use crate::ui::{gallery, toasts};
use iced::Task;
use std::time::Duration;

/// Number of toasts in the "multiple" burst.
pub const MULTIPLE_TOAST_COUNT: usize = 3;

/// Delay between two toasts of the "multiple" burst.
pub const MULTIPLE_TOAST_STAGGER: Duration = Duration::from_millis(500);

/// Explicit delay of the "Copy link" example toast.
pub const COPY_LINK_TOAST_DURATION_MS: u64 = 3000;

/// Mutable state the handlers work on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub dispatch: &'a Dispatch<GalleryAction>,
    pub diagnostics: &'a DiagnosticsHandle,
}

/// Handles a gallery button press.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::Show(variant) => {
            ctx.diagnostics.log_action(UserAction::ShowToast { variant });
            ctx.dispatch.add(variant_toast(ctx.i18n, variant));
            Task::none()
        }
        gallery::Message::ShowWithAction => {
            ctx.diagnostics.log_action(UserAction::ShowToastWithAction);
            ctx.dispatch.add(
                ToastSpec::new()
                    .title(ctx.i18n.tr("toast-action-title"))
                    .description(ctx.i18n.tr("toast-action-description"))
                    .action(ctx.i18n.tr("toast-action-label"), GalleryAction::Undo),
            );
            Task::none()
        }
        gallery::Message::ShowPersistent => {
            ctx.diagnostics.log_action(UserAction::ShowPersistentToast);
            ctx.dispatch.add(
                ToastSpec::info(ctx.i18n.tr("toast-persistent-title"))
                    .description(ctx.i18n.tr("toast-persistent-description"))
                    .persistent(),
            );
            Task::none()
        }
        gallery::Message::ShowMultiple => {
            ctx.diagnostics.log_action(UserAction::ShowMultipleToasts);
            ctx.dispatch.add(staggered_toast(ctx.i18n, 1));

            Task::batch((2..=MULTIPLE_TOAST_COUNT).map(|index| {
                let delay = MULTIPLE_TOAST_STAGGER * (index as u32 - 1);
                // The timer is created on the executor, not in `update`.
                Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
                    Message::ShowStaggered(index)
                })
            }))
        }
        gallery::Message::ShowExample(example) => {
            ctx.diagnostics.log_action(UserAction::ShowExample {
                name: example.as_str().to_string(),
            });
            ctx.dispatch.add(example_toast(ctx.i18n, example));
            Task::none()
        }
        // Handled by the application, which owns the provider.
        gallery::Message::DismissAll => Task::none(),
    }
}

/// Adds the delayed toast `index` of the "multiple" burst.
pub fn handle_staggered(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    // The provider may have ended while the delay was running.
    let _ = ctx.dispatch.try_add(staggered_toast(ctx.i18n, index));
    Task::none()
}

/// Handles a press on a toast's dismiss or action button.
///
/// An action leaves its toast in place; only the dismiss button and the
/// expiry timer remove it.
pub fn handle_toast_message(
    ctx: &mut UpdateContext<'_>,
    message: toasts::Message<GalleryAction>,
) -> Task<Message> {
    match message {
        toasts::Message::Dismiss(id) => {
            ctx.dispatch.remove(id);
        }
        toasts::Message::Action(id, action) => {
            ctx.diagnostics
                .log_action(UserAction::PressToastAction { id });
            run_action(ctx, action);
        }
    }
    Task::none()
}

fn run_action(ctx: &mut UpdateContext<'_>, action: GalleryAction) {
    match action {
        GalleryAction::Undo => {
            ctx.dispatch.add(
                ToastSpec::info(ctx.i18n.tr("toast-undo-title"))
                    .description(ctx.i18n.tr("toast-undo-description")),
            );
        }
        GalleryAction::RestoreItem => {
            ctx.dispatch.add(
                ToastSpec::info(ctx.i18n.tr("toast-restore-item-title"))
                    .description(ctx.i18n.tr("toast-restore-item-description")),
            );
        }
        // The gallery has no preferences screen; the press is only recorded.
        GalleryAction::OpenPreferences => {}
    }
}

/// Builds the toast of a gallery example.
#[must_use]
pub fn example_toast(i18n: &I18n, example: gallery::Example) -> ToastSpec<GalleryAction> {
    let prefix = format!("toast-{}", example.as_str());
    let spec = ToastSpec::new()
        .title(i18n.tr(&format!("{prefix}-title")))
        .description(i18n.tr(&format!("{prefix}-description")));

    match example {
        gallery::Example::SaveChanges => spec.variant(Variant::Success),
        gallery::Example::DeleteItem => spec
            .variant(Variant::Error)
            .action(i18n.tr("toast-action-label"), GalleryAction::RestoreItem),
        gallery::Example::CopyLink => spec.duration_ms(COPY_LINK_TOAST_DURATION_MS),
        gallery::Example::Subscribe => spec
            .variant(Variant::Success)
            .action(i18n.tr("toast-preferences-label"), GalleryAction::OpenPreferences),
    }
}

/// Builds the sample toast shown by a variant button.
#[must_use]
pub fn variant_toast(i18n: &I18n, variant: Variant) -> ToastSpec<GalleryAction> {
    let prefix = format!("toast-{}", variant.as_str());
    ToastSpec::new()
        .variant(variant)
        .title(i18n.tr(&format!("{prefix}-title")))
        .description(i18n.tr(&format!("{prefix}-description")))
}

/// Builds toast `index` (from 1) of the "multiple" burst.
#[must_use]
pub fn staggered_toast(i18n: &I18n, index: usize) -> ToastSpec<GalleryAction> {
    let (title_key, variant) = match index {
        1 => ("toast-multiple-first", Variant::Success),
        2 => ("toast-multiple-second", Variant::Info),
        _ => ("toast-multiple-third", Variant::Warning),
    };
    let index = index.to_string();
    ToastSpec::new().variant(variant).title(i18n.tr(title_key)).description(
        i18n.tr_with_args("toast-multiple-description", &[("index", index.as_str())]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{ManualClock, Store};

    fn store() -> Store<GalleryAction> {
        Store::with_clock(ManualClock::new())
    }

    #[test]
    fn every_variant_toast_is_translated() {
        let i18n = I18n::default();
        let mut store = store();
        for variant in Variant::ALL {
            let id = store.add(variant_toast(&i18n, variant));
            let toast = store.get(id).expect("toast was just added");
            assert_eq!(toast.variant(), variant);
            let title = toast.title().unwrap_or_default();
            assert!(!title.starts_with("MISSING:"), "{title}");
        }
    }

    #[test]
    fn staggered_toasts_cycle_through_variants() {
        let i18n = I18n::default();
        let mut store = store();
        for index in 1..=MULTIPLE_TOAST_COUNT {
            store.add(staggered_toast(&i18n, index));
        }
        let variants: Vec<Variant> = store.iter().map(|toast| toast.variant()).collect();
        assert_eq!(variants, vec![Variant::Success, Variant::Info, Variant::Warning]);
    }

    #[test]
    fn examples_are_translated_and_styled() {
        let i18n = I18n::default();
        let mut store = store();
        for example in gallery::Example::ALL {
            let id = store.add(example_toast(&i18n, example));
            let toast = store.get(id).expect("toast was just added");
            let title = toast.title().unwrap_or_default();
            assert!(!title.starts_with("MISSING:"), "{title}");
        }

        let delete = store.add(example_toast(&i18n, gallery::Example::DeleteItem));
        let toast = store.get(delete).expect("toast was just added");
        assert_eq!(toast.variant(), Variant::Error);
        assert_eq!(
            toast.action().map(|action| *action.on_press()),
            Some(GalleryAction::RestoreItem)
        );
    }

    #[test]
    fn staggered_toasts_are_numbered() {
        let i18n = I18n::default();
        let mut store = store();
        let id = store.add(staggered_toast(&i18n, 2));
        let description = store
            .get(id)
            .and_then(|toast| toast.description())
            .unwrap_or_default();
        assert!(description.contains('2'), "{description}");
    }
}
