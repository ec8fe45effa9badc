// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! A [`ToastSpec`] is what callers hand to the store; the store turns it into
//! a [`Notification`] by attaching an id and a creation instant. Neither is
//! mutated afterwards.

use super::id::ToastId;
use crate::config::DEFAULT_TOAST_DURATION_MS;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Visual flavour of a toast.
///
/// The store carries it through untouched; only the presentation layer
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 5] = [
        Variant::Default,
        Variant::Success,
        Variant::Error,
        Variant::Warning,
        Variant::Info,
    ];

    /// Stable lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
            Variant::Info => "info",
        }
    }
}

/// A labelled action attached to a toast.
///
/// `on_press` is emitted by the presentation layer when the user activates
/// the action. The store never looks at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<M> {
    label: String,
    on_press: M,
}

impl<M> Action<M> {
    pub fn new(label: impl Into<String>, on_press: M) -> Self {
        Self {
            label: label.into(),
            on_press,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn on_press(&self) -> &M {
        &self.on_press
    }
}

/// How long a toast stays before it expires on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// Use the store's default delay.
    #[default]
    Default,
    /// Expire after the given delay.
    After(Duration),
    /// Stay until removed explicitly.
    Persistent,
}

impl Lifetime {
    /// Builds a lifetime from a millisecond count, where `0` means persistent.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            Lifetime::Persistent
        } else {
            Lifetime::After(Duration::from_millis(millis))
        }
    }

    /// Resolves to a concrete delay, or `None` if the toast never expires.
    #[must_use]
    pub fn resolve(self, default: Duration) -> Option<Duration> {
        match self {
            Lifetime::Default => Some(default),
            Lifetime::After(duration) if duration.is_zero() => None,
            Lifetime::After(duration) => Some(duration),
            Lifetime::Persistent => None,
        }
    }

    /// Returns the delay in milliseconds, `Some(0)` for persistent toasts.
    #[must_use]
    pub fn as_millis(self) -> Option<u64> {
        match self {
            Lifetime::Default => None,
            Lifetime::After(duration) => {
                Some(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
            }
            Lifetime::Persistent => Some(0),
        }
    }
}

/// Default auto-dismiss delay applied to [`Lifetime::Default`].
#[must_use]
pub fn default_duration() -> Duration {
    Duration::from_millis(DEFAULT_TOAST_DURATION_MS)
}

/// Everything needed to create a toast, minus its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastSpec<M> {
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<Action<M>>,
    lifetime: Lifetime,
}

impl<M> Default for ToastSpec<M> {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            variant: Variant::Default,
            action: None,
            lifetime: Lifetime::Default,
        }
    }
}

impl<M> ToastSpec<M> {
    /// Creates an empty spec with the default variant and lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new().variant(Variant::Success).title(title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new().variant(Variant::Error).title(title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new().variant(Variant::Warning).title(title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new().variant(Variant::Info).title(title)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, on_press: M) -> Self {
        self.action = Some(Action::new(label, on_press));
        self
    }

    #[must_use]
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Sets an explicit auto-dismiss delay. A zero duration means persistent.
    #[must_use]
    pub fn duration(self, duration: Duration) -> Self {
        if duration.is_zero() {
            self.lifetime(Lifetime::Persistent)
        } else {
            self.lifetime(Lifetime::After(duration))
        }
    }

    /// Sets the auto-dismiss delay in milliseconds. `0` means persistent.
    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.lifetime(Lifetime::from_millis(millis))
    }

    /// Keeps the toast until it is removed explicitly.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.lifetime(Lifetime::Persistent)
    }

    #[must_use]
    pub fn lifetime_value(&self) -> Lifetime {
        self.lifetime
    }
}

/// A toast living in a store.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<M> {
    id: ToastId,
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<Action<M>>,
    lifetime: Lifetime,
    created_at: Instant,
}

impl<M> Notification<M> {
    pub(crate) fn from_spec(spec: ToastSpec<M>, created_at: Instant) -> Self {
        Self {
            id: ToastId::new(),
            title: spec.title,
            description: spec.description,
            variant: spec.variant,
            action: spec.action,
            lifetime: spec.lifetime,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action<M>> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Returns when this toast was added to its store.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_millis_is_persistent() {
        assert_eq!(Lifetime::from_millis(0), Lifetime::Persistent);
        assert_eq!(
            Lifetime::from_millis(250),
            Lifetime::After(Duration::from_millis(250))
        );
    }

    #[test]
    fn default_lifetime_resolves_to_store_default() {
        let default = Duration::from_millis(5000);
        assert_eq!(Lifetime::Default.resolve(default), Some(default));
        assert_eq!(Lifetime::Persistent.resolve(default), None);
        assert_eq!(Lifetime::After(Duration::ZERO).resolve(default), None);
    }

    #[test]
    fn default_duration_is_five_seconds() {
        assert_eq!(default_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn spec_builder_sets_fields() {
        let spec: ToastSpec<&str> = ToastSpec::new()
            .title("File deleted")
            .description("photo.jpg has been deleted.")
            .variant(Variant::Error)
            .action("Undo", "undo")
            .duration_ms(0);

        let notification = Notification::from_spec(spec, Instant::now());
        assert_eq!(notification.title(), Some("File deleted"));
        assert_eq!(notification.description(), Some("photo.jpg has been deleted."));
        assert_eq!(notification.variant(), Variant::Error);
        assert_eq!(notification.lifetime(), Lifetime::Persistent);

        let action = notification.action().expect("action should be set");
        assert_eq!(action.label(), "Undo");
        assert_eq!(*action.on_press(), "undo");
    }

    #[test]
    fn constructors_set_variant() {
        assert_eq!(ToastSpec::<()>::success("").variant, Variant::Success);
        assert_eq!(ToastSpec::<()>::error("").variant, Variant::Error);
        assert_eq!(ToastSpec::<()>::warning("").variant, Variant::Warning);
        assert_eq!(ToastSpec::<()>::info("").variant, Variant::Info);
        assert_eq!(ToastSpec::<()>::new().variant, Variant::Default);
    }

    #[test]
    fn variant_serializes_lowercase() {
        for variant in Variant::ALL {
            let json = serde_json::to_string(&variant).expect("serialize variant");
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }

    #[test]
    fn lifetime_millis_reporting() {
        assert_eq!(Lifetime::Default.as_millis(), None);
        assert_eq!(Lifetime::Persistent.as_millis(), Some(0));
        assert_eq!(Lifetime::from_millis(1200).as_millis(), Some(1200));
    }
}
