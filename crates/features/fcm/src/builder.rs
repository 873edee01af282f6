use fcmkit_domain::{FcmOptions, Lights, NotificationType, Priority, Style, Visibility};
use serde_json::Value;
use tracing::{debug, trace};

/// Fluent builder for [`FcmOptions`].
///
/// Setters take `self` by value and hand it back, so calls chain in any order. Setting the
/// same option twice keeps the last value. No value is validated: out-of-range numbers and
/// undocumented enum strings are stored exactly as given.
///
/// [`FcmBuilder::build`] borrows the builder and returns a snapshot; the builder stays usable
/// and later setter calls never reach snapshots taken earlier.
///
/// # Example
/// ```rust
/// use fcmkit_fcm::FcmBuilder;
///
/// let options = FcmBuilder::new().collapse_key("promo").time_to_live(3600).priority("high").build();
/// assert_eq!(options.keys(), ["timeToLive", "collapseKey", "priority"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FcmBuilder {
    options: FcmOptions,
}

impl FcmBuilder {
    /// Creates a builder with nothing set.
    #[must_use = "Builder must be configured and built before use"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the message until the device becomes active.
    #[must_use]
    pub const fn delay_while_idle(mut self, delay_while_idle: bool) -> Self {
        self.options.delay_while_idle = Some(delay_while_idle);
        self
    }

    /// Seconds the gateway keeps the message while the device is offline.
    #[must_use]
    pub const fn time_to_live(mut self, seconds: u64) -> Self {
        self.options.time_to_live = Some(seconds);
        self
    }

    /// Groups messages; only the latest one per key is delivered.
    #[must_use]
    pub fn collapse_key(mut self, collapse_key: impl Into<String>) -> Self {
        self.options.collapse_key = Some(collapse_key.into());
        self
    }

    /// Custom data delivered with the notification.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<Value>) -> Self {
        self.options.payload = Some(payload.into());
        self
    }

    /// Device-group message sync.
    #[must_use]
    pub const fn sync(mut self, sync: bool) -> Self {
        self.options.sync = Some(sync);
        self
    }

    /// Sound asset played on arrival.
    #[must_use]
    pub fn sound(mut self, sound: impl Into<String>) -> Self {
        self.options.sound = Some(sound.into());
        self
    }

    #[must_use]
    pub fn interactive_category(mut self, category: impl Into<String>) -> Self {
        self.options.interactive_category = Some(category.into());
        self
    }

    /// Accepts a [`Priority`] or any string.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.options.priority = Some(priority.into());
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.options.style = Some(style);
        self
    }

    /// Accepts a [`Visibility`] or any string.
    #[must_use]
    pub fn visibility(mut self, visibility: impl Into<Visibility>) -> Self {
        self.options.visibility = Some(visibility.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.options.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn lights(mut self, lights: Lights) -> Self {
        self.options.lights = Some(lights);
        self
    }

    /// Sets the `type` key. Accepts a [`NotificationType`] or any string.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<NotificationType>) -> Self {
        self.options.kind = Some(kind.into());
        self
    }

    /// Same as [`FcmBuilder::kind`], under the wire name.
    #[must_use]
    pub fn r#type(self, kind: impl Into<NotificationType>) -> Self {
        self.kind(kind)
    }

    #[must_use]
    pub fn android_title(mut self, title: impl Into<String>) -> Self {
        self.options.android_title = Some(title.into());
        self
    }

    /// Notifications sharing this key may be stacked by the device.
    #[must_use]
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.options.group_id = Some(group_id.into());
        self
    }

    /// Applies every option set in `other`, each overwriting the current value.
    #[must_use]
    pub fn merge(mut self, other: FcmOptions) -> Self {
        debug!(keys = ?other.keys(), "Merging FCM options");
        self.options.merge(other);
        self
    }

    /// Returns a snapshot of everything set so far.
    #[must_use]
    pub fn build(&self) -> FcmOptions {
        trace!(fields = self.options.len(), "Built FCM options");
        self.options.clone()
    }
}

impl From<FcmOptions> for FcmBuilder {
    fn from(options: FcmOptions) -> Self {
        Self { options }
    }
}
