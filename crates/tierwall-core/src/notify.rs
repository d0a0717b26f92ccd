// crates/tierwall-core/src/notify.rs
// ============================================================================
// Module: Tierwall Upgrade Notices
// Description: Upgrade notice records and fire-and-forget delivery sinks.
// Purpose: Route denial notifications through an injected seam.
// Dependencies: serde, std
// ============================================================================

//! ## Overview
//! When an access check denies, hosts surface an [`UpgradeNotice`] to the
//! user. Delivery goes through the [`NoticeSink`] seam so the core stays
//! free of UI and I/O concerns. Publishing is fire-and-forget: sinks must
//! not block and must swallow downstream failures, so a denial can never
//! turn into a crash or a stall.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::mpsc::Sender;

use serde::Deserialize;
use serde::Serialize;

use crate::core::feature::FeatureKey;
use crate::core::tier::Tier;

// ============================================================================
// SECTION: Upgrade Notice
// ============================================================================

/// User-facing notice emitted when an access check denies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeNotice {
    /// Tier required to unlock the surface.
    pub required: Tier,
    /// Feature that triggered the notice, when known.
    pub feature: Option<FeatureKey>,
}

impl UpgradeNotice {
    /// Creates a notice for a tier-direct denial.
    #[must_use]
    pub const fn new(required: Tier) -> Self {
        Self {
            required,
            feature: None,
        }
    }

    /// Creates a notice attributed to a specific feature.
    #[must_use]
    pub const fn for_feature(feature: FeatureKey, required: Tier) -> Self {
        Self {
            required,
            feature: Some(feature),
        }
    }

    /// Renders the canonical user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "This feature requires a {} subscription. Please upgrade to continue.",
            self.required
        )
    }
}

// ============================================================================
// SECTION: Notice Sink
// ============================================================================

/// Receiver seam for upgrade notices.
///
/// Publishing is fire-and-forget: implementations must not block and must
/// swallow downstream failures.
pub trait NoticeSink: Send + Sync {
    /// Delivers one notice.
    fn publish(&self, notice: &UpgradeNotice);
}

/// Builds and publishes the notice for a denied requirement.
pub fn request_upgrade(sink: &dyn NoticeSink, required: Tier) {
    sink.publish(&UpgradeNotice::new(required));
}

// ============================================================================
// SECTION: Sink Implementations
// ============================================================================

/// Callback handler signature used by [`CallbackSink`].
type NoticeHandler = dyn Fn(&UpgradeNotice) + Send + Sync;

/// Sink that forwards notices to a caller-provided function.
pub struct CallbackSink {
    /// Handler invoked with each notice.
    handler: Box<NoticeHandler>,
}

impl CallbackSink {
    /// Creates a callback sink from a handler function.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&UpgradeNotice) + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }
}

impl NoticeSink for CallbackSink {
    fn publish(&self, notice: &UpgradeNotice) {
        (self.handler)(notice);
    }
}

impl fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

/// Sink that forwards notices over an unbounded channel.
///
/// # Invariants
/// - Sending never blocks; a disconnected receiver drops the notice.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    /// Sending half of the notice channel.
    sender: Sender<UpgradeNotice>,
}

impl ChannelSink {
    /// Creates a channel sink wrapping `sender`.
    #[must_use]
    pub const fn new(sender: Sender<UpgradeNotice>) -> Self {
        Self { sender }
    }
}

impl NoticeSink for ChannelSink {
    fn publish(&self, notice: &UpgradeNotice) {
        // A closed receiver is not an error for fire-and-forget delivery.
        let _ = self.sender.send(notice.clone());
    }
}

/// Sink that discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    /// Creates a discarding sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NoticeSink for NullSink {
    fn publish(&self, _notice: &UpgradeNotice) {}
}
