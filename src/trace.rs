//! Logging shims over `tracing`.
//!
//! Every macro forwards to `tracing` when the `tracing` feature is enabled.
//! Without it spans become a [`DisabledSpan`] and events only evaluate their
//! field expressions.

/// Info-level span around one search stage.
#[cfg(feature = "tracing")]
macro_rules! stage_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! stage_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::DisabledSpan
    };
}

/// Info-level summary event for a finished stage.
#[cfg(feature = "tracing")]
macro_rules! stage_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

/// Debug-level event emitted once per refined region.
#[cfg(feature = "tracing")]
macro_rules! region_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

/// Warn-level event for input that was skipped rather than rejected.
#[cfg(feature = "tracing")]
macro_rules! input_warning {
    ($msg:literal, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::warn!($($key = $value),+, $msg)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! discard_fields {
    ($label:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

#[cfg(not(feature = "tracing"))]
pub(crate) use discard_fields as input_warning;
#[cfg(not(feature = "tracing"))]
pub(crate) use discard_fields as region_event;
#[cfg(not(feature = "tracing"))]
pub(crate) use discard_fields as stage_event;

#[cfg(feature = "tracing")]
pub(crate) use input_warning;
#[cfg(feature = "tracing")]
pub(crate) use region_event;
#[cfg(feature = "tracing")]
pub(crate) use stage_event;

pub(crate) use stage_span;

/// Stand-in for `tracing::Span` so that `stage_span!(..).entered()` reads the
/// same with the feature off.
#[cfg(not(feature = "tracing"))]
pub struct DisabledSpan;

#[cfg(not(feature = "tracing"))]
impl DisabledSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
