//! Feature-gated tracing macros.
//!
//! With the `tracing` feature the macros forward to the `tracing` crate; without
//! it they evaluate their field expressions and emit nothing, so call sites need
//! no `cfg` attributes.

/// Opens a debug-level span: `trace_span!("name", key = value, ...)`.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:literal $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::debug_span!($name $(, $key = $value)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:literal $(, $key:ident = $value:expr)* $(,)?) => {{
        let _ = ($($value,)*);
        $crate::trace::SpanGuard
    }};
}

/// Emits an event at the given level: `trace_event!(INFO, "message", key = value)`.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $msg:literal $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::event!(tracing::Level::$level, $($key = $value,)* $msg)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $msg:literal $(, $key:ident = $value:expr)* $(,)?) => {{
        let _ = ($($value,)*);
    }};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in for an entered span when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub struct SpanGuard;

#[cfg(not(feature = "tracing"))]
impl SpanGuard {
    /// Mirrors `tracing::Span::entered`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
