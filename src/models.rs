//! Candidate model list

/// Candidate Gemini models in fallback priority order.
///
/// The first entry is always tried first; the order is fixed at startup and
/// never reordered by latency, cost, or prior success rate.
pub const FALLBACK_MODELS: &[&str] = &[
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
    "gemini-1.5-flash",
    "gemini-1.5-flash-8b",
    "gemini-1.5-pro",
];

/// Read-only view of the candidate list, for help and introspection surfaces
pub fn fallback_models() -> &'static [&'static str] {
    FALLBACK_MODELS
}
