//! Caller-supplied enrichment collaborators.
//!
//! The resolver itself never performs I/O; callers fetch any time-varying
//! data (on-call schedules, incident records, AI analysis) before calling
//! and hand it in through these interfaces.

use mailgram_models::{AiAnalysis, ChannelId};

/// Resolves the current on-call destination for a domain.
///
/// Implementations own the schedule data; the resolver only consults them
/// when the parsed scope is the reserved on-call value.
pub trait OnCallLookup {
    /// Returns the on-call channel for a domain, or `None` when the
    /// domain has no specific on-call mapping.
    fn resolve(&self, domain: &str) -> Option<ChannelId>;

    /// The generic on-call channel used when `resolve` returns `None`.
    fn fallback(&self) -> ChannelId;
}

/// Resolves an incident identifier to its dedicated channel.
///
/// Extension point for a real incident-system integration; when absent,
/// the resolver derives the channel from the identifier's shape alone.
pub trait IncidentLookup {
    /// Returns the channel for a state ID, or `None` when the ID is not
    /// a known incident.
    fn resolve(&self, state_id: &str) -> Option<ChannelId>;
}

/// Optional enrichment handed to the resolver alongside a parsed record.
///
/// All fields default to absent; the resolver degrades deterministically,
/// skipping whichever steps lack their collaborator.
#[derive(Default)]
pub struct Enrichment<'a> {
    /// AI-analysis signal; only `urgency` and `phishing_risk` are read.
    pub ai: Option<AiAnalysis>,
    /// Originating sender address, used in reasoning/log output only.
    pub email_from: Option<String>,
    /// On-call schedule collaborator.
    pub on_call: Option<&'a dyn OnCallLookup>,
    /// Incident-system collaborator.
    pub incidents: Option<&'a dyn IncidentLookup>,
}

impl<'a> Enrichment<'a> {
    /// Creates an empty enrichment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI-analysis signal.
    pub fn with_ai(mut self, ai: AiAnalysis) -> Self {
        self.ai = Some(ai);
        self
    }

    /// Sets the originating sender address.
    pub fn with_email_from(mut self, from: impl Into<String>) -> Self {
        self.email_from = Some(from.into());
        self
    }

    /// Sets the on-call collaborator.
    pub fn with_on_call(mut self, lookup: &'a dyn OnCallLookup) -> Self {
        self.on_call = Some(lookup);
        self
    }

    /// Sets the incident collaborator.
    pub fn with_incidents(mut self, lookup: &'a dyn IncidentLookup) -> Self {
        self.incidents = Some(lookup);
        self
    }
}
