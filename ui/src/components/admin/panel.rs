//! Summary Panel Activation State
//!
//! The fetch-and-render flow behind the admin summary modal, kept free of
//! any UI types so the contract stands on its own: opening the panel starts
//! exactly one fetch, and a response that arrives for a superseded
//! activation is dropped before it can touch what the user sees.

use folio_shared::SummaryStats;

/// Render phase of an open panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPhase {
    /// Fetch outstanding; the panel shows its loading indicator
    Loading,
    /// Counts arrived
    Loaded(SummaryStats),
    /// Fetch failed or returned an unusable payload
    Failed(String),
}

/// State machine for the summary panel
///
/// Closed until [`activate`](Self::activate) is called. Each activation gets
/// a generation number; [`resolve`](Self::resolve) only applies a result
/// carrying the current generation, so closing or re-opening the panel
/// invalidates everything in flight.
#[derive(Debug, Clone, Default)]
pub struct SummaryPanel {
    generation: u64,
    phase: Option<PanelPhase>,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the panel and start a new activation.
    ///
    /// Returns the generation the caller ties to the single fetch this
    /// activation issues.
    pub fn activate(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Some(PanelPhase::Loading);
        self.generation
    }

    /// Close the panel, discarding any displayed data
    pub fn close(&mut self) {
        self.phase = None;
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_some()
    }

    pub fn phase(&self) -> Option<&PanelPhase> {
        self.phase.as_ref()
    }

    /// Apply a fetch outcome.
    ///
    /// Returns `false` when the result was stale - the panel closed or was
    /// re-activated since that fetch started - and was dropped.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<SummaryStats, String>,
    ) -> bool {
        if generation != self.generation || self.phase.is_none() {
            return false;
        }

        self.phase = Some(match result {
            Ok(stats) => PanelPhase::Loaded(stats),
            Err(message) => PanelPhase::Failed(message),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(projects: u64, messages: u64, certificates: u64) -> SummaryStats {
        SummaryStats {
            projects_count: projects,
            messages_count: messages,
            certificates_count: certificates,
        }
    }

    #[test]
    fn starts_closed_with_no_phase() {
        let panel = SummaryPanel::new();
        assert!(!panel.is_open());
        assert_eq!(panel.phase(), None);
    }

    #[test]
    fn activation_enters_loading() {
        let mut panel = SummaryPanel::new();
        panel.activate();
        assert!(panel.is_open());
        assert_eq!(panel.phase(), Some(&PanelPhase::Loading));
    }

    #[test]
    fn resolution_renders_counts() {
        let mut panel = SummaryPanel::new();
        let generation = panel.activate();

        assert!(panel.resolve(generation, Ok(stats(5, 0, 12))));
        assert_eq!(panel.phase(), Some(&PanelPhase::Loaded(stats(5, 0, 12))));
    }

    #[test]
    fn empty_payload_renders_zeros() {
        let mut panel = SummaryPanel::new();
        let generation = panel.activate();

        // `{}` deserializes to all-zero stats upstream of the panel
        assert!(panel.resolve(generation, Ok(SummaryStats::default())));
        assert_eq!(panel.phase(), Some(&PanelPhase::Loaded(stats(0, 0, 0))));
    }

    #[test]
    fn unresolved_fetch_stays_loading() {
        let mut panel = SummaryPanel::new();
        panel.activate();
        // No resolve call ever arrives
        assert_eq!(panel.phase(), Some(&PanelPhase::Loading));
    }

    #[test]
    fn failure_surfaces_instead_of_loading_forever() {
        let mut panel = SummaryPanel::new();
        let generation = panel.activate();

        assert!(panel.resolve(generation, Err("HTTP 500".to_string())));
        assert_eq!(
            panel.phase(),
            Some(&PanelPhase::Failed("HTTP 500".to_string()))
        );
    }

    #[test]
    fn close_discards_data_regardless_of_fetch_state() {
        let mut panel = SummaryPanel::new();
        let generation = panel.activate();
        panel.close();
        assert!(!panel.is_open());

        // The still-in-flight response lands after close and is dropped
        assert!(!panel.resolve(generation, Ok(stats(9, 9, 9))));
        assert!(!panel.is_open());
    }

    #[test]
    fn reopen_resets_to_loading_and_refetches() {
        let mut panel = SummaryPanel::new();
        let first = panel.activate();
        panel.resolve(first, Ok(stats(1, 1, 1)));
        panel.close();

        let second = panel.activate();
        assert_ne!(first, second);
        assert_eq!(panel.phase(), Some(&PanelPhase::Loading));
    }

    #[test]
    fn stale_response_after_reopen_is_discarded() {
        let mut panel = SummaryPanel::new();
        let first = panel.activate();
        panel.close();
        let second = panel.activate();

        // First activation's response arrives late; the panel must keep
        // showing the second activation's loading state
        assert!(!panel.resolve(first, Ok(stats(1, 1, 1))));
        assert_eq!(panel.phase(), Some(&PanelPhase::Loading));

        // Last fetch started wins
        assert!(panel.resolve(second, Ok(stats(2, 2, 2))));
        assert_eq!(panel.phase(), Some(&PanelPhase::Loaded(stats(2, 2, 2))));
    }

    #[test]
    fn stale_failure_is_discarded_too() {
        let mut panel = SummaryPanel::new();
        let first = panel.activate();
        panel.close();
        let second = panel.activate();

        assert!(!panel.resolve(first, Err("timed out".to_string())));
        assert_eq!(panel.phase(), Some(&PanelPhase::Loading));

        assert!(panel.resolve(second, Ok(stats(3, 0, 0))));
    }
}
