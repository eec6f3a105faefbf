//! Session state and transitions.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use field_common::{AreaOfInterest, FieldError, FieldResult};
use synthesis::{FieldHealthDataset, FieldSynthesizer};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Waiting for the user to draw a farm boundary.
    AwaitingBoundary,
    /// An analysis has run; the dashboard is showing its dataset.
    ShowingDashboard,
}

/// One user's analysis session.
///
/// Transitions:
/// - `set_boundary` stores or replaces the drawn boundary; drawing a new
///   boundary from the dashboard drops the stale dataset and returns to
///   `AwaitingBoundary`.
/// - `start_analysis` requires a boundary and moves to `ShowingDashboard`
///   with a freshly generated dataset (the previous one is replaced, never
///   merged).
/// - `reset` clears everything back to the initial state.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    view: ViewState,
    boundary: Option<AreaOfInterest>,
    dataset: Option<FieldHealthDataset>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewState::AwaitingBoundary,
            boundary: None,
            dataset: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn boundary(&self) -> Option<&AreaOfInterest> {
        self.boundary.as_ref()
    }

    pub fn dataset(&self) -> Option<&FieldHealthDataset> {
        self.dataset.as_ref()
    }

    /// Store or replace the drawn boundary.
    ///
    /// A dataset generated for an earlier boundary is stale and is dropped.
    pub fn set_boundary(&mut self, boundary: AreaOfInterest) {
        self.boundary = Some(boundary);
        self.dataset = None;
        self.view = ViewState::AwaitingBoundary;
    }

    /// Run the mock analysis against the stored boundary.
    ///
    /// The one guarded condition in the system: analysis without a drawn
    /// boundary is refused with [`FieldError::BoundaryMissing`].
    pub fn start_analysis<R: Rng + ?Sized>(
        &mut self,
        synthesizer: &FieldSynthesizer,
        rng: &mut R,
    ) -> FieldResult<&FieldHealthDataset> {
        let boundary = self.boundary.as_ref().ok_or(FieldError::BoundaryMissing)?;
        let dataset = synthesizer.generate(boundary, rng);
        self.view = ViewState::ShowingDashboard;
        Ok(self.dataset.insert(dataset))
    }

    /// Discard the boundary and dataset and return to the initial screen.
    pub fn reset(&mut self) {
        self.boundary = None;
        self.dataset = None;
        self.view = ViewState::AwaitingBoundary;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use field_common::Coordinate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn boundary() -> AreaOfInterest {
        AreaOfInterest::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_session_awaits_boundary() {
        let session = Session::new();
        assert_eq!(session.view(), ViewState::AwaitingBoundary);
        assert!(session.boundary().is_none());
        assert!(session.dataset().is_none());
    }

    #[test]
    fn test_analysis_without_boundary_is_refused() {
        let mut session = Session::new();
        let synthesizer = FieldSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(1);

        let result = session.start_analysis(&synthesizer, &mut rng);
        assert!(matches!(result, Err(FieldError::BoundaryMissing)));
        assert_eq!(session.view(), ViewState::AwaitingBoundary);
    }

    #[test]
    fn test_analysis_moves_to_dashboard() {
        let mut session = Session::new();
        let synthesizer = FieldSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(1);

        session.set_boundary(boundary());
        session.start_analysis(&synthesizer, &mut rng).unwrap();

        assert_eq!(session.view(), ViewState::ShowingDashboard);
        assert!(session.dataset().is_some());
    }

    #[test]
    fn test_second_analysis_replaces_the_dataset() {
        let mut session = Session::new();
        let synthesizer = FieldSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(1);

        session.set_boundary(boundary());
        let first = session.start_analysis(&synthesizer, &mut rng).unwrap().clone();
        let second = session.start_analysis(&synthesizer, &mut rng).unwrap().clone();

        assert_ne!(first.stress_grid, second.stress_grid);
    }

    #[test]
    fn test_redrawing_drops_the_stale_dataset() {
        let mut session = Session::new();
        let synthesizer = FieldSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(1);

        session.set_boundary(boundary());
        session.start_analysis(&synthesizer, &mut rng).unwrap();

        session.set_boundary(boundary());
        assert_eq!(session.view(), ViewState::AwaitingBoundary);
        assert!(session.dataset().is_none());
        assert!(session.boundary().is_some());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = Session::new();
        let synthesizer = FieldSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(1);

        session.set_boundary(boundary());
        session.start_analysis(&synthesizer, &mut rng).unwrap();
        session.reset();

        assert_eq!(session.view(), ViewState::AwaitingBoundary);
        assert!(session.boundary().is_none());
        assert!(session.dataset().is_none());
    }
}
