use std::fmt;

use crate::{
    coords::Coords,
    validation::{validate, FormInput, ValidationError},
    workout::WorkoutInput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    /// Submitted without a clicked map location.
    NotOpen,
    Invalid(ValidationError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::NotOpen => f.write_str("No location selected on the map"),
            FormError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FormError {}

/// Whether the workout form is showing, and for which map location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Open { coords: Coords },
}

impl FormState {
    /// A map click opens the form, or moves the pending location if it is already open.
    pub fn open(&mut self, coords: Coords) {
        *self = FormState::Open { coords };
    }

    pub fn is_open(&self) -> bool {
        matches!(self, FormState::Open { .. })
    }

    pub fn pending(&self) -> Option<Coords> {
        match self {
            FormState::Idle => None,
            FormState::Open { coords } => Some(*coords),
        }
    }

    /// Validates a submission. Success consumes the location and closes the
    /// form, a rejected submission keeps it open for another try.
    pub fn submit(&mut self, input: &FormInput) -> Result<(Coords, WorkoutInput), FormError> {
        let FormState::Open { coords } = *self else {
            return Err(FormError::NotOpen);
        };

        let workout_input = validate(input).map_err(FormError::Invalid)?;
        *self = FormState::Idle;
        Ok((coords, workout_input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validation::Field, workout::WorkoutKind};

    fn running(distance: &str) -> FormInput {
        FormInput {
            kind: WorkoutKind::Running,
            distance: distance.into(),
            duration: "24".into(),
            cadence: "178".into(),
            elevation: "".into(),
        }
    }

    #[test]
    fn starts_idle() {
        let state = FormState::default();
        assert!(!state.is_open());
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn submit_while_idle_is_refused() {
        let mut state = FormState::Idle;
        assert_eq!(state.submit(&running("5")), Err(FormError::NotOpen));
    }

    #[test]
    fn successful_submit_consumes_location() {
        let mut state = FormState::Idle;
        state.open(Coords::new(51.5, -0.09));

        let (coords, input) = state.submit(&running("5.2")).unwrap();

        assert_eq!(coords, Coords::new(51.5, -0.09));
        assert_eq!(input.distance, 5.2);
        assert_eq!(state, FormState::Idle);
    }

    #[test]
    fn rejected_submit_keeps_location() {
        let mut state = FormState::Idle;
        state.open(Coords::new(1., 2.));

        let err = state.submit(&running("0")).unwrap_err();

        assert_eq!(err, FormError::Invalid(ValidationError::NotPositive(Field::Distance)));
        assert_eq!(state.pending(), Some(Coords::new(1., 2.)));

        // Retry with the same location
        let (coords, _) = state.submit(&running("3")).unwrap();
        assert_eq!(coords, Coords::new(1., 2.));
    }

    #[test]
    fn second_click_moves_pending_location() {
        let mut state = FormState::Idle;
        state.open(Coords::new(1., 2.));
        state.open(Coords::new(3., 4.));

        assert_eq!(state.pending(), Some(Coords::new(3., 4.)));
    }
}
