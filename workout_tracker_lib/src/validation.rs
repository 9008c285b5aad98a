use std::fmt;

use crate::workout::{WorkoutDetail, WorkoutInput, WorkoutKind};

/// Raw text of the workout form, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NotFinite(Field),
    NotPositive(Field),
}

impl ValidationError {
    /// Text shown to the user when a submission is rejected.
    pub fn user_message(&self) -> &'static str {
        "Inputs have to be positive numbers"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotFinite(field) => write!(f, "{field} is not a finite number"),
            ValidationError::NotPositive(field) => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Checks the form and returns the numbers for the selected workout type.
///
/// Running needs distance, duration and cadence to be positive. Cycling only
/// checks distance and duration; elevation just has to be finite, so a flat or
/// downhill ride is accepted.
pub fn validate(input: &FormInput) -> Result<WorkoutInput, ValidationError> {
    let distance = positive(Field::Distance, &input.distance)?;
    let duration = positive(Field::Duration, &input.duration)?;

    let detail = match input.kind {
        WorkoutKind::Running => WorkoutDetail::Running {
            cadence: positive(Field::Cadence, &input.cadence)?,
        },
        WorkoutKind::Cycling => WorkoutDetail::Cycling {
            elevation: finite(Field::Elevation, &input.elevation)?,
        },
    };

    Ok(WorkoutInput { distance, duration, detail })
}

// A blank number input reads as zero in the browser
fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.;
    }
    raw.parse().unwrap_or(f64::NAN)
}

fn finite(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value = parse_number(raw);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

fn positive(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value = finite(field, raw)?;
    if value > 0. {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: WorkoutKind, distance: &str, duration: &str, cadence: &str, elevation: &str) -> FormInput {
        FormInput {
            kind,
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            elevation: elevation.into(),
        }
    }

    #[test]
    fn accepts_valid_running() {
        let input = validate(&form(WorkoutKind::Running, "5.2", " 24 ", "178", "")).unwrap();

        assert_eq!(input.distance, 5.2);
        assert_eq!(input.duration, 24.);
        assert_eq!(input.detail, WorkoutDetail::Running { cadence: 178. });
    }

    #[test]
    fn rejects_zero_distance() {
        assert_eq!(
            validate(&form(WorkoutKind::Running, "0", "24", "178", "")),
            Err(ValidationError::NotPositive(Field::Distance))
        );
        assert_eq!(
            validate(&form(WorkoutKind::Cycling, "0", "24", "", "100")),
            Err(ValidationError::NotPositive(Field::Distance))
        );
    }

    #[test]
    fn cycling_accepts_zero_and_negative_elevation() {
        let flat = validate(&form(WorkoutKind::Cycling, "20", "60", "", "0")).unwrap();
        assert_eq!(flat.detail, WorkoutDetail::Cycling { elevation: 0. });

        let blank = validate(&form(WorkoutKind::Cycling, "20", "60", "", "")).unwrap();
        assert_eq!(blank.detail, WorkoutDetail::Cycling { elevation: 0. });

        let downhill = validate(&form(WorkoutKind::Cycling, "20", "60", "", "-150")).unwrap();
        assert_eq!(downhill.detail, WorkoutDetail::Cycling { elevation: -150. });
    }

    #[test]
    fn cycling_still_requires_finite_elevation() {
        assert_eq!(
            validate(&form(WorkoutKind::Cycling, "20", "60", "", "lots")),
            Err(ValidationError::NotFinite(Field::Elevation))
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        assert_eq!(
            validate(&form(WorkoutKind::Running, "abc", "24", "178", "")),
            Err(ValidationError::NotFinite(Field::Distance))
        );
        assert_eq!(
            validate(&form(WorkoutKind::Running, "5", "inf", "178", "")),
            Err(ValidationError::NotFinite(Field::Duration))
        );
    }

    #[test]
    fn running_requires_positive_cadence() {
        assert_eq!(
            validate(&form(WorkoutKind::Running, "5", "24", "", "")),
            Err(ValidationError::NotPositive(Field::Cadence))
        );
        assert_eq!(
            validate(&form(WorkoutKind::Running, "5", "24", "-3", "")),
            Err(ValidationError::NotPositive(Field::Cadence))
        );
    }

    #[test]
    fn rejection_alert_text() {
        let err = validate(&form(WorkoutKind::Running, "0", "24", "178", "")).unwrap_err();
        assert_eq!(err.user_message(), "Inputs have to be positive numbers");
    }

    #[test]
    fn ignores_the_hidden_field() {
        // Cadence is irrelevant for a ride, elevation for a run
        assert!(validate(&form(WorkoutKind::Cycling, "20", "60", "garbage", "10")).is_ok());
        assert!(validate(&form(WorkoutKind::Running, "5", "24", "170", "garbage")).is_ok());
    }
}
