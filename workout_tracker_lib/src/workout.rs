use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::coords::Coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase label, used for css classes and the persisted type tag.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(format!("Unknown workout type: {other}")),
        }
    }
}

/// Validated numbers from the form, ready to be turned into a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutInput {
    pub distance: f64,
    pub duration: f64,
    pub detail: WorkoutDetail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetail {
    Running { cadence: f64 },
    Cycling { elevation: f64 },
}

/// Fields shared by every workout type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutBase {
    pub id: String,
    pub date: DateTime<Utc>,
    pub coords: Coords,
    /// km
    pub distance: f64,
    /// min
    pub duration: f64,
    pub description: String,
}

impl WorkoutBase {
    fn new<Tz: TimeZone>(kind: WorkoutKind, id: String, created: &DateTime<Tz>, coords: Coords, distance: f64, duration: f64) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            id,
            date: created.with_timezone(&Utc),
            coords,
            distance,
            duration,
            description: describe(kind, created),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    #[serde(flatten)]
    pub base: WorkoutBase,
    /// steps/min
    pub cadence: f64,
    /// min/km
    pub pace: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cycling {
    #[serde(flatten)]
    pub base: WorkoutBase,
    /// m
    pub elevation: f64,
    /// km/h
    pub speed: f64,
}

/// A recorded workout. The `type` tag is persisted so the variant survives a reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Workout {
    Running(Running),
    Cycling(Cycling),
}

impl Workout {
    /// Builds a fully initialized workout from validated input.
    pub fn new<Tz: TimeZone>(id: String, created: &DateTime<Tz>, coords: Coords, input: WorkoutInput) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        match input.detail {
            WorkoutDetail::Running { cadence } => Self::running(id, created, coords, input.distance, input.duration, cadence),
            WorkoutDetail::Cycling { elevation } => Self::cycling(id, created, coords, input.distance, input.duration, elevation),
        }
    }

    pub fn running<Tz: TimeZone>(id: String, created: &DateTime<Tz>, coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let base = WorkoutBase::new(WorkoutKind::Running, id, created, coords, distance, duration);
        Workout::Running(Running {
            pace: duration / distance,
            cadence,
            base,
        })
    }

    pub fn cycling<Tz: TimeZone>(id: String, created: &DateTime<Tz>, coords: Coords, distance: f64, duration: f64, elevation: f64) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let base = WorkoutBase::new(WorkoutKind::Cycling, id, created, coords, distance, duration);
        Workout::Cycling(Cycling {
            speed: distance / (duration / 60.),
            elevation,
            base,
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Cycling(_) => WorkoutKind::Cycling,
        }
    }

    pub fn base(&self) -> &WorkoutBase {
        match self {
            Workout::Running(running) => &running.base,
            Workout::Cycling(cycling) => &cycling.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn coords(&self) -> Coords {
        self.base().coords
    }

    pub fn description(&self) -> &str {
        &self.base().description
    }

    /// Pace for running, speed for cycling.
    pub fn metric(&self) -> f64 {
        match self {
            Workout::Running(running) => running.pace,
            Workout::Cycling(cycling) => cycling.speed,
        }
    }
}

fn describe<Tz: TimeZone>(kind: WorkoutKind, created: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("{} on {}", kind.title(), created.format("%B %-d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn running_pace_and_description() {
        let workout = Workout::running("1234567890".into(), &may_first(), Coords::new(51.5, -0.09), 5.2, 24., 178.);

        let Workout::Running(running) = &workout else {
            panic!("expected running workout");
        };
        assert_eq!(running.pace, 24. / 5.2);
        assert_eq!(running.cadence, 178.);
        assert_eq!(workout.description(), "Running on May 1");
        assert_eq!(workout.kind(), WorkoutKind::Running);
    }

    #[test]
    fn cycling_speed_and_description() {
        let date = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap();
        let workout = Workout::cycling("1".into(), &date, Coords::new(56.17, 10.19), 27., 95., 523.);

        assert_eq!(workout.metric(), 27. / (95. / 60.));
        assert_eq!(workout.description(), "Cycling on December 24");
    }

    #[test]
    fn description_uses_creator_time_zone() {
        // 23:30 UTC on the 31st is already the 1st in UTC+2
        let utc = Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap();
        let local = utc.with_timezone(&chrono::FixedOffset::east_opt(2 * 3600).unwrap());
        let workout = Workout::running("1".into(), &local, Coords::new(0., 0.), 1., 1., 1.);

        assert_eq!(workout.description(), "Running on February 1");
        assert_eq!(workout.base().date, utc);
    }

    #[test]
    fn new_dispatches_on_detail() {
        let input = WorkoutInput {
            distance: 10.,
            duration: 30.,
            detail: WorkoutDetail::Cycling { elevation: 0. },
        };
        let workout = Workout::new("42".into(), &may_first(), Coords::new(1., 2.), input);

        assert_eq!(workout.kind(), WorkoutKind::Cycling);
        assert_eq!(workout.metric(), 20.);
        assert_eq!(workout.coords(), Coords::new(1., 2.));
    }

    #[test]
    fn persisted_record_carries_type_tag() {
        let workout = Workout::running("0001".into(), &may_first(), Coords::new(51.5, -0.09), 5.2, 24., 178.);
        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["type"], "running");
        assert_eq!(value["id"], "0001");
        assert_eq!(value["coords"], serde_json::json!([51.5, -0.09]));
        assert_eq!(value["cadence"], 178.);
        assert!(value.get("speed").is_none());

        let back: Workout = serde_json::from_value(value).unwrap();
        assert_eq!(back, workout);
    }

    #[test]
    fn kind_parses_from_select_value() {
        assert_eq!("cycling".parse::<WorkoutKind>(), Ok(WorkoutKind::Cycling));
        assert!("swimming".parse::<WorkoutKind>().is_err());
    }
}
