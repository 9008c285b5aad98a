use crate::{
    config::PopupConfig,
    coords::Coords,
    workout::{Workout, WorkoutKind},
};

/// One icon/value/unit row of a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl Detail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// What the workout list shows for a single workout.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListEntry {
    pub fn class(&self) -> String {
        format!("workout workout--{}", self.kind.label())
    }
}

impl From<&Workout> for ListEntry {
    fn from(workout: &Workout) -> Self {
        let base = workout.base();
        let mut details = Vec::with_capacity(4);

        let icon = match workout.kind() {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        };
        details.push(Detail::new(icon, base.distance.to_string(), "km"));
        details.push(Detail::new("⏱", base.duration.to_string(), "min"));

        match workout {
            Workout::Running(running) => {
                details.push(Detail::new("⚡️", one_decimal(running.pace), "min/km"));
                details.push(Detail::new("🦶🏼", running.cadence.to_string(), "spm"));
            }
            Workout::Cycling(cycling) => {
                details.push(Detail::new("⚡️", one_decimal(cycling.speed), "km/h"));
                details.push(Detail::new("⛰", cycling.elevation.to_string(), "m"));
            }
        }

        Self {
            id: base.id.clone(),
            kind: workout.kind(),
            title: base.description.clone(),
            details,
        }
    }
}

// Halves round up, like a browser's toFixed(1)
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.).round() / 10.)
}

/// A map pin with its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub coords: Coords,
    pub content: String,
    pub class_name: String,
    pub min_width: f64,
    pub max_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerSpec {
    pub fn for_workout(workout: &Workout, popup: &PopupConfig) -> Self {
        Self {
            coords: workout.coords(),
            content: workout.description().to_string(),
            class_name: format!("{}-popup", workout.kind().label()),
            min_width: popup.min_width,
            max_width: popup.max_width,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Holds back marker requests until the map exists.
///
/// Requests pushed before [`MarkerQueue::mark_ready`] are returned from it in
/// push order. After that, `push` hands each request straight back.
#[derive(Debug)]
pub struct MarkerQueue<T> {
    ready: bool,
    pending: Vec<T>,
}

impl<T> Default for MarkerQueue<T> {
    fn default() -> Self {
        Self {
            ready: false,
            pending: Vec::new(),
        }
    }
}

impl<T> MarkerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Returns the request if it can be rendered now.
    pub fn push(&mut self, request: T) -> Option<T> {
        if self.ready {
            Some(request)
        } else {
            self.pending.push(request);
            None
        }
    }

    /// Signals the map is ready and returns everything queued so far.
    /// Later calls return nothing.
    pub fn mark_ready(&mut self) -> Vec<T> {
        self.ready = true;
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn date() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap()
    }

    fn rows(entry: &ListEntry) -> Vec<String> {
        entry
            .details
            .iter()
            .map(|d| format!("{} {} {}", d.icon, d.value, d.unit))
            .collect()
    }

    #[test]
    fn running_list_entry() {
        let workout = Workout::running("77".into(), &date(), Coords::new(51.5, -0.09), 5.2, 24., 178.);
        let entry = ListEntry::from(&workout);

        assert_eq!(entry.id, "77");
        assert_eq!(entry.class(), "workout workout--running");
        assert_eq!(entry.title, "Running on May 1");
        assert_eq!(rows(&entry), ["🏃‍♂️ 5.2 km", "⏱ 24 min", "⚡️ 4.6 min/km", "🦶🏼 178 spm"]);
    }

    #[test]
    fn cycling_list_entry() {
        let workout = Workout::cycling("78".into(), &date(), Coords::new(51.5, -0.09), 27., 95., 0.);
        let entry = ListEntry::from(&workout);

        assert_eq!(entry.class(), "workout workout--cycling");
        assert_eq!(rows(&entry), ["🚴‍♀️ 27 km", "⏱ 95 min", "⚡️ 17.1 km/h", "⛰ 0 m"]);
    }

    #[test]
    fn metric_halves_round_up() {
        let run = Workout::running("1".into(), &date(), Coords::new(0., 0.), 20., 25., 170.);
        assert_eq!(ListEntry::from(&run).details[2].value, "1.3");

        let ride = Workout::cycling("2".into(), &date(), Coords::new(0., 0.), 49., 240., 10.);
        assert_eq!(ListEntry::from(&ride).details[2].value, "12.3");
    }

    #[test]
    fn marker_for_workout() {
        let workout = Workout::cycling("1".into(), &date(), Coords::new(56.1, 10.2), 20., 60., 100.);
        let marker = MarkerSpec::for_workout(&workout, &PopupConfig::default());

        assert_eq!(marker.coords, Coords::new(56.1, 10.2));
        assert_eq!(marker.content, "Cycling on May 1");
        assert_eq!(marker.class_name, "cycling-popup");
        assert_eq!((marker.min_width, marker.max_width), (100., 250.));
        assert!(!marker.auto_close);
        assert!(!marker.close_on_click);
    }

    #[test]
    fn queue_defers_until_ready() {
        let mut queue = MarkerQueue::new();

        assert_eq!(queue.push("a"), None);
        assert_eq!(queue.push("b"), None);
        assert!(!queue.is_ready());

        assert_eq!(queue.mark_ready(), vec!["a", "b"]);
        assert_eq!(queue.push("c"), Some("c"));
        assert!(queue.mark_ready().is_empty());
    }
}
