use std::fmt;

use tracing::{debug, info, warn};

use crate::{
    storage::{KeyValueStorage, StorageError},
    workout::Workout,
};

#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Serialize(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Storage(err) => write!(f, "{err}"),
            StoreError::Serialize(msg) => write!(f, "Failed to serialize workouts: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        StoreError::Storage(value)
    }
}

/// The session's workouts, in insertion order, mirrored to a storage slot.
///
/// Every mutation rewrites the whole slot, so after `add` returns the
/// persisted array and the in-memory list are the same.
pub struct WorkoutStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    workouts: Vec<Workout>,
}

impl<S: KeyValueStorage> WorkoutStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            workouts: Vec::new(),
        }
    }

    /// Replaces the in-memory list with whatever is persisted.
    ///
    /// Missing, empty or unreadable data leaves the store empty. Records are
    /// taken as stored, derived values are not recomputed.
    pub fn load_all(&mut self) -> &[Workout] {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!("No persisted workouts under {:?}", self.key);
                return &self.workouts;
            }
            Err(err) => {
                warn!("Could not read persisted workouts: {err}");
                return &self.workouts;
            }
        };

        match serde_json::from_str::<Option<Vec<Workout>>>(&raw) {
            Ok(Some(workouts)) => {
                debug!("Loaded {} workouts", workouts.len());
                self.workouts = workouts;
            }
            Ok(None) => debug!("Persisted workouts are null"),
            Err(err) => warn!("Ignoring malformed persisted workouts: {err}"),
        }

        &self.workouts
    }

    /// Appends a workout and rewrites the persisted list.
    ///
    /// If the write fails the workout is not kept.
    pub fn add(&mut self, workout: Workout) -> Result<&Workout, StoreError> {
        self.workouts.push(workout);

        if let Err(err) = self.persist() {
            self.workouts.pop();
            return Err(err);
        }

        let added = &self.workouts[self.workouts.len() - 1];
        debug!("Added workout {} ({} total)", added.id(), self.workouts.len());
        Ok(added)
    }

    /// Deletes the persisted entry and forgets every workout.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.storage.remove(&self.key)?;
        self.workouts.clear();
        info!("Workout store reset");
        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.workouts).map_err(|err| StoreError::Serialize(err.to_string()))?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }
}
