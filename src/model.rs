use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifiant fort pour User (attribué par le service distant)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Utilisateur distant (lecture seule, rechargé à chaque exécution)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Nom d'affichage renvoyé par le service (`summary` côté API)
    pub summary: String,
}

impl User {
    pub fn new<I: AsRef<str>, S: Into<String>>(id: I, summary: S) -> Self {
        Self {
            id: UserId::new(id),
            summary: summary.into(),
        }
    }
}

/// Créneau rendu d'un planning (intervalle UTC [start, end)).
///
/// Transient : n'existe qu'en mémoire le temps d'une exécution, jamais persisté.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    pub user_id: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShiftEntry {
    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
