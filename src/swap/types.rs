use chrono::NaiveDate;

/// Paramètres validés d'une permutation (chaînes déjà vérifiées en amont par
/// la CLI ; la lib ne refait pas le parsing).
#[derive(Debug, Clone)]
pub struct SwapRequest {
    /// Nom lisible du planning (résolu par recherche floue).
    pub schedule: String,
    /// Début de la semaine de l'utilisateur courant (UTC).
    pub current_user_week: NaiveDate,
    /// Requête de recherche de l'autre utilisateur (nom ou email).
    pub other_username: String,
    /// Début de la semaine de l'autre utilisateur (UTC).
    pub other_user_week: NaiveDate,
    /// Si vrai, les écritures sont journalisées mais jamais soumises.
    pub dry_run: bool,
}

/// Issue d'une permutation menée à terme sans erreur de transport.
///
/// Les échecs de résolution (utilisateur ou planning introuvable) sont des
/// issues normales : journalisées, puis retour propre sans rien écrire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Overrides écrits (ou simulés en dry-run).
    Completed { overrides: usize },
    /// Aucun utilisateur ne correspond à la requête.
    UserNotFound(String),
    /// Aucun planning ne correspond au nom.
    ScheduleNotFound(String),
}
