use crate::model::{ScheduleId, ShiftEntry, User};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Erreurs remontées par la couche API distante.
///
/// "Introuvable" n'est PAS une erreur : les recherches renvoient des listes
/// (éventuellement vides) et c'est l'orchestrateur qui décide quoi en faire.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("authentication rejected by remote service (check API_TOKEN)")]
    Auth,
    /// Panne réseau, réponse HTTP inattendue ou corps illisible.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("override rejected ({status}): {body}")]
    Validation { status: u16, body: String },
}

/// Intention d'override : écriture seule, jamais relue ni comparée.
#[derive(Debug, Clone)]
pub struct OverrideSpec {
    pub user: User,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Les cinq opérations distantes consommées par la permutation.
///
/// Les recherches renvoient la séquence ORDONNÉE telle que rendue par le
/// service ; la politique « premier résultat » est appliquée visiblement par
/// l'appelant, pas ici.
pub trait ScheduleApi {
    /// Identité liée au jeton d'authentification actif.
    fn current_user(&self) -> Result<User, ApiError>;

    /// Recherche floue (nom ou email) ; ordre du service, liste vide si aucun.
    fn search_users(&self, query: &str) -> Result<Vec<User>, ApiError>;

    /// Recherche floue d'un planning par nom.
    fn search_schedules(&self, query: &str) -> Result<Vec<ScheduleId>, ApiError>;

    /// Créneaux rendus du planning sur `[since, until)` en UTC, non filtrés,
    /// dans l'ordre natif du service (chronologique).
    fn rendered_entries(
        &self,
        schedule: &ScheduleId,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<ShiftEntry>, ApiError>;

    /// Soumet la création d'un override. Aucune relecture du résultat.
    fn create_override(
        &self,
        schedule: &ScheduleId,
        spec: &OverrideSpec,
    ) -> Result<(), ApiError>;
}
