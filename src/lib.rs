#![forbid(unsafe_code)]
//! Releve — permutation de semaines d'astreinte PagerDuty entre deux
//! utilisateurs (sans état local).
//!
//! - Pipeline séquentiel lecture-puis-écriture contre l'API distante.
//! - Tout en UTC ; dates `YYYY-MM-DD`, timestamps RFC3339.
//! - Dry-run : les écritures sont journalisées, jamais soumises.
//! - Pas de rollback : un échec en cours d'écriture laisse les overrides
//!   déjà créés en place.

pub mod api;
pub mod client;
pub mod model;
pub mod swap;

pub use api::{ApiError, OverrideSpec, ScheduleApi};
pub use client::{ApiConfig, PagerDutyClient};
pub use model::{ScheduleId, ShiftEntry, User, UserId};
pub use swap::{fetch_window, run_swap, SwapOutcome, SwapRequest, FETCH_WINDOW_DAYS};
