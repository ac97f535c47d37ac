mod types;
mod window;

pub use types::{SwapOutcome, SwapRequest};
pub use window::{fetch_window, FETCH_WINDOW_DAYS};

use crate::api::{ApiError, OverrideSpec, ScheduleApi};
use crate::model::{ScheduleId, ShiftEntry, User, UserId};
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Échange les semaines d'astreinte de deux utilisateurs sur un planning.
///
/// Pipeline strictement séquentiel : résolution des identités, résolution du
/// planning, lecture des deux fenêtres, puis écriture des overrides croisés
/// (les créneaux de A attribués à B, puis ceux de B attribués à A). La
/// première erreur interrompt tout ; les overrides déjà écrits restent en
/// place (pas de compensation, relance manuelle à charge de l'utilisateur).
pub fn run_swap<A: ScheduleApi>(api: &A, req: &SwapRequest) -> Result<SwapOutcome, ApiError> {
    info!("starting shift swap");

    let current = api.current_user()?;
    let candidates = api.search_users(&req.other_username)?;
    // Politique « premier résultat » : la recherche est floue, une ambiguïté
    // est résolue silencieusement en faveur du premier match du service.
    let Some(other) = candidates.into_iter().next() else {
        error!(query = %req.other_username, "no user found with that username");
        return Ok(SwapOutcome::UserNotFound(req.other_username.clone()));
    };

    let schedules = api.search_schedules(&req.schedule)?;
    let Some(schedule) = schedules.into_iter().next() else {
        error!(query = %req.schedule, "no schedule found with that name");
        return Ok(SwapOutcome::ScheduleNotFound(req.schedule.clone()));
    };

    let (current_since, current_until) = fetch_window(req.current_user_week);
    let (other_since, other_until) = fetch_window(req.other_user_week);

    let current_shifts = user_entries(
        api.rendered_entries(&schedule, current_since, current_until)?,
        &current.id,
    );
    let other_shifts = user_entries(
        api.rendered_entries(&schedule, other_since, other_until)?,
        &other.id,
    );

    info!(
        current_user = %current.summary,
        other_user = %other.summary,
        current_shifts = current_shifts.len(),
        other_shifts = other_shifts.len(),
        "swapping shifts"
    );

    // Aucune validation de symétrie : des semaines incohérentes produisent un
    // échange déséquilibré, voulu tel quel.
    let mut overrides = 0usize;
    for shift in &current_shifts {
        write_override(api, &schedule, &other, shift.start, shift.end, req.dry_run)?;
        overrides += 1;
    }
    for shift in &other_shifts {
        write_override(api, &schedule, &current, shift.start, shift.end, req.dry_run)?;
        overrides += 1;
    }

    Ok(SwapOutcome::Completed { overrides })
}

/// Filtre côté client les créneaux d'un utilisateur, en conservant l'ordre
/// natif du service.
fn user_entries(entries: Vec<ShiftEntry>, user_id: &UserId) -> Vec<ShiftEntry> {
    entries
        .into_iter()
        .filter(|e| &e.user_id == user_id)
        .collect()
}

/// Soumet (ou simule) la création d'un override attribuant `[start, end)` à
/// `user`. En dry-run, aucun appel réseau : l'intention est seulement
/// journalisée et l'appel réussit inconditionnellement.
fn write_override<A: ScheduleApi>(
    api: &A,
    schedule: &ScheduleId,
    user: &User,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    dry_run: bool,
) -> Result<(), ApiError> {
    if dry_run {
        info!(
            user = %user.summary,
            %start,
            %end,
            schedule = %schedule.as_str(),
            "dry run: would create override"
        );
        return Ok(());
    }
    info!(
        user = %user.summary,
        %start,
        %end,
        schedule = %schedule.as_str(),
        "creating override"
    );
    api.create_override(
        schedule,
        &OverrideSpec {
            user: user.clone(),
            start,
            end,
        },
    )
}
