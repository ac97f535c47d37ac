use chrono::{Duration, NaiveDate};

/// Largeur de la fenêtre interrogée, en jours. 8 et non 7 : le jour
/// supplémentaire capture les créneaux rendus qui chevauchent la frontière de
/// semaine. Les créneaux tombant dans ce 8e jour ne sont PAS exclus ensuite —
/// bizarrerie assumée, à filtrer côté appelant si besoin de bornes exactes.
pub const FETCH_WINDOW_DAYS: i64 = 8;

/// Fenêtre d'interrogation `[start, start + 8 jours)` pour une semaine
/// commençant à `week_start`.
pub fn fetch_window(week_start: NaiveDate) -> (NaiveDate, NaiveDate) {
    (week_start, week_start + Duration::days(FETCH_WINDOW_DAYS))
}
