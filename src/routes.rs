use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::Form;
use serde::Deserialize;
use tracing::info;

use crate::{
    error::AppError,
    models::RawSubmission,
    pipeline::{apply_filters, distinct_clubs, merge_unique, Stats},
    render,
    state::AppState,
    validate::validate,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub club: Option<String>,
}

/// Non-POST access to the submission endpoint: an empty form.
pub async fn form_handler() -> Html<String> {
    Html(render::form_page(&[], &RawSubmission::default()))
}

/// Validate the submission; on success append it and confirm, otherwise
/// redisplay the form with the collected errors and the prior input.
pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(raw): Form<RawSubmission>,
) -> Result<Html<String>, AppError> {
    let raw = raw.trimmed();

    match validate(&raw) {
        Err(errors) => Ok(Html(render::form_page(&errors, &raw))),
        Ok(new) => {
            // Lock held across the read-modify-write so in-process
            // submissions cannot lose each other's appends.
            let mut transient = state.transient.lock().await;
            let record = state.store.append(new)?;
            transient.push(record.clone());

            info!("Registered {} for {}", record.email, record.club);

            let all = merge_unique(&state.store.load_all(), &transient);
            Ok(Html(render::success_page(&record, &all)))
        }
    }
}

/// The searchable, filterable listing of all registrations.
pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Html<String> {
    let stored = state.store.load_all();
    let transient = state.transient.lock().await;
    let unique = merge_unique(&stored, &transient);

    let search = normalize(params.search.as_deref());
    let club = normalize(params.club.as_deref());

    let filtered = apply_filters(&unique, search, club);
    let clubs = distinct_clubs(&unique);
    let stats = Stats {
        total: unique.len(),
        clubs: clubs.len(),
        shown: filtered.len(),
    };

    Html(render::listing_page(
        &filtered,
        &stats,
        &clubs,
        search.unwrap_or(""),
        club.unwrap_or(""),
    ))
}

/// A blank or absent query parameter means "no filter".
fn normalize(param: Option<&str>) -> Option<&str> {
    param.map(str::trim).filter(|s| !s.is_empty())
}
