use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tera::{Context, Tera};
use validator::Validate;

use super::payload::EntryPayload;
use crate::{
    data::models::{EntryError, NewEntry},
    data::repositories::EntryRepository,
    utils::{paths, render_template},
};

pub type EntriesState = (Arc<dyn EntryRepository>, Arc<Tera>);

fn base_context() -> Context {
    let mut context = Context::new();
    context.insert("entries_path", &paths::entries_path());
    context.insert("new_entry_path", &paths::new_entry_path());
    context
}

pub async fn index(
    State((repo, tera)): State<EntriesState>,
) -> Result<Html<String>, EntryError> {
    let entries = repo.all()?;

    let mut context = base_context();
    context.insert("title", "Entries");
    context.insert("entries", &entries);
    render_template(&tera, "entries/index.html", context)
}

pub async fn show(
    State((repo, tera)): State<EntriesState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, EntryError> {
    let entry = repo.find(id)?.ok_or(EntryError::NotFound(id))?;

    let mut context = base_context();
    context.insert("title", &entry.word);
    context.insert("entry_path", &paths::entry_path(id));
    context.insert("edit_entry_path", &paths::edit_entry_path(id));
    context.insert("entry", &entry);
    render_template(&tera, "entries/show.html", context)
}

pub async fn new(
    State((_repo, tera)): State<EntriesState>,
) -> Result<Html<String>, EntryError> {
    let mut context = base_context();
    context.insert("title", "New entry");
    context.insert("entry", &NewEntry::default());
    context.insert("form_action", &paths::entries_path());
    context.insert("form_method", "");
    render_template(&tera, "entries/new.html", context)
}

pub async fn create(
    State((repo, _tera)): State<EntriesState>,
    payload: EntryPayload,
) -> Result<Redirect, EntryError> {
    let entry = payload.require()?.into_new_entry();

    if let Err(errors) = entry.validate() {
        log::warn!("Entry rejected on create: {}", errors);
        return Ok(Redirect::to(&paths::new_entry_path()));
    }

    let created = repo.create(&entry)?;
    log::info!("Created entry {} ({})", created.id, created.word);
    Ok(Redirect::to(&paths::entries_path()))
}

pub async fn edit(
    State((repo, tera)): State<EntriesState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, EntryError> {
    let entry = repo.find(id)?.ok_or(EntryError::NotFound(id))?;

    let mut context = base_context();
    context.insert("title", "Editing entry");
    context.insert("entry_path", &paths::entry_path(id));
    context.insert("entry", &entry);
    context.insert("form_action", &paths::entry_path(id));
    context.insert("form_method", "patch");
    render_template(&tera, "entries/edit.html", context)
}

pub async fn update(
    State((repo, _tera)): State<EntriesState>,
    Path(id): Path<i32>,
    payload: EntryPayload,
) -> Result<Redirect, EntryError> {
    apply_update(repo.as_ref(), id, payload)
}

pub async fn destroy(
    State((repo, _tera)): State<EntriesState>,
    Path(id): Path<i32>,
) -> Result<Redirect, EntryError> {
    apply_destroy(repo.as_ref(), id)
}

/// `POST /entries/{id}` from HTML forms, dispatched on the `_method` field.
pub async fn override_member(
    State((repo, _tera)): State<EntriesState>,
    Path(id): Path<i32>,
    payload: EntryPayload,
) -> Result<Response, EntryError> {
    let method = payload.method.as_deref().map(str::to_ascii_lowercase);
    match method.as_deref() {
        Some("patch") | Some("put") => {
            Ok(apply_update(repo.as_ref(), id, payload)?.into_response())
        }
        Some("delete") => Ok(apply_destroy(repo.as_ref(), id)?.into_response()),
        other => {
            log::warn!("Unsupported method override {:?} for entry {}", other, id);
            Err(EntryError::MethodNotAllowed)
        }
    }
}

fn apply_update(
    repo: &dyn EntryRepository,
    id: i32,
    payload: EntryPayload,
) -> Result<Redirect, EntryError> {
    let entry = repo.find(id)?.ok_or(EntryError::NotFound(id))?;
    let changes = payload.require()?.into_changes();

    if let Err(errors) = entry.with_changes(&changes).validate() {
        log::warn!("Entry {} rejected on update: {}", id, errors);
        return Ok(Redirect::to(&paths::entry_path(id)));
    }

    repo.update(id, &changes)?.ok_or(EntryError::NotFound(id))?;
    log::info!("Updated entry {}", id);
    Ok(Redirect::to(&paths::entry_path(id)))
}

fn apply_destroy(repo: &dyn EntryRepository, id: i32) -> Result<Redirect, EntryError> {
    if !repo.destroy(id)? {
        return Err(EntryError::NotFound(id));
    }
    log::info!("Destroyed entry {}", id);
    Ok(Redirect::to(&paths::entries_path()))
}

pub fn entries_router(repo: Arc<dyn EntryRepository>, tera: Arc<Tera>) -> Router {
    Router::new()
        .route("/entries", get(index).post(create))
        .route("/entries/new", get(new))
        .route(
            "/entries/{id}",
            get(show)
                .patch(update)
                .put(update)
                .delete(destroy)
                .post(override_member),
        )
        .route("/entries/{id}/edit", get(edit))
        .with_state((repo, tera))
}
