// src/web/pages.rs
// Server-rendered pages

use axum::{
    extract::{Query, State},
    response::Html,
};
use minijinja::{Environment, context};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{Result, TimecallError};
use crate::web::state::AppState;

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("../../templates/index.html"))
        .expect("index template parses");
    env
});

#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub character_id: Option<String>,
}

/// Landing page: the call screen for the selected character.
///
/// GET /?character_id=einstein
///
/// An unknown or absent character_id falls back to the default figure.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>> {
    let requested = params
        .character_id
        .as_deref()
        .unwrap_or(&state.config.default_character);
    let character = state
        .roster
        .lookup(requested)
        .or_else(|| state.roster.lookup(&state.config.default_character))
        .ok_or_else(|| {
            TimecallError::Config(format!(
                "default character '{}' is not in the roster",
                state.config.default_character
            ))
        })?;

    let template = TEMPLATES.get_template("index.html")?;
    let html = template.render(context! {
        character => character,
        characters => state.roster.list_all(),
    })?;

    Ok(Html(html))
}
