//! JSON REST handlers for haikus.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use haikus_app::ports::HaikuRepository;
use haikus_domain::date::parse_date;
use haikus_domain::error::HaikuError;
use haikus_domain::haiku::Haiku;
use haikus_domain::id::HaikuId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a haiku. Dates are `YYYY-MM-DD` strings.
#[derive(Deserialize)]
pub struct CreateHaikuRequest {
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub text: String,
    pub year_of_release: String,
    pub date_uploaded: Option<String>,
}

impl CreateHaikuRequest {
    fn into_haiku(self) -> Result<Haiku, HaikuError> {
        let mut builder = Haiku::builder()
            .title(self.title)
            .author(self.author)
            .text(self.text)
            .year_of_release(parse_date(&self.year_of_release)?);
        if let Some(id) = self.id {
            builder = builder.id(id);
        }
        if let Some(date) = self.date_uploaded {
            builder = builder.date_uploaded(parse_date(&date)?);
        }
        builder.build()
    }
}

/// `POST /api/haikus` accepts one haiku or an array inserted as one batch.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum CreateRequest {
    One(CreateHaikuRequest),
    Many(Vec<CreateHaikuRequest>),
}

/// Request body for replacing a haiku's fields.
#[derive(Deserialize)]
pub struct UpdateHaikuRequest {
    pub title: String,
    pub author: String,
    pub text: String,
    pub year_of_release: String,
    pub date_uploaded: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Haiku>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Haiku>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Haiku>),
    CreatedMany(Json<Vec<Haiku>>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::CreatedMany(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/haikus`
pub async fn list<HR>(State(state): State<AppState<HR>>) -> Result<ListResponse, ApiError>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    let haikus = state.haiku_service.list_haikus().await?;
    Ok(ListResponse::Ok(Json(haikus)))
}

/// `GET /api/haikus/{id}`
pub async fn get<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    let id = HaikuId::from_str(&id)?;
    let haiku = state.haiku_service.get_haiku(id).await?;
    Ok(GetResponse::Ok(Json(haiku)))
}

/// `POST /api/haikus`
pub async fn create<HR>(
    State(state): State<AppState<HR>>,
    Json(req): Json<CreateRequest>,
) -> Result<CreateResponse, ApiError>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    match req {
        CreateRequest::One(req) => {
            let created = state.haiku_service.create_haiku(req.into_haiku()?).await?;
            Ok(CreateResponse::Created(Json(created)))
        }
        CreateRequest::Many(reqs) => {
            let haikus = reqs
                .into_iter()
                .map(CreateHaikuRequest::into_haiku)
                .collect::<Result<Vec<_>, _>>()?;
            let created = state.haiku_service.create_haikus(haikus).await?;
            Ok(CreateResponse::CreatedMany(Json(created)))
        }
    }
}

/// `PUT /api/haikus/{id}`
pub async fn update<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateHaikuRequest>,
) -> Result<GetResponse, ApiError>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    let id = HaikuId::from_str(&id)?;
    let existing = state.haiku_service.get_haiku(id).await?;
    let haiku = Haiku {
        id: existing.id,
        title: req.title,
        author: req.author,
        text: req.text,
        year_of_release: parse_date(&req.year_of_release)?,
        date_uploaded: parse_date(&req.date_uploaded)?,
    };
    let updated = state.haiku_service.update_haiku(haiku).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/haikus/{id}`
pub async fn delete<HR>(
    State(state): State<AppState<HR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    HR: HaikuRepository + Send + Sync + 'static,
{
    let id = HaikuId::from_str(&id)?;
    state.haiku_service.delete_haiku_by_id(id).await?;
    Ok(DeleteResponse::NoContent)
}
