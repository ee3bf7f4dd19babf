//! Data-access module: one async function per API operation.
//!
//! Every call is a single attempt. Transport failures become
//! `ApiError::Network`; non-2xx answers go through `ApiError::from_response`,
//! which keeps the server's `{ "message": ... }` when the body has one.
//! Operations other than sign-up and sign-in take the session token
//! explicitly.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::api::{Endpoint, Grouping, Method};
use common::auth::AuthToken;
use common::model::{Category, Discipline, Teacher, TestsByDiscipline, TestsByTeacher};
use common::requests::{
    CategoriesResponse, CreateTestRequest, DisciplinesResponse, SignInResponse,
    TeachersByDisciplineResponse, TeachersResponse, TestsByDisciplineResponse,
    TestsByTeacherResponse, UserCredentials,
};
use common::{ApiError, Result};

use crate::config::api_config;

/// Starts a request for `endpoint` with the bearer header it needs. Fails
/// before anything is sent when an authenticated endpoint has no token.
fn request(endpoint: &Endpoint, token: Option<&AuthToken>) -> Result<RequestBuilder> {
    let authorization = endpoint.authorization(token)?;
    let url = endpoint.url(&api_config()?.base_url)?;
    let builder = match endpoint.method() {
        Method::Get => Request::get(url.as_str()),
        Method::Post => Request::post(url.as_str()),
        Method::Patch => Request::patch(url.as_str()),
    };

    Ok(match authorization {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    })
}

async fn dispatch(request: Request) -> Result<Response> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn send(endpoint: Endpoint, token: Option<&AuthToken>) -> Result<Response> {
    let request = request(&endpoint, token)?
        .build()
        .map_err(|err| ApiError::Request(err.to_string()))?;
    dispatch(request).await
}

async fn send_json<B: Serialize>(
    endpoint: Endpoint,
    token: Option<&AuthToken>,
    body: &B,
) -> Result<Response> {
    let request = request(&endpoint, token)?
        .json(body)
        .map_err(|err| ApiError::Request(err.to_string()))?;
    dispatch(request).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn sign_up(credentials: &UserCredentials) -> Result<()> {
    send_json(Endpoint::SignUp, None, credentials).await?;
    Ok(())
}

pub async fn sign_in(credentials: &UserCredentials) -> Result<SignInResponse> {
    let response = send_json(Endpoint::SignIn, None, credentials).await?;
    decode(response).await
}

pub async fn get_tests_by_discipline(token: &AuthToken) -> Result<Vec<TestsByDiscipline>> {
    let response = send(Endpoint::Tests(Grouping::Disciplines), Some(token)).await?;
    let body: TestsByDisciplineResponse = decode(response).await?;
    Ok(body.tests)
}

pub async fn get_tests_by_teacher(token: &AuthToken) -> Result<Vec<TestsByTeacher>> {
    let response = send(Endpoint::Tests(Grouping::Teachers), Some(token)).await?;
    let body: TestsByTeacherResponse = decode(response).await?;
    Ok(body.tests)
}

pub async fn get_categories(token: &AuthToken) -> Result<Vec<Category>> {
    let response = send(Endpoint::Categories, Some(token)).await?;
    let body: CategoriesResponse = decode(response).await?;
    Ok(body.categories)
}

pub async fn get_teachers(token: &AuthToken) -> Result<Vec<Teacher>> {
    let response = send(Endpoint::Teachers, Some(token)).await?;
    let body: TeachersResponse = decode(response).await?;
    Ok(body.teachers)
}

pub async fn get_disciplines(token: &AuthToken) -> Result<Vec<Discipline>> {
    let response = send(Endpoint::Disciplines, Some(token)).await?;
    let body: DisciplinesResponse = decode(response).await?;
    Ok(body.disciplines)
}

/// Names of the teachers who lecture `discipline`.
pub async fn get_teachers_by_discipline(
    discipline: &str,
    token: &AuthToken,
) -> Result<Vec<String>> {
    let endpoint = Endpoint::TeachersByDiscipline(discipline.to_string());
    let response = send(endpoint, Some(token)).await?;
    let body: TeachersByDisciplineResponse = decode(response).await?;
    Ok(body.teacher_names())
}

/// Stores a new test. The API answers without the created record, so
/// callers reload to see it.
pub async fn add_test(body: &CreateTestRequest, token: &AuthToken) -> Result<()> {
    send_json(Endpoint::CreateTest, Some(token), body).await?;
    Ok(())
}

pub async fn count_view(id: u64, token: &AuthToken) -> Result<()> {
    send(Endpoint::CountView(id), Some(token)).await?;
    Ok(())
}
