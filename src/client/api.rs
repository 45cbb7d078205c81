use actix_web::client::{Client, ClientRequest};
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    appointments::{requests::BookAppointmentRequest, responses::AppointmentItem},
    doctors::responses::DoctorItem,
    patients::{
        requests::RegisterPatientRequest,
        responses::{PatientItem, PatientRecord},
    },
    protocol::InsertResponse,
};

const MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024;

/// The calls the front-end makes against the clinic API. Every call is a
/// single round trip; a non-2xx answer is an error.
#[async_trait(?Send)]
pub trait ClinicApi {
    async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentItem>>;

    async fn list_patients(&self) -> anyhow::Result<Vec<PatientItem>>;

    async fn list_doctors(&self) -> anyhow::Result<Vec<DoctorItem>>;

    async fn register_patient(
        &self,
        info: &RegisterPatientRequest,
    ) -> anyhow::Result<InsertResponse>;

    async fn search_patients(&self, term: &str) -> anyhow::Result<Vec<PatientRecord>>;

    async fn book_appointment(
        &self,
        info: &BookAppointmentRequest,
    ) -> anyhow::Result<InsertResponse>;
}

pub struct HttpApi {
    base_url: String,
    client: Client,
}

impl HttpApi {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: ClientRequest,
        body: Option<serde_json::Value>,
    ) -> anyhow::Result<T> {
        let target = format!("{} {}", request.get_method(), request.get_uri());
        let sent = match body {
            Some(body) => request.send_json(&body).await,
            None => request.send().await,
        };
        let mut response = sent.map_err(|e| anyhow!("{}: {}", target, e))?;
        if !response.status().is_success() {
            bail!("{} answered {}", target, response.status());
        }
        response
            .json::<T>()
            .limit(MAX_RESPONSE_BYTES)
            .await
            .map_err(|e| anyhow!("{}: unreadable body: {}", target, e))
    }

    async fn get_json<T: DeserializeOwned>(&self, request: ClientRequest) -> anyhow::Result<T> {
        self.send(request, None).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = serde_json::to_value(body)?;
        self.send(self.client.post(self.url(path)), Some(body)).await
    }
}

#[async_trait(?Send)]
impl ClinicApi for HttpApi {
    async fn list_appointments(&self) -> anyhow::Result<Vec<AppointmentItem>> {
        self.get_json(self.client.get(self.url("/citas"))).await
    }

    async fn list_patients(&self) -> anyhow::Result<Vec<PatientItem>> {
        self.get_json(self.client.get(self.url("/pacientes"))).await
    }

    async fn list_doctors(&self) -> anyhow::Result<Vec<DoctorItem>> {
        self.get_json(self.client.get(self.url("/medicos"))).await
    }

    async fn register_patient(
        &self,
        info: &RegisterPatientRequest,
    ) -> anyhow::Result<InsertResponse> {
        self.post_json("/pacientes", info).await
    }

    async fn search_patients(&self, term: &str) -> anyhow::Result<Vec<PatientRecord>> {
        let request = self
            .client
            .get(self.url("/pacientes/buscar"))
            .query(&[("q", term)])?;
        self.get_json(request).await
    }

    async fn book_appointment(
        &self,
        info: &BookAppointmentRequest,
    ) -> anyhow::Result<InsertResponse> {
        self.post_json("/citas", info).await
    }
}
