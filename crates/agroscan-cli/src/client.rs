//! Blocking HTTP client for the AgroScan REST API.

use agroscan_core::models::{
    CreateFieldRequest, CreateMissionRequest, Field, Mission, MissionReport, MissionTelemetry,
    Observation,
};
use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            bail!("server returned {}: {}", status, body);
        }
        Ok(response)
    }

    pub fn create_field(&self, req: &CreateFieldRequest) -> Result<Field> {
        let response = self
            .client
            .post(format!("{}/v1/fields", self.base_url))
            .json(req)
            .send()
            .context("create field request failed")?;
        Self::check(response)?.json().context("parse field")
    }

    pub fn list_fields(&self) -> Result<Vec<Field>> {
        let response = self
            .client
            .get(format!("{}/v1/fields", self.base_url))
            .send()
            .context("list fields request failed")?;
        Self::check(response)?.json().context("parse fields")
    }

    pub fn create_mission(&self, req: &CreateMissionRequest) -> Result<Mission> {
        let response = self
            .client
            .post(format!("{}/v1/missions", self.base_url))
            .json(req)
            .send()
            .context("create mission request failed")?;
        Self::check(response)?.json().context("parse mission")
    }

    pub fn start_mission(&self, mission_id: i64) -> Result<MissionTelemetry> {
        let response = self
            .client
            .post(format!("{}/v1/missions/{}/start", self.base_url, mission_id))
            .json(&serde_json::json!({}))
            .send()
            .context("start mission request failed")?;
        Self::check(response)?.json().context("parse telemetry")
    }

    pub fn mission_telemetry(&self, mission_id: i64) -> Result<MissionTelemetry> {
        let response = self
            .client
            .get(format!(
                "{}/v1/missions/{}/telemetry",
                self.base_url, mission_id
            ))
            .send()
            .context("telemetry request failed")?;
        Self::check(response)?.json().context("parse telemetry")
    }

    pub fn mission_observations(&self, mission_id: i64) -> Result<Vec<Observation>> {
        let response = self
            .client
            .get(format!(
                "{}/v1/missions/{}/observations",
                self.base_url, mission_id
            ))
            .send()
            .context("observations request failed")?;
        Self::check(response)?.json().context("parse observations")
    }

    pub fn mission_report(&self, mission_id: i64) -> Result<MissionReport> {
        let response = self
            .client
            .get(format!(
                "{}/v1/missions/{}/report",
                self.base_url, mission_id
            ))
            .send()
            .context("report request failed")?;
        Self::check(response)?.json().context("parse report")
    }
}
