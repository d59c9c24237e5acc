//! Cattle resource client.

use super::client::{encode, ApiClient};
use super::error::ApiResult;
use super::transport::Method;
use crate::models::{
    Animal, CattleCreate, CattleUpdate, Estado, HealthRecordCreate, MessageResponse,
    WeightRecordCreate,
};

const CATTLE_PATH: &str = "/cattle";

/// CRUD over `/cattle`. Every call is a single stateless request.
#[derive(Clone)]
pub struct CattleClient {
    api: ApiClient,
}

impl CattleClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All records, or only those whose `estado` equals `estado`
    pub async fn list(&self, estado: Option<Estado>) -> ApiResult<Vec<Animal>> {
        let mut request = self.api.request(Method::Get, CATTLE_PATH);
        if let Some(estado) = estado {
            request = request.query("estado", estado.as_str());
        }

        let cattle: Vec<Animal> = self.api.send_json(request).await?;
        tracing::debug!("Fetched {} cattle records", cattle.len());
        Ok(cattle)
    }

    pub async fn get(&self, id: &str) -> ApiResult<Animal> {
        self.api
            .send_json(self.api.request(Method::Get, record_path(id)))
            .await
    }

    /// Create a record; the server assigns its id
    pub async fn create(&self, draft: &CattleCreate) -> ApiResult<Animal> {
        let request = self
            .api
            .request(Method::Post, CATTLE_PATH)
            .json(encode(draft)?);

        let animal: Animal = self.api.send_json(request).await?;
        tracing::info!("Created cattle {} ({})", animal.identificador, animal.id);
        Ok(animal)
    }

    /// Partial update; fields left unset are not touched
    pub async fn update(&self, id: &str, changes: &CattleUpdate) -> ApiResult<Animal> {
        let request = self
            .api
            .request(Method::Put, record_path(id))
            .json(encode(changes)?);

        self.api.send_json(request).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        self.api
            .send_empty(self.api.request(Method::Delete, record_path(id)))
            .await?;
        tracing::info!("Deleted cattle {}", id);
        Ok(())
    }

    pub async fn add_health_record(&self, record: &HealthRecordCreate) -> ApiResult<MessageResponse> {
        let request = self
            .api
            .request(Method::Post, format!("{}/health-records", CATTLE_PATH))
            .json(encode(record)?);

        self.api.send_json(request).await
    }

    pub async fn add_weight_record(&self, record: &WeightRecordCreate) -> ApiResult<MessageResponse> {
        let request = self
            .api
            .request(Method::Post, format!("{}/weight-records", CATTLE_PATH))
            .json(encode(record)?);

        self.api.send_json(request).await
    }
}

fn record_path(id: &str) -> String {
    format!("{}/{}", CATTLE_PATH, urlencoding::encode(id))
}
