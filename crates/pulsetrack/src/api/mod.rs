//! Typed client for the remote GraphQL API.
//!
//! The transport is a trait seam so the client can be exercised without a
//! network. The production transport POSTs the standard `{query, variables}`
//! envelope with the session's bearer token; GraphQL `errors` come back as a
//! typed remote error rather than being logged and discarded.

pub mod operations;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Connection, Individual, Oximeter, PulseOximetryRange};
use crate::session::Session;

use operations::{
    CreateIndividualInput, CreateOximeterInput, CreatePulseOximetryRangeInput,
    DeleteIndividualInput, DeleteOximeterInput, DeletePulseOximetryRangeInput, OperationDoc,
    UpdateIndividualInput, UpdateOximeterInput, UpdatePulseOximetryRangeInput,
};

/// An optimistic-concurrency condition attached to a mutation.
///
/// The remote schema accepts a model-specific condition object; it is carried
/// opaquely since the client never inspects it.
pub type Condition = Value;

/// A GraphQL request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQlRequest {
    /// The operation document.
    pub query: String,
    /// Name of the operation within the document.
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
    /// Operation variables.
    pub variables: Value,
}

/// Transport seam for executing GraphQL requests.
///
/// Implementors return the raw response envelope (`data` / `errors`); the
/// client is responsible for interpreting it.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Execute a request and return the response envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be delivered.
    async fn execute(&self, request: GraphQlRequest) -> Result<Value>;
}

/// Production transport over HTTP.
#[derive(Debug)]
pub struct HttpTransport {
    endpoint: reqwest::Url,
    client: reqwest::Client,
    token: String,
}

impl HttpTransport {
    /// Build the HTTP transport from configuration and a signed-in session.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is missing/invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config, session: &Session) -> Result<Self> {
        let endpoint = config.api_endpoint()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            endpoint,
            client,
            token: session.token().to_string(),
        })
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Typed client for the remote API.
pub struct ApiClient {
    transport: Box<dyn GraphQlTransport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over the given transport.
    #[must_use]
    pub fn new(transport: Box<dyn GraphQlTransport>) -> Self {
        Self { transport }
    }

    /// Create a client over HTTP from configuration and a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be constructed.
    pub fn over_http(config: &Config, session: &Session) -> Result<Self> {
        Ok(Self::new(Box::new(HttpTransport::new(config, session)?)))
    }

    /// Create an individual record.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn create_individual(
        &self,
        input: CreateIndividualInput,
        condition: Option<Condition>,
    ) -> Result<Individual> {
        self.mutate(operations::create_individual(), &input, condition)
            .await
    }

    /// Update an existing individual record.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn update_individual(
        &self,
        input: UpdateIndividualInput,
        condition: Option<Condition>,
    ) -> Result<Individual> {
        self.mutate(operations::update_individual(), &input, condition)
            .await
    }

    /// Delete an individual record.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn delete_individual(
        &self,
        input: DeleteIndividualInput,
        condition: Option<Condition>,
    ) -> Result<Individual> {
        self.mutate(operations::delete_individual(), &input, condition)
            .await
    }

    /// Record a new pulse-oximetry reading.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn create_oximeter(
        &self,
        input: CreateOximeterInput,
        condition: Option<Condition>,
    ) -> Result<Oximeter> {
        self.mutate(operations::create_oximeter(), &input, condition)
            .await
    }

    /// Update an existing reading.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn update_oximeter(
        &self,
        input: UpdateOximeterInput,
        condition: Option<Condition>,
    ) -> Result<Oximeter> {
        self.mutate(operations::update_oximeter(), &input, condition)
            .await
    }

    /// Delete a reading.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn delete_oximeter(
        &self,
        input: DeleteOximeterInput,
        condition: Option<Condition>,
    ) -> Result<Oximeter> {
        self.mutate(operations::delete_oximeter(), &input, condition)
            .await
    }

    /// Create an alert range for an individual.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn create_pulse_oximetry_range(
        &self,
        input: CreatePulseOximetryRangeInput,
        condition: Option<Condition>,
    ) -> Result<PulseOximetryRange> {
        self.mutate(operations::create_pulse_oximetry_range(), &input, condition)
            .await
    }

    /// Update an alert range.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn update_pulse_oximetry_range(
        &self,
        input: UpdatePulseOximetryRangeInput,
        condition: Option<Condition>,
    ) -> Result<PulseOximetryRange> {
        self.mutate(operations::update_pulse_oximetry_range(), &input, condition)
            .await
    }

    /// Delete an alert range.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn delete_pulse_oximetry_range(
        &self,
        input: DeletePulseOximetryRangeInput,
        condition: Option<Condition>,
    ) -> Result<PulseOximetryRange> {
        self.mutate(operations::delete_pulse_oximetry_range(), &input, condition)
            .await
    }

    /// Fetch a single individual by id, with nested readings and ranges.
    ///
    /// Returns `None` when no record exists for the id.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn get_individual(&self, id: Uuid) -> Result<Option<Individual>> {
        let op = operations::get_individual();
        let variables = serde_json::json!({ "id": id });
        let data = self.execute(op, variables).await?;
        if data.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(data)?))
    }

    /// Fetch a page of individuals.
    ///
    /// # Errors
    ///
    /// Returns a typed error on transport failure or remote rejection.
    pub async fn list_individuals(
        &self,
        limit: Option<u32>,
        next_token: Option<String>,
    ) -> Result<Connection<Individual>> {
        let op = operations::list_individuals();
        let variables = serde_json::json!({ "limit": limit, "nextToken": next_token });
        let data = self.execute(op, variables).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Run a mutation and decode the record it returns.
    async fn mutate<I, R>(
        &self,
        op: OperationDoc,
        input: &I,
        condition: Option<Condition>,
    ) -> Result<R>
    where
        I: Serialize + Sync,
        R: DeserializeOwned,
    {
        let variables = mutation_variables(input, condition)?;
        let data = self.execute(op, variables).await?;
        if data.is_null() {
            return Err(Error::invalid_response("mutation returned no record"));
        }
        Ok(serde_json::from_value(data)?)
    }

    /// Execute an operation and extract its data field from the envelope.
    async fn execute(&self, op: OperationDoc, variables: Value) -> Result<Value> {
        debug!(operation = op.name, "executing GraphQL operation");

        let envelope = self
            .transport
            .execute(GraphQlRequest {
                query: op.document,
                operation_name: op.name,
                variables,
            })
            .await?;

        if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.get("message")
                            .and_then(Value::as_str)
                            .unwrap_or("unknown error")
                            .to_string()
                    })
                    .collect();
                return Err(Error::remote(messages));
            }
        }

        envelope
            .get("data")
            .and_then(|data| data.get(op.data_field))
            .cloned()
            .ok_or_else(|| Error::invalid_response(format!("missing data.{}", op.data_field)))
    }
}

/// Assemble the `{input, condition}` variables object for a mutation.
fn mutation_variables<I: Serialize>(input: &I, condition: Option<Condition>) -> Result<Value> {
    let mut variables = serde_json::Map::new();
    variables.insert("input".to_string(), serde_json::to_value(input)?);
    if let Some(condition) = condition {
        variables.insert("condition".to_string(), condition);
    }
    Ok(Value::Object(variables))
}
