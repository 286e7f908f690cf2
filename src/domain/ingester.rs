use serde::Serialize;

/// Body of `POST /ingester/publish`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PublishRequest {
    pub numbers: Vec<f64>,
}
