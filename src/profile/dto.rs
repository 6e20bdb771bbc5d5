use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetRestrictionRequest {
    pub value: f64,
}
