#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read campaign document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to serialize export payload: {0}")]
    Serialization(serde_json::Error),
    #[error(transparent)]
    Type(#[from] warroom_types::TypeError),
}

pub type CampaignResult<T> = std::result::Result<T, CampaignError>;
