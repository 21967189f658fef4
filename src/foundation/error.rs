pub type AtelierResult<T> = Result<T, AtelierError>;

#[derive(thiserror::Error, Debug)]
pub enum AtelierError {
    #[error("layout error: {0}")]
    Layout(String),

    #[error("record error: {0}")]
    Record(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AtelierError {
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    pub fn record(msg: impl Into<String>) -> Self {
        Self::Record(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
