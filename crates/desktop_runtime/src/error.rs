use desktop_wm::WmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("window catalog could not be decoded: {0}")]
    Catalog(#[source] serde_json::Error),
    #[error("desktop configuration could not be decoded: {0}")]
    Config(#[source] serde_json::Error),
    #[error("window `{name}` could not be registered: {source}")]
    Register {
        name: String,
        #[source]
        source: WmError,
    },
}
