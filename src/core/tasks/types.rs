use crate::core::fetch::FetchOutcome;

/// Errors are stringified on the worker side before crossing the channel.
pub type CatFetchResult = Result<FetchOutcome, String>;

#[derive(Debug, Clone)]
pub enum TaskResult {
    CatFetch(CatFetchResult),
}
