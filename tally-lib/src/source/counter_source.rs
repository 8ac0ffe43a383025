use super::FetchError;

/// Something that can report the current value of the tracked counter.
pub trait CounterSource {
    /// Retrieve the counter value.
    fn fetch(&self) -> impl Future<Output = Result<i64, FetchError>> + Send;
}
