//! Capability probes
//!
//! Optional token functions (owner, fees, limits) may simply not exist. A probe keeps
//! "the function is not there" apart from "the read failed", so fallback chains stay
//! explicit instead of swallowing every error.

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use futures_util::future::BoxFuture;

use crate::providers::reader::{ChainReader, ReadError};

/// Outcome of one optional read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe<T> {
    /// Function exists and returned a decodable value
    Found(T),
    /// Function reverted or returned nothing
    Absent,
    /// Transport, timeout, RPC or decode failure
    Failed(ReadError),
}

impl<T> Probe<T> {
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Probe<U> {
        match self {
            Probe::Found(value) => Probe::Found(f(value)),
            Probe::Absent => Probe::Absent,
            Probe::Failed(e) => Probe::Failed(e),
        }
    }

    /// For required reads: absence becomes an error
    pub fn into_result(self) -> Result<T, ReadError> {
        match self {
            Probe::Found(value) => Ok(value),
            Probe::Absent => Err(ReadError::Reverted("function not implemented".to_string())),
            Probe::Failed(e) => Err(e),
        }
    }

    /// Absence becomes `None`, failures stay errors
    pub fn into_option(self) -> Result<Option<T>, ReadError> {
        match self {
            Probe::Found(value) => Ok(Some(value)),
            Probe::Absent => Ok(None),
            Probe::Failed(e) => Err(e),
        }
    }
}

/// Encode `call`, run it against `to` and decode the return data
pub async fn probe<R, C>(reader: &R, to: Address, call: C) -> Probe<C::Return>
where
    R: ChainReader,
    C: SolCall,
{
    match reader.call(to, call.abi_encode().into()).await {
        Ok(raw) if raw.is_empty() => Probe::Absent,
        Ok(raw) => match C::abi_decode_returns(&raw, true) {
            Ok(decoded) => Probe::Found(decoded),
            Err(e) => Probe::Failed(ReadError::Decode(e.to_string())),
        },
        Err(e) if e.is_revert() => Probe::Absent,
        Err(e) => Probe::Failed(e),
    }
}

/// Required typed read
pub async fn read<R, C>(reader: &R, to: Address, call: C) -> Result<C::Return, ReadError>
where
    R: ChainReader,
    C: SolCall,
{
    probe(reader, to, call).await.into_result()
}

/// Walk probes in order: the first `Found` wins, `Failed` stops the walk,
/// `Absent` moves on. All absent yields `Absent`.
pub async fn first_available<'a, T>(probes: Vec<BoxFuture<'a, Probe<T>>>) -> Probe<T> {
    for candidate in probes {
        match candidate.await {
            Probe::Absent => continue,
            outcome => return outcome,
        }
    }
    Probe::Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    fn ready<T: Send + 'static>(p: Probe<T>) -> BoxFuture<'static, Probe<T>> {
        async move { p }.boxed()
    }

    #[tokio::test]
    async fn test_first_available_skips_absent() {
        let outcome = first_available(vec![ready(Probe::Absent), ready(Probe::Found(7u8))]).await;
        assert_eq!(outcome, Probe::Found(7));
    }

    #[tokio::test]
    async fn test_first_available_stops_on_failure() {
        let outcome = first_available(vec![
            ready(Probe::Failed(ReadError::Timeout)),
            ready(Probe::Found(1u8)),
        ])
        .await;
        assert_eq!(outcome, Probe::Failed(ReadError::Timeout));
    }

    #[tokio::test]
    async fn test_all_absent() {
        let outcome: Probe<u8> = first_available(vec![ready(Probe::Absent), ready(Probe::Absent)]).await;
        assert_eq!(outcome, Probe::Absent);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Probe::Found(2u8).map(|v| v * 2), Probe::Found(4));
        assert_eq!(Probe::<u8>::Absent.into_option(), Ok(None));
        assert!(Probe::<u8>::Absent.into_result().unwrap_err().is_revert());
    }
}
