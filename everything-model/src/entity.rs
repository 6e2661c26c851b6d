use crate::error::{ModelError, ModelResult};
use crate::merge::{Partial, into_partial, merge};
use everything_types::Kind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Anything an [`Envelope`](crate::Envelope) can wrap.
///
/// Implemented for every [`Schema`] type and for [`Thing`](crate::Thing),
/// the sum of all of them.
pub trait Entity: Serialize + Sized {
    /// The kind of this value. For a schema type this is constant.
    fn kind(&self) -> Kind;

    /// Builds the entity for `kind` from raw wire data, applying defaults.
    fn decode(kind: Kind, data: Value) -> ModelResult<Self>;
}

/// A concrete entity schema: a flat record of defaulted fields with one kind.
pub trait Schema: Default + Serialize + DeserializeOwned {
    const KIND: Kind;

    /// Hook for normalizing nested owned entities before the top-level merge.
    fn normalize(partial: &mut Partial) -> ModelResult<()> {
        let _ = partial;
        Ok(())
    }
}

impl<S: Schema> Entity for S {
    fn kind(&self) -> Kind {
        S::KIND
    }

    fn decode(kind: Kind, data: Value) -> ModelResult<Self> {
        if kind != S::KIND {
            return Err(ModelError::KindMismatch {
                expected: S::KIND,
                found: kind,
            });
        }
        let mut partial = into_partial(data)?;
        S::normalize(&mut partial)?;
        merge(S::default(), [partial])
    }
}
