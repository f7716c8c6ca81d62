/// Errors produced by the storage layer.
///
/// Deliberately narrow: a missing component is signalled through return
/// channels (`Option`, boolean, no-op removal), not through an error,
/// and allocation failure propagates from the backing `Vec`s.
#[derive(Debug, thiserror::Error)]
pub enum EcsError {
    #[error("entity id 0 is reserved as the null entity")]
    NullEntityId,
}
