use async_trait::async_trait;

use crate::config::target::ConnectionTarget;

/// The external connect primitive.
///
/// Implementations own transport, auth and retries. Callers get the handle
/// and error exactly as produced here.
#[async_trait]
pub trait Connector: Send + Sync {
    type Handle: Send;
    type Error: Send;

    /// Open (or request) a connection to `target`.
    async fn connect(&self, target: &ConnectionTarget) -> Result<Self::Handle, Self::Error>;
}

#[async_trait]
impl<'a, C> Connector for &'a C
where
    C: Connector + ?Sized,
{
    type Handle = C::Handle;
    type Error = C::Error;

    async fn connect(&self, target: &ConnectionTarget) -> Result<Self::Handle, Self::Error> {
        (**self).connect(target).await
    }
}
