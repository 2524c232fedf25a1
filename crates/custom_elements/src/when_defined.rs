//! Deferred completion for definitions that have not landed yet.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::CustomElementError;

pub(crate) type DefinedResult = Result<(), CustomElementError>;
pub(crate) type DefinedSender = oneshot::Sender<DefinedResult>;

/// Future returned by `CustomElementRegistry::when_defined`.
///
/// Resolves with `Ok(())` once the name has a definition, or with
/// `InvalidName` if the name can never be defined. Completion is only
/// observable through polling; neither `when_defined` nor `define` runs
/// caller code inline.
///
/// There is no cancellation: a name that is never defined leaves the
/// future pending forever, and so does dropping the owning registry.
#[derive(Debug)]
pub struct WhenDefined {
    receiver: Option<oneshot::Receiver<DefinedResult>>,
}

impl WhenDefined {
    pub(crate) fn new(receiver: oneshot::Receiver<DefinedResult>) -> Self {
        Self {
            receiver: Some(receiver),
        }
    }
}

impl Future for WhenDefined {
    type Output = DefinedResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let Some(receiver) = this.receiver.as_mut() else {
            return Poll::Pending;
        };
        match Pin::new(receiver).poll(cx) {
            Poll::Ready(Ok(result)) => {
                this.receiver = None;
                Poll::Ready(result)
            }
            // The registry went away without defining the name. The
            // contract is "resolves or stays pending forever", so a closed
            // channel parks the future rather than surfacing an error.
            Poll::Ready(Err(_)) => {
                this.receiver = None;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
