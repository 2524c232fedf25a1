//! Shared helpers for the registry and runtime test suites.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

pub mod classes;
pub mod name_cases;

/// Poll a future exactly once with a no-op waker.
///
/// For asserting pending-ness without an executor; a future parked this
/// way is only re-polled when the test polls it again.
pub fn poll_once<F: Future>(future: Pin<&mut F>) -> Poll<F::Output> {
    let mut cx = Context::from_waker(Waker::noop());
    future.poll(&mut cx)
}
