use anyhow::Error;
use std::io;

/// Returns `true` when `err` bottoms out in an EPIPE, meaning the consumer
/// of our stdout went away. The CLI treats this as a clean exit.
#[inline]
pub fn is_broken_pipe(err: &Error) -> bool {
    matches!(
        err.root_cause().downcast_ref::<io::Error>(),
        Some(io_err) if io_err.kind() == io::ErrorKind::BrokenPipe
    )
}
