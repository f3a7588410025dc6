use tracing::warn;

use crate::domain::{Error, traits::DeadLetterQueue};

/// Routes rejected commands to the log; the replay itself keeps going.
#[derive(Default, Debug)]
pub struct StdErrDlq {}

impl DeadLetterQueue for StdErrDlq {
    fn report(&self, error: &Error) {
        warn!(%error, "command dead-lettered");
    }
}
