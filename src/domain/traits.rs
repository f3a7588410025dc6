use futures::Stream;

use crate::domain::{Account, ClientId, Command, Error};

pub trait CommandStream {
    type Commands: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Commands;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn get_or_create_account(&mut self, client_id: &ClientId) -> &mut Account;

    /// Resolves two distinct accounts for mutation in one operation,
    /// creating either on first touch. Returns `None` when both ids
    /// name the same account.
    fn account_pair(
        &mut self,
        first: &ClientId,
        second: &ClientId,
    ) -> Option<(&mut Account, &mut Account)>;

    /// Journals a command id before it is applied; a duplicate id is
    /// rejected so a replayed file cannot apply the same command twice.
    fn record_command(&mut self, command: &Command) -> Result<(), Error>;

    fn flush(&mut self);
}
