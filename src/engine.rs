use crate::domain::{
    ClientId, Command, CommandKind, Error, Money,
    traits::{CommandStream, DeadLetterQueue, OutputRepository},
};

use futures::StreamExt;
use tracing::debug;

/// Drains a command stream and applies each command to the account
/// store. A command that fails is handed to the dead-letter queue and
/// the replay continues with the next one.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: CommandStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: CommandStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut commands = self.ingestion.stream();

        while let Some(cmd) = commands.next().await {
            match cmd {
                Ok(cmd) => {
                    debug!(command = %cmd, "applying");
                    if let Err(e) = self.apply_command(cmd) {
                        self.dlq.report(&e);
                    }
                }
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_command(&mut self, cmd: Command) -> Result<(), Error> {
        match cmd.kind {
            CommandKind::Deposit { amount } => self.deposit(&cmd, amount),
            CommandKind::Withdrawal { amount } => self.withdraw(&cmd, amount),
            CommandKind::Transfer { to, amount } => self.transfer(&cmd, to, amount),
        }
    }

    fn deposit(&mut self, cmd: &Command, amount: Money) -> Result<(), Error> {
        self.output_repository.record_command(cmd)?;

        let account = self.output_repository.get_or_create_account(&cmd.client_id);
        account.deposit(amount)
    }

    fn withdraw(&mut self, cmd: &Command, amount: Money) -> Result<(), Error> {
        self.output_repository.record_command(cmd)?;

        let account = self.output_repository.get_or_create_account(&cmd.client_id);
        account.withdraw(amount)
    }

    fn transfer(&mut self, cmd: &Command, to: ClientId, amount: Money) -> Result<(), Error> {
        self.output_repository.record_command(cmd)?;

        let (source, destination) = self
            .output_repository
            .account_pair(&cmd.client_id, &to)
            .ok_or_else(|| {
                Error::Engine(format!(
                    "client {} cannot transfer to itself",
                    cmd.client_id
                ))
            })?;

        source.transfer(destination, amount)
    }

    pub fn flush(&mut self) {
        self.output_repository.flush();
    }
}
