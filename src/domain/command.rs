use crate::domain::Money;

/// Unique identifier of a client and its account.
pub type ClientId = u16;

/// Unique identifier of a replayed command.
pub type CommandId = u32;

#[derive(Debug, Clone, Copy)]
pub enum CommandKind {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
    Transfer { to: ClientId, amount: Money },
}

#[derive(Debug, Clone)]
pub struct Command {
    pub kind: CommandKind,
    pub client_id: ClientId,
    pub command_id: CommandId,
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            CommandKind::Deposit { amount } => write!(
                f,
                "deposit,client={},tx={},amount={}",
                self.client_id, self.command_id, amount
            ),
            CommandKind::Withdrawal { amount } => write!(
                f,
                "withdrawal,client={},tx={},amount={}",
                self.client_id, self.command_id, amount
            ),
            CommandKind::Transfer { to, amount } => write!(
                f,
                "transfer,client={},to={},tx={},amount={}",
                self.client_id, to, self.command_id, amount
            ),
        }
    }
}
