use std::collections::{HashMap, HashSet};

use crate::domain::{Account, ClientId, Command, CommandId, Error, traits::OutputRepository};

/// In-memory account store. Accounts are created on first touch; every
/// journaled command id is remembered so a replayed file cannot apply
/// the same command twice.
#[derive(Default, Debug)]
pub struct InMemoryLedger {
    accounts: HashMap<ClientId, Account>,
    journal: HashSet<CommandId>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryLedger {
    pub(crate) fn balance_of(&self, client_id: ClientId) -> Option<crate::domain::Money> {
        self.accounts.get(&client_id).map(Account::balance)
    }
}

impl OutputRepository for InMemoryLedger {
    fn get_or_create_account(&mut self, client_id: &ClientId) -> &mut Account {
        self.accounts.entry(*client_id).or_insert_with(Account::new)
    }

    fn account_pair(
        &mut self,
        first: &ClientId,
        second: &ClientId,
    ) -> Option<(&mut Account, &mut Account)> {
        if first == second {
            return None;
        }
        self.accounts.entry(*first).or_insert_with(Account::new);
        self.accounts.entry(*second).or_insert_with(Account::new);

        let [a, b] = self.accounts.get_disjoint_mut([first, second]);
        Some((a?, b?))
    }

    fn record_command(&mut self, command: &Command) -> Result<(), Error> {
        if !self.journal.insert(command.command_id) {
            return Err(Error::Engine(format!(
                "command id {} already applied",
                command.command_id
            )));
        }
        Ok(())
    }

    fn flush(&mut self) {
        println!("client,balance");
        for (client_id, account) in &self.accounts {
            println!("{},{}", client_id, account.balance());
        }
    }
}
