use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::CommandStream;
use crate::domain::{ClientId, Command, CommandId, CommandKind, Error, Money};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    client: ClientId,
    to: Option<ClientId>,
    tx: CommandId,
    amount: Option<Money>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let kind = match (row.kind.to_ascii_lowercase().as_str(), row.to, row.amount) {
            ("deposit", None, Some(amount)) => CommandKind::Deposit { amount },
            ("withdrawal", None, Some(amount)) => CommandKind::Withdrawal { amount },
            ("transfer", Some(to), Some(amount)) => CommandKind::Transfer { to, amount },
            ("deposit" | "withdrawal" | "transfer", _, _) => {
                return Err(Error::Ingestion(format!(
                    "malformed {} row for tx {}",
                    row.kind, row.tx
                )));
            }
            (other, _, _) => {
                return Err(Error::Ingestion(format!(
                    "invalid command type: {}",
                    other
                )));
            }
        };

        Ok(Command {
            kind,
            client_id: row.client,
            command_id: row.tx,
        })
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type Commands = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::Commands {
        // Take ownership of the reader so the iterator we build owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        // into_deserialize consumes the reader and returns an owning iterator
        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: &str, to: Option<ClientId>, amount: Option<&str>) -> CsvRow {
        CsvRow {
            kind: kind.to_string(),
            client: 1,
            to,
            tx: 7,
            amount: amount.map(|a| Money::from_decimal_str(a).unwrap()),
        }
    }

    #[test]
    fn deposit_row_maps_to_command() {
        let cmd = Command::try_from(row("deposit", None, Some("10.5"))).unwrap();

        assert_eq!(cmd.client_id, 1);
        assert_eq!(cmd.command_id, 7);
        assert!(matches!(cmd.kind, CommandKind::Deposit { .. }));
    }

    #[test]
    fn transfer_row_maps_to_command() {
        let cmd = Command::try_from(row("transfer", Some(2), Some("2.0"))).unwrap();

        assert!(matches!(cmd.kind, CommandKind::Transfer { to: 2, .. }));
    }

    #[test]
    fn transfer_row_requires_a_destination() {
        assert!(Command::try_from(row("transfer", None, Some("2.0"))).is_err());
    }

    #[test]
    fn deposit_row_requires_an_amount() {
        assert!(Command::try_from(row("deposit", None, None)).is_err());
    }

    #[test]
    fn unknown_command_type_is_rejected() {
        assert!(Command::try_from(row("chargeback", None, None)).is_err());
    }
}
