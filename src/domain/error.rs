use crate::domain::Money;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ingestion failed with: {0}")]
    Ingestion(String),

    #[error("insufficient funds: requested {requested}, available {balance}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("amount must not be negative: {0}")]
    NegativeAmount(Money),

    #[error("engine failed with: {0}")]
    Engine(String),
}
