pub mod account;
pub mod command;
pub mod error;
pub mod money;
pub mod traits;

pub use account::Account;
pub use command::{ClientId, Command, CommandId, CommandKind};
pub use error::Error;
pub use money::Money;
