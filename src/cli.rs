//! Command dispatch for the `points-ledger` binary.

use crate::command::{self, Command};
use crate::error::{LedgerError, Result};
use crate::notifier::Notifier;
use crate::store::PointsStore;
use log::debug;

/// Usage text printed for `help`, no arguments, or malformed arguments.
pub const USAGE: &str = "\
Usage: points-ledger <command> [arguments]

Commands:
  earn <customerId> <points>     Add points to a customer's balance
  redeem <customerId> <points>   Redeem points from a customer's balance
  help                           Show this help message";

/// Parses `args` (without the program name) and executes the command.
pub fn run<S, N>(args: &[S], store: &mut PointsStore<N>) -> Result<()>
where
    S: AsRef<str>,
    N: Notifier,
{
    let command = command::parse(args)?;
    debug!("Parsed command: {:?}", command);
    execute(command, store)
}

/// Executes a command against the store and reports the outcome through the
/// store's notifier.
///
/// A refused redemption is reported but is not an error.
pub fn execute<N: Notifier>(command: Command, store: &mut PointsStore<N>) -> Result<()> {
    match command {
        Command::Help => {
            store.notifier().info(USAGE);
        }
        Command::Earn {
            customer_id,
            points,
        } => {
            store.earn(&customer_id, points)?;
            let balance = store.balance(&customer_id)?;
            store.notifier().success(&format!(
                "Customer {} earned {} points. New balance: {} points",
                customer_id, points, balance
            ));
        }
        Command::Redeem {
            customer_id,
            points,
        } => {
            let redeemed = store.redeem(&customer_id, points)?;
            let balance = store.balance(&customer_id)?;
            if redeemed {
                store.notifier().success(&format!(
                    "Customer {} redeemed {} points. New balance: {} points",
                    customer_id, points, balance
                ));
            } else {
                store.notifier().error(&format!(
                    "Customer {} has insufficient points to redeem {} (balance: {} points)",
                    customer_id, points, balance
                ));
            }
        }
    }

    Ok(())
}

/// Reports an error. Argument errors are followed by the usage text.
pub fn report_error<N: Notifier>(err: &LedgerError, notifier: &N) {
    notifier.error(&err.to_string());
    if let LedgerError::Argument(_) = err {
        notifier.info(USAGE);
    }
}
