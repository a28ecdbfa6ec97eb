//! Email validation from the command line, using the login form's rules.

use anyhow::Result;
use vaultgate_core::validation;

pub fn run(email: &str) -> Result<()> {
    match validation::validate_email(email) {
        Ok(()) => {
            println!("ok");
            Ok(())
        }
        Err(kind) => anyhow::bail!("{kind}"),
    }
}
