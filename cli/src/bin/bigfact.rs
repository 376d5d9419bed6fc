use anyhow::Result;
use bigfact_cli::BigfactCommand;

fn main() -> Result<()> {
  BigfactCommand::execute()
}
