use clap::CommandFactory;

use crate::Cli;
use crate::diff::EditScript;
use crate::err::Error;

/// Subcommand names within edit distance 2 of `name`, in declaration
/// order.
fn closest_subcommands(name: &str) -> Vec<String> {
    let target: Vec<char> = name.chars().collect();
    Cli::command()
        .get_subcommands()
        .map(|sub| sub.get_name().to_string())
        .filter(|candidate| {
            let candidate: Vec<char> = candidate.chars().collect();
            EditScript::from_compare(&target, &candidate).len() < 3
        })
        .collect()
}

pub fn help(subcommand: Option<&str>) -> Result<(), Error> {
    let mut cli = Cli::command();
    let name = match subcommand {
        Some(name) => name,
        None => {
            cli.print_help()?;
            return Ok(());
        }
    };

    match cli.find_subcommand(name).cloned() {
        Some(mut sub) => {
            sub.print_help()?;
            Ok(())
        }
        None => {
            cli.print_help()?;
            Err(Error::UnknownSubcommand {
                name: name.to_string(),
                candidates: closest_subcommands(name),
            })
        }
    }
}
