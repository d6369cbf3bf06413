#![allow(clippy::print_stdout)]

mod args;
mod bootstrap;
mod handlers;

use crate::args::{Cli, Command};
use crate::handlers::{access, adoption, catalog, care, community, identity};
use clap::Parser;

#[furever_runtime::main(interactive)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::config(&cli)?;
    let _log = bootstrap::logger(&config.logging)?;
    let portal = bootstrap::portal(config)?;

    match cli.command {
        Command::Register { name, role } => identity::register(&portal, &name, role)?,
        Command::Whoami => identity::whoami(&portal),
        Command::SignOut => identity::sign_out(&portal)?,
        Command::Access { feature, href } => access::check(&portal, &feature, href.as_deref())?,
        Command::Services => access::services(&portal),
        Command::Match { hours, kids, space, energy, explain } => {
            adoption::matches(&portal, hours, kids, space, energy, explain)?;
        },
        Command::Interest { pet } => adoption::interest(&portal, &pet)?,
        Command::Interests => adoption::interests(&portal),
        Command::Wishlist { action } => adoption::wishlist(&portal, action).await?,
        Command::Pets { species, search } => adoption::pets(&portal, species, search).await?,
        Command::Products { category, search, id, categories } => {
            catalog::products(&portal, category, search, id, categories).await?;
        },
        Command::Qna { action } => community::qna(&portal, action)?,
        Command::Contest { action } => community::contest(&portal, action)?,
        Command::Map { action } => community::map(&portal, action)?,
        Command::Memories { action } => community::memories(&portal, action)?,
        Command::Triage { symptom, answer } => care::triage(symptom, answer),
    }

    Ok(())
}
