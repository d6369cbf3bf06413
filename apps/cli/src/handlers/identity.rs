use anyhow::Result;
use furever::Portal;
use furever::domain::Role;
use furever::features::identity;

pub(crate) fn register(portal: &Portal, name: &str, role: Role) -> Result<()> {
    let session = identity::register(portal.store(), name, role)?;
    println!("{}", session.greeting());
    println!("Dashboard: {}", session.dashboard().tabs().join(", "));
    Ok(())
}

pub(crate) fn whoami(portal: &Portal) {
    match portal.session() {
        Some(session) => {
            println!("{}", session.greeting());
            println!("Dashboard: {}", session.dashboard().tabs().join(", "));
        },
        None => println!("Not signed in. Run `furever register <NAME> --role <ROLE>`."),
    }
}

pub(crate) fn sign_out(portal: &Portal) -> Result<()> {
    identity::sign_out(portal.store())?;
    println!("Signed out.");
    Ok(())
}
