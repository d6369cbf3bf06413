use anyhow::Result;
use furever::Portal;
use furever::features::access::{AccessDecision, LinkOutcome};

pub(crate) fn check(portal: &Portal, feature: &str, href: Option<&str>) -> Result<()> {
    let role = portal.role();

    let Some(href) = href else {
        match portal.check(feature) {
            AccessDecision::Open => println!("{feature} is open to everyone."),
            AccessDecision::Granted => println!("{feature} is available for your role."),
            AccessDecision::Denied(denied) => return Err(denied.into()),
        }
        return Ok(());
    };

    match portal.permissions().follow_link(feature, href, role) {
        LinkOutcome::Navigate(to) => println!("Opening {to}"),
        LinkOutcome::Acknowledge(message) => println!("{message}"),
        LinkOutcome::Denied(denied) => return Err(denied.into()),
    }
    Ok(())
}

pub(crate) fn services(portal: &Portal) {
    for (service, availability) in portal.services() {
        println!("{service}: {availability}");
    }
}
