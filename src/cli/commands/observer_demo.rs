use std::rc::Rc;

use anyhow::Result;

use correio::{ EmailNotifier, MessageSystem, MobileNotifier, Observer, Outbox, Subject, WebNotifier };

use crate::cli::ui;

/// Observer walkthrough: three notifiers attached, one message, mobile detached, another message
pub fn execute() -> Result<()> {
    ui::print_header("Starting Correio Digital simulation...");

    let outbox = Outbox::new();
    let mut system = MessageSystem::new();

    let web: Rc<dyn Observer> = Rc::new(WebNotifier::new(outbox.clone()));
    let email: Rc<dyn Observer> = Rc::new(EmailNotifier::new(outbox.clone()));
    let mobile: Rc<dyn Observer> = Rc::new(MobileNotifier::new(outbox.clone()));

    for observer in [&web, &email, &mobile] {
        system.attach(Rc::clone(observer));
        ui::print_info(&format!("{} attached", observer.name()));
    }

    deliver(
        &mut system,
        &outbox,
        "alice@example.com",
        "bob@example.com",
        "Hi Bob, how are you? Let's meet later."
    );

    ui::print_section("Action: mobile user logged out");
    if system.detach(&mobile) {
        ui::print_info(&format!("{} detached", mobile.name()));
    }

    deliver(
        &mut system,
        &outbox,
        "charlie@example.com",
        "alice@example.com",
        "Hey Alice, did you see my e-mail about the project?"
    );

    println!();
    ui::print_header("Simulation finished.");
    Ok(())
}

fn deliver(system: &mut MessageSystem, outbox: &Outbox, sender: &str, recipient: &str, content: &str) {
    println!();
    ui::print_info(&format!("New message received from {}", sender));
    let notified = system.receive(sender, recipient, content);
    ui::print_info(&format!("Notified {} observer(s)", notified));
    ui::print_deliveries(&outbox.drain());
}
