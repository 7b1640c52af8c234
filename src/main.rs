use anyhow::Context;
use clap::Parser;
use launch_signup::configuration::get_configuration;
use launch_signup::controller::{ClickEvent, SignupController};
use launch_signup::form_submitter::FormSubmitter;
use launch_signup::telemetry::{get_subscriber, init_subscriber};
use launch_signup::ui::TerminalSurface;

/// Plays the landing page signup flow against the configured endpoint.
#[derive(Parser, Debug)]
#[command(name = "launch-signup")]
struct Args {
    /// Address typed into the signup form.
    email: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setting up Logging
    let subscriber = get_subscriber("launch-signup".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration")?;
    let submitter = FormSubmitter::new(configuration.submission.timeout())
        .context("Failed to build the HTTP client")?;
    let surface = TerminalSurface::new(
        configuration.submission.action_url.clone(),
        args.email,
        configuration.application.submit_label.clone(),
    );
    let controller =
        SignupController::new(surface, submitter, configuration.application.entry_delay());

    // The visitor does not wait for the doors before clicking.
    let mut click = ClickEvent::new();
    let (entry, state) = tokio::join!(
        controller.run_entry_sequence(),
        controller.on_submit_clicked(&mut click)
    );
    entry?;

    println!("state: {}", state);
    for (slot, text) in controller.ui().slots() {
        println!("{:?}: {}", slot, text);
    }
    for alert in controller.ui().alerts() {
        println!("alert: {}", alert);
    }
    Ok(())
}
