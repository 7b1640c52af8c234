use anyhow::Context;
use clap::Parser;
use launch_signup::configuration::get_configuration;
use launch_signup::post_scaffold::{create_post, PostTitle};
use launch_signup::telemetry::{get_subscriber, init_subscriber};

/// Creates `<date>-<slug>` under the posts directory.
#[derive(Parser, Debug)]
#[command(name = "create_post")]
struct Args {
    /// Title of the new post.
    title: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = get_subscriber("create_post".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber)?;

    let configuration = get_configuration().context("Failed to read configuration")?;
    let title = PostTitle::parse(args.title).map_err(anyhow::Error::msg)?;
    let base_path = std::env::current_dir().context("Failed to determine current directory")?;
    let today = chrono::Local::now().date_naive();

    let path = create_post(&configuration.posts, &base_path, &title, today)?;
    println!("{}", path.display());
    Ok(())
}
