use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use swj_tui::app::App;
use swj_tui::config::Config;
use swj_tui::state::View;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("swj-tui")
        .version(crate_version!())
        .about("Startup Weekend Jaipur registration and idea voting in the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .short("u")
                .long("base-url")
                .value_name("URL")
                .help("Talk to a different idea API for this run")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("view")
                .long("view")
                .value_name("VIEW")
                .help("View to open first")
                .possible_values(&["vote", "register"])
                .default_value("vote"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(base_url) = matches.value_of("base-url") {
        config.base_url = base_url.to_owned();
    }

    let initial_view = match matches.value_of("view") {
        Some("register") => View::Register,
        _ => View::Voting,
    };

    App::start(config, initial_view).await
}
