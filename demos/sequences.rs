//! Example demonstrating sequence fields

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Comma-separated values, with or without surrounding brackets
    #[env("PEER_URLS, default=[http://peer1:2380,http://peer2:2380]")]
    peer_urls: Vec<String>,

    #[env("BUSY_HOURS, default=[9,12,17]")]
    busy_hours: Vec<i64>,

    #[env("FEATURE_FLAGS, default=[true, false, true]")]
    feature_flags: Vec<bool>,

    #[env("WEIGHTS")]
    weights: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    // Environment values use the same format as defaults
    std::env::set_var("BUSY_HOURS", "8, 13, 18, 22");
    std::env::set_var("WEIGHTS", "0.5, 0.25, 0.25");

    let mut config = Config::default();
    envbind::bind(&mut config)?;

    println!("Peer URLs:     {:?}", config.peer_urls);
    println!("Busy hours:    {:?}", config.busy_hours);
    println!("Feature flags: {:?}", config.feature_flags);
    println!("Weights:       {:?}", config.weights);

    Ok(())
}
