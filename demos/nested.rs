//! Example demonstrating nested records and prefix composition

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Endpoint {
    #[env("ENDPOINT_URL, require=true")]
    url: String,

    #[env("TIMEOUT_SECONDS, default=30")]
    timeout_seconds: u64,
}

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Variables are prefixed per endpoint: PRIMARY_ENDPOINT_URL,
    // FALLBACK_ENDPOINT_URL, ...
    #[env(nested = "PRIMARY")]
    primary: Endpoint,

    #[env(nested = "FALLBACK")]
    fallback: Endpoint,

    #[env("RETRIES, default=3")]
    retries: u32,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("PRIMARY_ENDPOINT_URL", "https://api.example.com");
    std::env::set_var("PRIMARY_TIMEOUT_SECONDS", "5");
    std::env::set_var("FALLBACK_ENDPOINT_URL", "https://backup.example.com");

    let mut config = Config::default();
    envbind::bind(&mut config)?;

    println!("Primary:  {} ({}s)", config.primary.url, config.primary.timeout_seconds);
    println!("Fallback: {} ({}s)", config.fallback.url, config.fallback.timeout_seconds);
    println!("Retries:  {}", config.retries);

    Ok(())
}
