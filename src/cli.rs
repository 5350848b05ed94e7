use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lazyweather",
    version,
    about = "TUI for looking up the current weather of a city"
)]
pub struct Args {
    /// City to pre-fill the input with (e.g., "Toronto")
    #[arg(short, long)]
    pub city: Option<String>,

    /// Path to a config file, instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_city_and_config() {
        let args = Args::parse_from(["lazyweather", "--city", "New York", "--config", "/tmp/c.toml"]);

        assert_eq!(args.city.as_deref(), Some("New York"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["lazyweather"]);

        assert!(args.city.is_none());
        assert!(args.config.is_none());
    }
}
