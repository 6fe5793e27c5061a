use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "base-bharat", version, about = "Base Bharat in the terminal")]
pub struct CliArgs {
    /// Page to open, e.g. /obstacle-course
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,

    /// Leaderboard category to start on (ev, quantum, space, ai)
    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// Print a snapshot of the page and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Delay before an obstacle's solution is revealed
    #[arg(long = "reveal-delay-ms", value_name = "MS")]
    pub reveal_delay_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(route) = &self.route {
            std::env::set_var("BHARAT_START_ROUTE", route);
        }
        if let Some(category) = &self.category {
            std::env::set_var("BHARAT_CATEGORY", category);
        }
        if let Some(delay) = self.reveal_delay_ms {
            std::env::set_var("BHARAT_REVEAL_DELAY_MS", delay.to_string());
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("BHARAT_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_flag() {
        let args = CliArgs::parse_from([
            "base-bharat",
            "--route",
            "/pledge-wall",
            "--category",
            "space",
            "--headless",
            "--json",
            "--reveal-delay-ms",
            "250",
            "--log-file",
            "bharat.log",
        ]);

        assert_eq!(args.route.as_deref(), Some("/pledge-wall"));
        assert_eq!(args.category.as_deref(), Some("space"));
        assert!(args.headless && args.json);
        assert!(!args.debug);
        assert_eq!(args.reveal_delay_ms, Some(250));
        assert_eq!(args.log_file.as_deref(), Some("bharat.log"));
    }

    #[test]
    fn help_lists_the_route_flag() {
        assert!(CliArgs::help_text().contains("--route"));
    }
}
