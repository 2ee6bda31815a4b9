use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::config::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application runs a single command instead of the server.
/// One-shot mode is used when any of these conditions are met:
/// - --once flag is set (run the pipeline once and exit)
/// - --list-config is set
/// - --write-config is set
pub fn is_oneshot_mode(args: &Args) -> bool {
    args.once || args.list_config || args.write_config
}

/// Epic Games Store free games service
///
/// Fetches the storefront catalog, picks out games that are free now or will be
/// free soon, and serves them as JSON. Optionally posts them to a Discord
/// webhook, either on request or on a cron schedule.
///
/// By default the HTTP server is started. Use --once to run the pipeline a
/// single time and print the result.
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch free games once, print them as JSON and exit.
    #[arg(short, long)]
    pub once: bool,

    /// With --once, also send the result to the Discord webhook.
    #[arg(long, requires = "once")]
    pub notify: bool,

    /// With --once, leave out games whose promotion has not started yet.
    #[arg(long = "no-upcoming", requires = "once")]
    pub no_upcoming: bool,

    /// Port for the HTTP server.
    #[arg(long, short = 'p', help_heading = "Server")]
    pub port: Option<u16>,

    /// Discord webhook URL for notifications.
    #[arg(long = "discord-webhook", help_heading = "Server", value_name = "URL")]
    pub discord_webhook: Option<String>,

    /// Enable the scheduled check-and-notify task.
    #[arg(long = "enable-cron", help_heading = "Server")]
    pub enable_cron: bool,

    /// Seconds-first cron expression for scheduled checks, e.g. "0 0 0 * * *".
    #[arg(long = "cron-schedule", help_heading = "Server", value_name = "EXPR")]
    pub cron_schedule: Option<String>,

    /// Storefront country code.
    #[arg(long, help_heading = "Storefront")]
    pub country: Option<String>,

    /// Storefront locale.
    #[arg(long, help_heading = "Storefront")]
    pub locale: Option<String>,

    /// Timezone for rendered dates: an IANA name or a UTC offset such as UTC+8.
    #[arg(long, short = 't', help_heading = "Storefront")]
    pub timezone: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long = "write-config", help_heading = "Configuration")]
    pub write_config: bool,

    /// Keep logging to the terminal in --once mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = &self.discord_webhook {
            config.discord_webhook_url = Some(url.clone());
        }
        if self.enable_cron {
            config.enable_cron = true;
        }
        if let Some(schedule) = &self.cron_schedule {
            config.cron_schedule = schedule.clone();
        }
        if let Some(country) = &self.country {
            config.country_code = country.clone();
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(timezone) = &self.timezone {
            config.timezone = timezone.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
