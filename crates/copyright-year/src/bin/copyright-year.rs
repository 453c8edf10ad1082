use clap::Parser;
use tracing::{metadata::LevelFilter, subscriber::set_global_default};
use tracing_subscriber::{layer::SubscriberExt, Layer};

use copyright_year::{format_copyright, format_year, Copyright, FormatOptions, Style, Tag, Year};

/// Prints the current year or a copyright notice.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Symbol in front of the year. Pass an empty string to omit it.
    #[arg(long, env = "COPYRIGHT_PREFIX", default_value = "©")]
    prefix: String,
    /// Copyright holder.
    #[arg(long, env = "COPYRIGHT_NAME")]
    name: Option<String>,
    /// First year of the range.
    #[arg(long, env = "COPYRIGHT_START_YEAR", allow_negative_numbers = true)]
    start_year: Option<i32>,
    #[arg(long, env = "COPYRIGHT_SEPARATOR", default_value = " ")]
    separator: String,
    /// Use this year instead of the system clock.
    #[arg(long, allow_negative_numbers = true)]
    year: Option<i32>,
    /// Print the year only.
    #[arg(long)]
    bare: bool,
    /// Wrap the output into this element.
    #[arg(long)]
    tag: Option<Tag>,
    #[arg(long)]
    class: Option<String>,
    /// Inline style, e.g. "color: gray; font-size: 12px".
    #[arg(long)]
    style: Option<Style>,
}

impl Cli {
    fn wants_markup(&self) -> bool {
        self.tag.is_some() || self.class.is_some() || self.style.is_some()
    }

    fn render(&self, year: i32) -> String {
        if !self.wants_markup() {
            return if self.bare {
                format_year(year)
            } else {
                format_copyright(&self.options(), year)
            };
        }

        let tag = self.tag.unwrap_or_default();
        let style = self.style.clone().unwrap_or_default();
        if self.bare {
            let mut wrapper = Year::default().with_tag(tag).with_style(style);
            wrapper.class.clone_from(&self.class);
            wrapper.element(year).to_string()
        } else {
            let mut wrapper = Copyright::default()
                .with_tag(tag)
                .with_style(style)
                .with_options(self.options());
            wrapper.class.clone_from(&self.class);
            wrapper.element(year).to_string()
        }
    }

    fn options(&self) -> FormatOptions {
        FormatOptions {
            prefix: self.prefix.clone(),
            name: self.name.clone(),
            start_year: self.start_year,
            separator: self.separator.clone(),
        }
    }
}

pub fn main() {
    init_logs();

    let cli = Cli::parse();
    let year = cli.year.unwrap_or_else(copyright_year::current_year);
    tracing::debug!(year, bare = cli.bare, "formatting");

    println!("{}", cli.render(year));
}

fn init_logs() {
    let log_format = tracing_subscriber::fmt::format()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .compact();

    let log_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // stdout carries the result, so logs go to stderr
    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .event_format(log_format)
            .with_writer(std::io::stderr)
            .with_filter(log_level),
    );
    if let Err(error) = set_global_default(subscriber) {
        eprintln!("failed to set global logs subscriber: {error}");
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("copyright-year").chain(args.iter().copied()))
    }

    #[test]
    fn command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.options(), FormatOptions::default());
        assert!(!cli.wants_markup());
        assert_eq!(cli.render(2026), "© 2026");
    }

    #[test]
    fn options() {
        let cli = parse(&[
            "--prefix",
            "",
            "--name",
            "Acme Inc",
            "--start-year",
            "2020",
            "--separator",
            "-",
        ])
        .unwrap();
        assert_eq!(
            cli.options(),
            FormatOptions {
                prefix: String::new(),
                name: Some(String::from("Acme Inc")),
                start_year: Some(2020),
                separator: String::from("-"),
            }
        );
        assert_eq!(cli.render(2026), "2020-2026-Acme Inc");
    }

    #[test]
    fn bare() {
        let cli = parse(&["--bare", "--name", "Acme Inc"]).unwrap();
        assert_eq!(cli.render(2026), "2026");
    }

    #[test]
    fn markup() {
        for (args, expected) in [
            (&["--tag", "footer"][..], "<footer>© 2026</footer>"),
            (&["--class", "muted"][..], r#"<span class="muted">© 2026</span>"#),
            (
                &["--style", "color: gray"][..],
                r#"<span style="color: gray">© 2026</span>"#,
            ),
            (
                &["--bare", "--tag", "small", "--class", "year"][..],
                r#"<small class="year">2026</small>"#,
            ),
        ] {
            let cli = parse(args).unwrap();
            assert!(cli.wants_markup(), "{args:?}");
            assert_eq!(cli.render(2026), expected, "{args:?}");
        }
    }

    #[test]
    fn invalid_values() {
        for args in [&["--tag", "marquee"][..], &["--style", "color gray"][..]] {
            let error = parse(args).err().unwrap();
            assert_eq!(error.kind(), ErrorKind::ValueValidation, "{args:?}");
        }
    }
}
