use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linediff",
    about = "Line-oriented text diff engine and HTTP service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Every line marked with "  ", "- " or "+ ", then a summary
    Text,
    /// Diff records as served by the HTTP endpoint
    Json,
    /// Unified diff hunks
    Unified,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the line diff of two files
    Diff(DiffArgs),
    /// Start the diff HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// First file, or "-" for stdin
    pub old: PathBuf,
    /// Second file, or "-" for stdin
    pub new: PathBuf,
    /// Context lines around each hunk (unified format)
    #[arg(short = 'U', long, default_value = "3")]
    pub context: usize,
    /// Diff the second file against the first
    #[arg(short = 'R', long)]
    pub reverse: bool,
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on, overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["linediff", "diff", "a.txt", "b.txt"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.old, PathBuf::from("a.txt"));
            assert_eq!(args.new, PathBuf::from("b.txt"));
            assert_eq!(args.context, 3);
            assert!(!args.reverse);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_options() {
        let cli = Cli::try_parse_from(["linediff", "diff", "-U", "1", "-R", "--no-color", "a", "-"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.context, 1);
            assert!(args.reverse);
            assert!(args.no_color);
            assert_eq!(args.new, PathBuf::from("-"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_requires_two_paths() {
        assert!(Cli::try_parse_from(["linediff", "diff", "a.txt"]).is_err());
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["linediff", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".into()));
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_config() {
        let cli = Cli::try_parse_from(["linediff", "serve", "-c", "linediff.toml"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("linediff.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["linediff", "--verbose", "serve"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_formats() {
        let cli = Cli::try_parse_from(["linediff", "--format", "json", "diff", "a", "b"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let cli = Cli::try_parse_from(["linediff", "diff", "a", "b", "--format", "unified"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Unified);
        let cli = Cli::try_parse_from(["linediff", "diff", "a", "b"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Text);
    }
}
