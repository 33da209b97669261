use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inknote")]
#[command(about = "Inspect and edit handwriting notebooks from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notebook file (overrides INKNOTE_FILE and inknote.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Key handed to the obfuscation strategy
    #[arg(short, long, global = true)]
    pub key: Option<String>,

    /// Obfuscation strategy: encoding or aes-gcm
    #[arg(short, long, global = true)]
    pub strategy: Option<String>,

    /// Directory holding inknote.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a fresh notebook with one empty page
    Init {
        /// Notebook name
        name: Option<String>,

        /// Replace an existing notebook file
        #[arg(long)]
        force: bool,
    },

    /// Show notebook name, location and counts
    Info,

    /// List pages (default command)
    #[command(alias = "ls")]
    Pages,

    /// Append a page
    #[command(alias = "add")]
    AddPage {
        /// Page title (defaults to "Page N")
        title: Option<String>,
    },

    /// Rename a page
    #[command(alias = "mv")]
    RenamePage {
        /// Page index as listed (1-based)
        index: usize,
        title: String,
    },

    /// Remove a page (the last page cannot be removed)
    #[command(alias = "rm")]
    RemovePage {
        /// Page index as listed (1-based)
        index: usize,
    },

    /// Remove every stroke from a page
    ClearPage {
        /// Page index as listed (1-based)
        index: usize,
    },

    /// Draw a stroke on a page
    Draw {
        /// Page index as listed (1-based)
        page: usize,

        /// Points as x,y or x,y,pressure (e.g. 10,10 12.5,11,0.5).
        /// Put `--` before the points when one starts with a minus sign.
        #[arg(required = true, num_args = 1..)]
        points: Vec<String>,

        /// Brush preset (see `inknote brushes`)
        #[arg(short, long, default_value = "pen")]
        brush: String,

        /// Color override as #RRGGBB or #RRGGBBAA
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Erase one stroke
    Erase {
        /// Page index as listed (1-based)
        page: usize,

        /// Stroke index on that page (1-based)
        stroke: usize,
    },

    /// Write the decoded notebook as JSON (stdout when no path is given)
    Export { output: Option<PathBuf> },

    /// Replace the notebook with a JSON document
    Import { input: PathBuf },

    /// Check whether the notebook file can be read
    Doctor,

    /// Re-save the notebook under a new key and/or strategy
    Rekey {
        /// The new key
        #[arg(long)]
        new_key: Option<String>,

        /// The new strategy: encoding or aes-gcm
        #[arg(long)]
        new_strategy: Option<String>,
    },

    /// List brush presets
    Brushes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["inknote"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["inknote", "pages", "--file", "/tmp/n.inknote", "-k", "abc"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/n.inknote")));
        assert_eq!(cli.key.as_deref(), Some("abc"));
        assert!(matches!(cli.command, Some(Commands::Pages)));
    }

    #[test]
    fn test_draw_accepts_negative_points() {
        let cli = Cli::try_parse_from([
            "inknote", "draw", "2", "--brush", "marker", "--", "-3,4", "5,-6,0.5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Draw {
                page,
                points,
                brush,
                color,
            }) => {
                assert_eq!(page, 2);
                assert_eq!(points, vec!["-3,4", "5,-6,0.5"]);
                assert_eq!(brush, "marker");
                assert!(color.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_draw_requires_points() {
        assert!(Cli::try_parse_from(["inknote", "draw", "1"]).is_err());
    }
}
