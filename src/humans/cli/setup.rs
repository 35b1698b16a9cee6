use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "humans", bin_name = "humans", version)]
#[command(about = "Keep a register of people and their zodiac signs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// The data file name
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a new human
    #[command(display_order = 1)]
    Add {
        /// The human's name
        #[arg(short, long)]
        name: String,

        /// The human's surname (short form: -sn)
        #[arg(long, visible_alias = "sn")]
        surname: String,

        /// The human's zodiac sign
        #[arg(short, long = "zodiak", visible_alias = "zodiac")]
        zodiac: String,

        /// The date of the human's birth
        #[arg(short, long)]
        date: String,
    },

    /// Display all humans
    #[command(display_order = 2)]
    Display,

    /// Select the humans born under a zodiac sign
    #[command(display_order = 3)]
    Select {
        /// The zodiac sign to select
        #[arg(short = 's', long = "select", value_name = "ZODIAC")]
        zodiac: String,
    },
}

/// Rewrites the two-letter `-sn` option of `add` to `--sn` so clap can
/// parse it.
///
/// Only tokens after `add` are touched; elsewhere `-sn` keeps clap's
/// meaning (`select -sn` is `-s n`). Tokens after a bare `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut in_add = false;
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if passthrough {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some("add") if !in_add => {
                    in_add = true;
                    arg
                }
                Some("-sn") if in_add => OsString::from("--sn"),
                Some(s) if in_add && s.starts_with("-sn=") => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn parses_add_with_short_options() {
        let cli = parse(&[
            "humans", "add", "-n", "Ivan", "-sn", "Ivanov", "-z", "Leo", "-d", "1990-01-01",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: "Ivan".into(),
                surname: "Ivanov".into(),
                zodiac: "Leo".into(),
                date: "1990-01-01".into(),
            })
        );
    }

    #[test]
    fn parses_add_with_long_options() {
        let cli = parse(&[
            "humans",
            "add",
            "--name",
            "Ivan",
            "--surname",
            "Ivanov",
            "--zodiak",
            "Leo",
            "--date",
            "1990-01-01",
            "--data",
            "people.json",
        ])
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("people.json")));
        assert!(matches!(cli.command, Some(Commands::Add { .. })));
    }

    #[test]
    fn zodiac_spelling_is_accepted_as_alias() {
        let cli = parse(&[
            "humans", "add", "-n", "A", "--sn", "B", "--zodiac", "Leo", "-d", "x",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { zodiac, .. }) => assert_eq!(zodiac, "Leo"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn sn_with_equals_sign() {
        let cli = parse(&[
            "humans", "add", "-n", "A", "-sn=Petrov", "-z", "Leo", "-d", "x",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add { surname, .. }) => assert_eq!(surname, "Petrov"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn add_requires_every_field() {
        let err = parse(&["humans", "add", "-n", "Ivan", "-z", "Leo", "-d", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn select_reads_the_select_option() {
        let cli = parse(&["humans", "select", "-s", "Virgo"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Select {
                zodiac: "Virgo".into()
            })
        );
    }

    #[test]
    fn select_requires_a_value() {
        let err = parse(&["humans", "select"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn data_is_global() {
        let before = parse(&["humans", "--data", "a.json", "display"]).unwrap();
        let after = parse(&["humans", "display", "--data", "a.json"]).unwrap();
        assert_eq!(before.data, Some(PathBuf::from("a.json")));
        assert_eq!(after.data, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = parse(&["humans"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn version_flag_is_handled_by_clap() {
        let err = parse(&["humans", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn normalize_leaves_tokens_after_double_dash() {
        let args = normalize_args(["humans", "--", "-sn"]);
        assert_eq!(args[2], OsString::from("-sn"));
    }

    #[test]
    fn select_reads_sn_as_short_select_with_value() {
        let cli = parse(&["humans", "select", "-sn"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Select { zodiac: "n".into() })
        );
    }

    #[test]
    fn normalize_only_rewrites_sn_after_add() {
        let select = normalize_args(["humans", "select", "-sn"]);
        assert_eq!(select[2], OsString::from("-sn"));

        let add = normalize_args(["humans", "--data", "a.json", "add", "-sn", "X", "-sn=Y"]);
        assert_eq!(add[4], OsString::from("--sn"));
        assert_eq!(add[6], OsString::from("--sn=Y"));
    }

    #[test]
    fn normalize_leaves_other_tokens() {
        let args = normalize_args(["humans", "select", "-s", "Leo"]);
        let expected: Vec<OsString> = ["humans", "select", "-s", "Leo"]
            .iter()
            .map(OsString::from)
            .collect();
        assert_eq!(args, expected);
    }
}
