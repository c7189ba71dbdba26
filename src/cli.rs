use clap::{Parser, Subcommand};

/// Formula Optimizer: build an ingredient formula and see each ingredient's share.
#[derive(Parser, Debug)]
#[command(name = "formula_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the formula JSON file.
    #[arg(short, long, default_value = "formula.json", global = true)]
    pub file: String,

    /// Log store and file operations to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit the formula interactively (starts a new one if the file is missing).
    Edit,

    /// Print the ingredients and the formula summary.
    Show,

    /// Write the formula summary to a CSV file.
    Export {
        /// Destination CSV path.
        #[arg(short, long, default_value = "formula_summary.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["formula_optimizer"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.file, "formula.json");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_export_output() {
        let cli = Cli::parse_from([
            "formula_optimizer",
            "export",
            "-o",
            "out.csv",
            "--file",
            "f.json",
        ]);
        match cli.command {
            Some(Command::Export { output }) => assert_eq!(output, "out.csv"),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.file, "f.json");
    }
}
