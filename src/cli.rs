use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cliptui")]
#[command(about = "Save text snippets and copy them to the clipboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save a new value
    Add {
        value: String,
    },
    /// Print the saved values
    Show,
    /// Copy a saved value to the clipboard
    Copy {
        /// Position in the list, starting at 1
        position: usize,
    },
    /// Delete a saved value (all occurrences)
    Remove {
        /// Position in the list, starting at 1
        position: usize,
    },
}
