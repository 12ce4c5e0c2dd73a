use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::contact::ContactForm;

/// One line of session input.
#[derive(Debug, Parser)]
#[command(
    name = "temple-album",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Browse the temple gallery one command per line"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Select a category: all, before1900, 1900to2000, after2000, largest or favorites
    Filter { category: String },
    /// Toggle the favorites-only view
    Favorites,
    /// Search temple names; no words clears the search
    Search { words: Vec<String> },
    /// Sort by nameAsc, yearAsc or yearDesc, or `none` for catalog order
    Sort { key: String },
    /// Toggle a temple as favorite
    Fav { id: String },
    /// Show a temple's details
    Details { id: String },
    /// Move the viewport top to a pixel offset
    Scroll {
        #[arg(allow_negative_numbers = true)]
        top: i32,
    },
    /// Record a contact message
    Contact {
        /// Sender name
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
        /// Reply address
        #[arg(long, num_args = 1..)]
        email: Vec<String>,
        /// Message text
        #[arg(long, num_args = 1..)]
        message: Vec<String>,
    },
    /// Summarize a review from its query string
    Review { query: Option<String> },
    /// Wind chill for a temperature in °C and wind speed in km/h
    #[command(name = "windchill")]
    WindChill {
        #[arg(allow_negative_numbers = true)]
        temp_c: f64,
        #[arg(allow_negative_numbers = true)]
        wind_kmh: f64,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    pub fn contact_form(name: &[String], email: &[String], message: &[String]) -> ContactForm {
        ContactForm::new(&name.join(" "), &email.join(" "), &message.join(" "))
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    /// Usage errors and help output, already formatted for display.
    #[error("{0}")]
    Invalid(#[from] clap::Error),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(CommandLine::try_parse_from(words)?.command)
}
