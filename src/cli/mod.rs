//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "athlete-search", about = "Athlete search CLI")]
pub struct AthleteSearch {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find athletes whose name contains the given text (case-sensitive).
    Name {
        /// Search text; multiple words are joined with spaces.
        #[clap(required = true)]
        term: Vec<String>,

        /// Output the full matching records as JSON instead of one name per line.
        #[clap(long)]
        json: bool,
    },

    /// Find athletes by skill.
    ///
    /// A term naming a sports category matches every skill in that
    /// category; any other term matches the skill tag exactly.
    Skill {
        /// Skill or category name; multiple words are joined with spaces.
        #[clap(required = true)]
        term: Vec<String>,

        /// Output the full matching records as JSON instead of one name per line.
        #[clap(long)]
        json: bool,
    },

    /// Find athletes whose championships include the exact given title.
    Championship {
        /// Championship title; multiple words are joined with spaces.
        #[clap(required = true)]
        term: Vec<String>,

        /// Output the full matching records as JSON instead of one name per line.
        #[clap(long)]
        json: bool,
    },

    /// Find athletes aged strictly between MIN and MAX years.
    ///
    /// Athletes whose age is exactly MIN or MAX are excluded.
    Age {
        /// Lower age bound in years (exclusive).
        min: u32,

        /// Upper age bound in years (exclusive).
        max: u32,

        /// Output the full matching records as JSON instead of one name per line.
        #[clap(long)]
        json: bool,
    },

    /// Load athletes from a CSV file into the database.
    ///
    /// Expects headerless rows of: name, birthday ("Month Day, Year"),
    /// experience, skills, championships.
    #[clap(name = "loadCSV")]
    LoadCsv {
        /// Path to the CSV file.
        file: PathBuf,

        /// Print connection detail while loading.
        #[clap(long)]
        verbose: bool,
    },
}
