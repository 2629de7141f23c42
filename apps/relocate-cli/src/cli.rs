use clap::{Parser, Subcommand};
use relocate_client::DEFAULT_API_URL;
use relocate_types::{Priority, ProgressStatus};

/// Terminal client for the Relocate Me tracker
#[derive(Debug, Parser)]
#[command(name = "relocate", version, about = "Track a relocation from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the Relocate Me API
    #[arg(long, env = "RELOCATE_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Display name; required for commands that change anything
    #[arg(short, long, env = "RELOCATE_USER", global = true)]
    pub user: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Dashboard counts
    Overview,
    /// Relocation timeline, optionally one category
    Timeline {
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Mark a timeline step complete
    Complete {
        step_id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Mark a timeline step not complete
    Undo { step_id: String },
    /// Progress items with subtasks
    Progress {
        #[arg(long)]
        status: Option<ProgressStatus>,
    },
    /// Set a progress item's status
    Status { item_id: String, status: ProgressStatus },
    /// Replace a progress item's notes
    Note { item_id: String, text: String },
    /// Set a progress item's priority
    Priority { item_id: String, priority: Priority },
    /// Toggle a subtask by its 1-based number
    Subtask {
        item_id: String,
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        number: u64,
    },
    /// Job board
    Jobs {
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long, default_value = "all")]
        job_type: String,
        #[arg(long, default_value = "")]
        search: String,
        /// Only featured jobs
        #[arg(long)]
        featured: bool,
    },
    /// Sector outlook and sponsorship at the destination
    Opportunities,
    /// Housing markets at both ends of the move
    Housing,
    /// Location profiles and the side-by-side comparison
    Locations,
    /// Visa types, or one visa's requirements and documents
    Visa { slug: Option<String> },
    /// Useful links
    Resources,
    /// Movers, shippers and storage
    Logistics,
}

impl Command {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Complete { .. }
                | Command::Undo { .. }
                | Command::Status { .. }
                | Command::Note { .. }
                | Command::Priority { .. }
                | Command::Subtask { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_status_change() {
        let cli = Cli::try_parse_from([
            "relocate",
            "--user",
            "sam",
            "status",
            "job-search",
            "in-progress",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("sam"));
        assert!(cli.command.is_mutation());
        match cli.command {
            Command::Status { item_id, status } => {
                assert_eq!(item_id, "job-search");
                assert_eq!(status, ProgressStatus::InProgress);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn subtask_number_is_one_based() {
        assert!(Cli::try_parse_from(["relocate", "subtask", "shipping", "0"]).is_err());
        let cli = Cli::try_parse_from(["relocate", "subtask", "shipping", "2"]).unwrap();
        assert!(matches!(cli.command, Command::Subtask { number: 2, .. }));
    }

    #[test]
    fn reads_are_not_mutations() {
        let cli = Cli::try_parse_from(["relocate", "jobs", "--search", "engineer"]).unwrap();
        assert!(!cli.command.is_mutation());

        for page in ["housing", "locations", "opportunities"] {
            let cli = Cli::try_parse_from(["relocate", page]).unwrap();
            assert!(!cli.command.is_mutation(), "{} should be read-only", page);
        }
    }
}
