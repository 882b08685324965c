// Author: Dustin Pilgrim
// License: MIT

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "spellwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track enemy summoner spell and ultimate cooldowns"
)]
pub struct Args {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, action)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Press a spell or ultimate (press twice quickly to cancel)")]
    Press {
        /// top, jungle, mid, adc or support
        role: String,
        /// spell1, spell2 or ult
        ability: String,
    },

    #[command(about = "Set the champion for a role, or `none` to clear it")]
    Champion {
        role: String,
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    #[command(about = "Change a summoner spell")]
    Spell {
        role: String,
        /// spell1 or spell2
        slot: String,
        spell: String,
    },

    #[command(about = "Pin the ultimate rank, or `auto` to estimate it")]
    Rank { role: String, rank: String },

    #[command(about = "Show a role first")]
    Focus { role: String },

    #[command(about = "Clear every timer and champion")]
    Reset,

    #[command(about = "Display current cooldowns")]
    Info {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "List champions, optionally filtered by name, tag or regex")]
    Champions { filter: Option<String> },

    #[command(about = "Stop the running daemon")]
    Stop,
}

impl Command {
    /// The socket protocol line for this command.
    pub fn to_request(&self) -> String {
        match self {
            Command::Press { role, ability } => format!("press {role} {ability}"),
            Command::Champion { role, name } => format!("champion {role} {}", name.join(" ")),
            Command::Spell { role, slot, spell } => format!("spell {role} {slot} {spell}"),
            Command::Rank { role, rank } => format!("rank {role} {rank}"),
            Command::Focus { role } => format!("focus {role}"),
            Command::Reset => "reset".to_string(),
            Command::Info { json: true } => "info --json".to_string(),
            Command::Info { json: false } => "info".to_string(),
            Command::Champions { filter: Some(f) } => format!("champions {f}"),
            Command::Champions { filter: None } => "champions".to_string(),
            Command::Stop => "stop".to_string(),
        }
    }
}
