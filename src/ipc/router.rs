// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::mpsc;

use crate::core::{
    champion::NameFilter,
    error::Error,
    estimator::RankMode,
    events::Event,
    gesture::Target,
    manager_msg::ManagerMsg,
    session::{Ability, Role, SpellKey},
    spells::SpellId,
};
use crate::swarn;

use super::handlers;

/// One parsed line of the socket protocol.
#[derive(Debug)]
pub enum Request {
    Event(Event),
    Info { json: bool },
    Champions { filter: Option<NameFilter> },
    Stop,
}

pub const USAGE: &str = "commands: press <role> <spell1|spell2|ult>, champion <role> <id|none>, \
spell <role> <spell1|spell2> <spell>, rank <role> <auto|N>, focus <role>, reset, \
info [--json], champions [filter], stop";

/// Parse a command line. `now_ms` stamps the resulting event.
pub fn parse_request(line: &str, now_ms: u64) -> Result<Request, String> {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Err(USAGE.to_string());
    };
    let rest: Vec<&str> = words.collect();

    let err = |e: Error| e.to_string();
    let arity = |n: usize| -> Result<(), String> {
        if rest.len() == n {
            Ok(())
        } else {
            Err(format!("'{cmd}' takes {n} argument(s); {USAGE}"))
        }
    };

    let req = match cmd {
        "press" => {
            arity(2)?;
            let role: Role = rest[0].parse().map_err(err)?;
            let ability: Ability = rest[1].parse().map_err(err)?;
            Request::Event(Event::Press {
                target: Target::new(role, ability),
                now_ms,
            })
        }

        "champion" => {
            if rest.len() < 2 {
                return Err(format!("'champion' needs a role and a name; {USAGE}"));
            }
            let role: Role = rest[0].parse().map_err(err)?;
            // Names may contain spaces ("Lee Sin").
            let name = rest[1..].join(" ");
            let champion = if name.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(name)
            };
            Request::Event(Event::AssignChampion {
                role,
                champion,
                now_ms,
            })
        }

        "spell" => {
            arity(3)?;
            let role: Role = rest[0].parse().map_err(err)?;
            let key: SpellKey = rest[1].parse().map_err(err)?;
            let spell: SpellId = rest[2].parse().map_err(err)?;
            Request::Event(Event::SetSpell {
                role,
                key,
                spell,
                now_ms,
            })
        }

        "rank" => {
            arity(2)?;
            let role: Role = rest[0].parse().map_err(err)?;
            let mode: RankMode = rest[1].parse().map_err(err)?;
            Request::Event(Event::SetRankMode { role, mode, now_ms })
        }

        "focus" => {
            arity(1)?;
            let role: Role = rest[0].parse().map_err(err)?;
            Request::Event(Event::SetHighlighted { role, now_ms })
        }

        "reset" => {
            arity(0)?;
            Request::Event(Event::ResetAll { now_ms })
        }

        "info" => Request::Info {
            json: rest.contains(&"--json"),
        },

        "champions" => {
            let filter = if rest.is_empty() {
                None
            } else {
                let raw = rest.join(" ");
                Some(NameFilter::parse(&raw).map_err(|e| format!("invalid filter '{raw}': {e}"))?)
            };
            Request::Champions { filter }
        }

        "stop" => Request::Stop,

        other => return Err(format!("unknown command '{other}'; {USAGE}")),
    };

    Ok(req)
}

/// Route one command line to the daemon and produce the reply text.
pub async fn route_command(cmd: &str, tx: &mpsc::Sender<ManagerMsg>) -> String {
    let now_ms = crate::core::utils::now_ms();

    match parse_request(cmd, now_ms) {
        Ok(Request::Event(event)) => handlers::command::handle_event(tx, event).await,
        Ok(Request::Info { json }) => handlers::info::handle_info(tx, json).await,
        Ok(Request::Champions { filter }) => handlers::champions::handle_champions(tx, filter).await,
        Ok(Request::Stop) => handlers::stop::handle_stop(tx).await,
        Err(e) => {
            swarn!("Ipc", "rejected command '{}'", cmd);
            format!("ERROR: {e}")
        }
    }
}
