//! `gamecmd console` - interactive console host
//!
//! Every stdin line is treated as a chat message from the current player:
//! - `/name args...` dispatches a command
//! - `@name` switches to another configured player
//! - `!enter` / `!exit` puts the current player in or out of a vehicle
//! - `!rejoin` disconnects the current player and spawns a fresh one
//! - anything else is echoed as plain chat

use crate::server::{build_dispatcher, load_config, ConsoleConfig, ConsolePlayer};
use anyhow::{Context, Result};
use gamecmd_core::{DispatchOutcome, Dispatcher};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info, warn};

type DispatchTasks = JoinSet<gamecmd_core::Result<DispatchOutcome>>;

/// One line of console input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input<'a> {
    Command(&'a str),
    Switch(&'a str),
    EnterVehicle,
    ExitVehicle,
    Rejoin,
    Chat(&'a str),
    Empty,
}

impl<'a> Input<'a> {
    fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Empty;
        }
        if let Some(command) = line.strip_prefix('/') {
            return Input::Command(command);
        }
        if let Some(name) = line.strip_prefix('@') {
            return Input::Switch(name.trim());
        }
        match line {
            "!enter" => Input::EnterVehicle,
            "!exit" => Input::ExitVehicle,
            "!rejoin" => Input::Rejoin,
            _ => Input::Chat(line),
        }
    }
}

/// Connected players and the one typing
struct Session {
    config: ConsoleConfig,
    players: HashMap<String, Arc<ConsolePlayer>>,
    current: String,
}

impl Session {
    fn new(config: ConsoleConfig, initial: Option<&str>) -> Result<Self> {
        let players = config
            .players
            .iter()
            .map(|p| (p.name.to_lowercase(), Arc::new(ConsolePlayer::new(p))))
            .collect();
        let current = initial
            .unwrap_or(config.default_player.as_str())
            .to_lowercase();
        if config.player(&current).is_none() {
            anyhow::bail!("Unknown player \"{}\"", current);
        }

        Ok(Self {
            config,
            players,
            current,
        })
    }

    fn current(&self) -> Result<Arc<ConsolePlayer>> {
        self.players
            .get(&self.current)
            .cloned()
            .with_context(|| format!("Player \"{}\" is not connected", self.current))
    }

    fn switch(&mut self, name: &str) -> bool {
        let key = name.to_lowercase();
        if !self.players.contains_key(&key) {
            return false;
        }
        self.current = key;
        true
    }

    fn rejoin(&mut self) -> Result<Arc<ConsolePlayer>> {
        let config = self
            .config
            .player(&self.current)
            .with_context(|| format!("Player \"{}\" is not configured", self.current))?;
        let fresh = Arc::new(ConsolePlayer::new(config));
        if let Some(old) = self.players.insert(self.current.clone(), Arc::clone(&fresh)) {
            old.disconnect();
        }
        Ok(fresh)
    }

    fn handle(
        &mut self,
        line: &str,
        dispatcher: &Arc<Dispatcher<ConsolePlayer>>,
        tasks: &mut DispatchTasks,
    ) -> Result<()> {
        match Input::classify(line) {
            Input::Empty => {}
            Input::Command(command) => {
                let player = self.current()?;
                let dispatcher = Arc::clone(dispatcher);
                let command = command.to_string();
                tasks.spawn(async move { dispatcher.dispatch(player, &command).await });
            }
            Input::Switch(name) => {
                if self.switch(name) {
                    println!("* now playing as {}", self.current);
                } else {
                    println!("* no player named \"{}\"", name);
                }
            }
            Input::EnterVehicle => self.current()?.set_in_vehicle(true),
            Input::ExitVehicle => self.current()?.set_in_vehicle(false),
            Input::Rejoin => {
                let player = self.rejoin()?;
                info!(player = %player_name(&player), "Player rejoined");
            }
            Input::Chat(text) => {
                println!("<{}> {}", player_name(&*self.current()?), text);
            }
        }
        Ok(())
    }
}

fn player_name(player: &ConsolePlayer) -> String {
    gamecmd_core::Actor::name(player)
}

fn report(result: std::result::Result<gamecmd_core::Result<DispatchOutcome>, JoinError>) {
    match result {
        Ok(Ok(outcome)) => debug!(?outcome, "Dispatch finished"),
        Ok(Err(e)) => warn!("Listener error: {}", e),
        Err(e) => warn!("Dispatch task ended abnormally: {}", e),
    }
}

/// Run the console until stdin closes or Ctrl-C
pub async fn run(player: Option<String>) -> Result<()> {
    let config = load_config()?;
    let dispatcher = Arc::new(build_dispatcher::<ConsolePlayer>(&config)?);
    let mut session = Session::new(config.console, player.as_deref())?;

    println!(
        "* playing as {}. Type /commands to list commands, @name to switch player.",
        session.current
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = DispatchTasks::new();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, abandoning {} pending command(s)", tasks.len());
                tasks.abort_all();
                return Ok(());
            }
            line = lines.next_line() => {
                match line.context("Failed to read stdin")? {
                    Some(line) => session.handle(&line, &dispatcher, &mut tasks)?,
                    None => break,
                }
            }
            Some(result) = tasks.join_next(), if !tasks.is_empty() => report(result),
        }
    }

    while let Some(result) = tasks.join_next().await {
        report(result);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::{AppConfig, PlayerConfig};
    use gamecmd_stock::Player;

    fn console() -> ConsoleConfig {
        ConsoleConfig {
            default_player: "admin".to_string(),
            players: vec![
                PlayerConfig {
                    name: "Admin".to_string(),
                    admin_level: 5,
                    model: "mp_m_freemode_01".to_string(),
                    in_vehicle: false,
                },
                PlayerConfig {
                    name: "guest".to_string(),
                    admin_level: 0,
                    model: "mp_f_freemode_01".to_string(),
                    in_vehicle: false,
                },
            ],
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Input::classify("  /echo hi  "), Input::Command("echo hi"));
        assert_eq!(Input::classify("/"), Input::Command(""));
        assert_eq!(Input::classify("@ guest"), Input::Switch("guest"));
        assert_eq!(Input::classify("!enter"), Input::EnterVehicle);
        assert_eq!(Input::classify("!exit"), Input::ExitVehicle);
        assert_eq!(Input::classify("!rejoin"), Input::Rejoin);
        assert_eq!(Input::classify("hello there"), Input::Chat("hello there"));
        assert_eq!(Input::classify("   "), Input::Empty);
    }

    #[test]
    fn test_session_switch() {
        let mut session = Session::new(console(), None).unwrap();
        assert_eq!(session.current, "admin");

        assert!(session.switch("GUEST"));
        assert_eq!(player_name(&*session.current().unwrap()), "guest");
        assert!(!session.switch("nobody"));
        assert_eq!(session.current, "guest");
    }

    #[tokio::test]
    async fn test_chat_and_vehicle_lines() {
        let dispatcher = build_dispatcher::<ConsolePlayer>(&AppConfig::default()).unwrap();
        let dispatcher = Arc::new(dispatcher);
        let mut session = Session::new(console(), Some("guest")).unwrap();
        let mut tasks = DispatchTasks::new();

        session.handle("!enter", &dispatcher, &mut tasks).unwrap();
        assert!(session.current().unwrap().in_vehicle());

        session.handle("hello there", &dispatcher, &mut tasks).unwrap();
        session.handle("!exit", &dispatcher, &mut tasks).unwrap();

        assert!(!session.current().unwrap().in_vehicle());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_session_unknown_initial_player() {
        assert!(Session::new(console(), Some("nobody")).is_err());
    }

    #[test]
    fn test_rejoin_disconnects_old_player() {
        let mut session = Session::new(console(), Some("guest")).unwrap();
        let old = session.current().unwrap();

        let fresh = session.rejoin().unwrap();

        assert!(!old.is_connected());
        assert!(fresh.is_connected());
        assert!(Arc::ptr_eq(&fresh, &session.current().unwrap()));
    }

    #[tokio::test]
    async fn test_command_lines_are_dispatched() {
        let dispatcher = build_dispatcher::<ConsolePlayer>(&AppConfig::default()).unwrap();
        let dispatcher = Arc::new(dispatcher);
        let mut session = Session::new(console(), None).unwrap();
        let mut tasks = DispatchTasks::new();

        session.handle("/echo hi", &dispatcher, &mut tasks).unwrap();
        session.handle("/nope", &dispatcher, &mut tasks).unwrap();
        session.handle("just chatting", &dispatcher, &mut tasks).unwrap();

        let mut outcomes = Vec::new();
        while let Some(result) = tasks.join_next().await {
            outcomes.push(result.unwrap().unwrap());
        }
        outcomes.sort_by_key(|o| o.is_completed());
        assert_eq!(
            outcomes,
            vec![DispatchOutcome::Unresolved, DispatchOutcome::Completed]
        );
    }
}
