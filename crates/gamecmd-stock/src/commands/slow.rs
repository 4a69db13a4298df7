//! async - a command whose guard and execute both wait on a slow service
//!
//! Stands in for commands that call out to an external API. The player may
//! leave while the command is waiting, so both handlers check the
//! connection before touching the player again.

use super::StockConfig;
use crate::player::Player;
use gamecmd_core::CommandSpec;
use rand::Rng;

fn roll(chance: f64) -> bool {
    rand::thread_rng().gen_bool(chance.clamp(0.0, 1.0))
}

/// The `async` command
pub fn slow<P: Player>(config: &StockConfig) -> CommandSpec<P> {
    let guard_delay = config.slow_guard_delay();
    let execute_delay = config.slow_execute_delay();
    let allow_chance = config.slow_allow_chance;
    let success_chance = config.slow_success_chance;

    CommandSpec::<P>::new("async")
        .guard(move |inv| async move {
            tokio::time::sleep(guard_delay).await;
            let player = inv.actor();
            if !player.is_connected() {
                return anyhow::Ok(false);
            }

            let allowed = roll(allow_chance);
            if allowed {
                player.output_chat("You're allowed...");
            } else {
                player.output_chat("You're not allowed...");
            }
            anyhow::Ok(allowed)
        })
        .execute(move |inv| async move {
            tokio::time::sleep(execute_delay).await;
            let player = inv.actor();
            if !player.is_connected() {
                return Ok(());
            }

            if roll(success_chance) {
                player.output_chat("You waited for nothing!");
                Ok(())
            } else {
                Err(anyhow::anyhow!("Failed so bad it caused an error"))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dispatcher_for, TestPlayer};
    use gamecmd_core::{DispatchOutcome, Stage};
    use std::sync::Arc;
    use std::time::Duration;

    fn config(allow: f64, success: f64) -> StockConfig {
        StockConfig {
            slow_allow_chance: allow,
            slow_success_chance: success,
            ..StockConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_allowed_and_successful() {
        let dispatcher = dispatcher_for(vec![slow(&config(1.0, 1.0))]);
        let player = Arc::new(TestPlayer::default());

        let outcome = dispatcher
            .dispatch(Arc::clone(&player), "async")
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Completed);
        assert_eq!(
            player.chat(),
            vec!["You're allowed...", "You waited for nothing!"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_allowed() {
        let dispatcher = dispatcher_for(vec![slow(&config(0.0, 1.0))]);
        let player = Arc::new(TestPlayer::default());

        let outcome = dispatcher
            .dispatch(Arc::clone(&player), "async")
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Skipped);
        assert_eq!(player.chat(), vec!["You're not allowed..."]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_failure() {
        let dispatcher = dispatcher_for(vec![slow(&config(1.0, 0.0))]);
        let player = Arc::new(TestPlayer::default());

        let outcome = dispatcher
            .dispatch(Arc::clone(&player), "async")
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Failed(Stage::Execute));
        assert_eq!(player.chat(), vec!["You're allowed..."]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_player_leaves_while_waiting() {
        let dispatcher = Arc::new(dispatcher_for(vec![slow(&config(1.0, 1.0))]));
        let player = Arc::new(TestPlayer::default());

        let task = {
            let dispatcher = Arc::clone(&dispatcher);
            let player = Arc::clone(&player);
            tokio::spawn(async move { dispatcher.dispatch(player, "async").await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        player.disconnect();

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome, DispatchOutcome::Skipped);
        assert!(player.chat().is_empty());
    }
}
