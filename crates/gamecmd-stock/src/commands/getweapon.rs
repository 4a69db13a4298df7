//! getweapon - admin-only weapon grant

use crate::joaat::joaat;
use crate::player::Player;
use gamecmd_core::CommandSpec;

/// State key holding the required admin level
pub const ADMIN_LEVEL: &str = "cmdAdminLevel";

/// Ammo given when none is specified
pub const DEFAULT_AMMO: u32 = 9999;

const SYNTAX: &str = "Syntax: /getweapon [name] [ammo]";

/// `/getweapon weapon_carbinerifle 500`
///
/// Players below `admin_level` are silently refused.
pub fn getweapon<P: Player>(admin_level: i64) -> CommandSpec<P> {
    CommandSpec::<P>::new("getweapon")
        .alias("giveweapon")
        .extra(ADMIN_LEVEL, admin_level)
        .guard_fn(|inv| {
            let required = inv.state().get_i64(ADMIN_LEVEL).unwrap_or(i64::MAX);
            Ok(inv.actor().admin_level() >= required)
        })
        .execute_fn(|inv| {
            let player = inv.actor();
            let Some(weapon) = inv.arg(0) else {
                player.output_chat(SYNTAX);
                return Ok(());
            };
            let ammo = match inv.arg(1).map(str::parse::<u32>) {
                None => DEFAULT_AMMO,
                Some(Ok(ammo)) => ammo,
                Some(Err(_)) => {
                    player.output_chat(SYNTAX);
                    return Ok(());
                }
            };

            player.give_weapon(joaat(weapon), ammo);
            player.output_chat(&format!("Gave yourself {} with {} ammo.", weapon, ammo));
            Ok(())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dispatcher_for, TestPlayer};
    use gamecmd_core::DispatchOutcome;
    use std::sync::Arc;

    fn admin() -> Arc<TestPlayer> {
        Arc::new(TestPlayer {
            admin_level: 5,
            ..TestPlayer::default()
        })
    }

    #[tokio::test]
    async fn test_admin_gets_weapon() {
        let dispatcher = dispatcher_for(vec![getweapon(5)]);
        let player = admin();

        let outcome = dispatcher
            .dispatch(Arc::clone(&player), "giveweapon weapon_carbinerifle 500")
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Completed);
        assert_eq!(player.weapons(), vec![(0x83BF_0278, 500)]);
        assert_eq!(
            player.chat(),
            vec!["Gave yourself weapon_carbinerifle with 500 ammo."]
        );
    }

    #[tokio::test]
    async fn test_default_ammo() {
        let dispatcher = dispatcher_for(vec![getweapon(5)]);
        let player = admin();

        dispatcher
            .dispatch(Arc::clone(&player), "getweapon weapon_pistol")
            .await
            .unwrap();

        assert_eq!(player.weapons(), vec![(joaat("weapon_pistol"), DEFAULT_AMMO)]);
    }

    #[tokio::test]
    async fn test_syntax_errors() {
        let dispatcher = dispatcher_for(vec![getweapon(5)]);
        let player = admin();

        dispatcher
            .dispatch(Arc::clone(&player), "getweapon")
            .await
            .unwrap();
        dispatcher
            .dispatch(Arc::clone(&player), "getweapon weapon_pistol lots")
            .await
            .unwrap();

        assert!(player.weapons().is_empty());
        assert_eq!(player.chat(), vec![SYNTAX, SYNTAX]);
    }

    #[tokio::test]
    async fn test_non_admin_refused() {
        let dispatcher = dispatcher_for(vec![getweapon(5)]);
        let player = Arc::new(TestPlayer {
            admin_level: 4,
            ..TestPlayer::default()
        });

        let outcome = dispatcher
            .dispatch(Arc::clone(&player), "getweapon weapon_pistol")
            .await
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Skipped);
        assert!(player.weapons().is_empty());
        assert!(player.chat().is_empty());
    }
}
