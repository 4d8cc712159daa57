use std::convert::Infallible;

use game_core::engine::{self, Battle, BattleChoice, BattleDriver, BattleEvent, BattleOutcome};
use game_core::{Combatant, EntityId, GameSession, LevelStats, PcgRng, Skill, build_roster};

/// Always hits the first enemy in the roster with the first known skill.
#[derive(Default)]
struct FirstTarget {
    rounds: u32,
    events: Vec<BattleEvent>,
}

impl BattleDriver for FirstTarget {
    type Error = Infallible;

    fn choose(
        &mut self,
        player: &Combatant,
        roster: &[Combatant],
    ) -> Result<BattleChoice, Self::Error> {
        self.rounds += 1;
        Ok(BattleChoice::new(player.skills()[0], roster[0].id()))
    }

    fn narrate(&mut self, event: &BattleEvent) -> Result<(), Self::Error> {
        self.events.push(event.clone());
        Ok(())
    }
}

fn fighter(id: EntityId, health: i32, attack: u32, turns: u32) -> Combatant {
    let name = if id.is_player() {
        Combatant::PLAYER_NAME.to_owned()
    } else {
        format!("Slime {}", id.0)
    };
    Combatant::with_stats(
        id,
        name,
        1,
        LevelStats {
            health,
            attack,
            turns,
        },
        vec![Skill::Punch],
    )
}

#[test]
fn final_blow_ends_the_battle_before_retaliation() {
    let mut player = fighter(EntityId::PLAYER, 20, 100, 1);
    let mut battle = Battle::new(&mut player, vec![fighter(EntityId(1), 10, 5, 1)]);
    let mut driver = FirstTarget::default();
    let mut rng = PcgRng::new(1);

    let outcome = engine::run(&mut battle, &mut driver, &mut rng).unwrap();

    assert_eq!(outcome, BattleOutcome::Victory);
    assert!(battle.roster().is_empty());
    assert_eq!(driver.rounds, 1);
    assert_eq!(driver.events.len(), 2);
    assert!(matches!(&driver.events[0], BattleEvent::Attack(hit) if hit.target == "Slime 1"));
    assert_eq!(
        driver.events[1],
        BattleEvent::EnemyDefeated {
            name: "Slime 1".into()
        }
    );
    let enemy_actions = driver
        .events
        .iter()
        .filter(|event| matches!(event, BattleEvent::Attack(hit) if hit.target_id.is_player()))
        .count();
    assert_eq!(enemy_actions, 0);
    assert_eq!(player.health(), 20);
}

#[test]
fn nothing_happens_after_the_player_falls() {
    let mut player = fighter(EntityId::PLAYER, 1, 1, 1);
    let roster = vec![fighter(EntityId(1), 500, 2, 3), fighter(EntityId(2), 500, 2, 3)];
    let mut battle = Battle::new(&mut player, roster);
    let mut driver = FirstTarget::default();
    let mut rng = PcgRng::new(2);

    let outcome = engine::run(&mut battle, &mut driver, &mut rng).unwrap();

    assert_eq!(outcome, BattleOutcome::Defeat);
    assert_eq!(driver.rounds, 1);
    // Punch, then the first enemy hit lands for at least 1.
    assert_eq!(driver.events.len(), 2);
    match driver.events.last() {
        Some(BattleEvent::Attack(hit)) => {
            assert_eq!(hit.attacker, "Slime 1");
            assert_eq!(hit.target, "you");
            assert_eq!(hit.target_id, EntityId::PLAYER);
            assert!(hit.damage >= 1);
        }
        other => panic!("expected the killing blow last, got {other:?}"),
    }
    assert!(player.is_defeated());
}

#[test]
fn slime_encounter_resolves_with_a_fresh_player() {
    for seed in 0..64 {
        let mut session = GameSession::new();
        let mut rng = PcgRng::new(seed);
        let roster = build_roster("Slime", 1, 3, &mut rng);
        let mut battle = Battle::new(session.player_mut(), roster);
        let mut driver = FirstTarget::default();

        let outcome = engine::run(&mut battle, &mut driver, &mut rng).unwrap();

        match outcome {
            BattleOutcome::Victory => assert!(battle.roster().is_empty()),
            BattleOutcome::Defeat => {
                assert!(battle.player().is_defeated());
                assert!(
                    matches!(driver.events.last(), Some(BattleEvent::Attack(hit)) if hit.target == "you"),
                    "seed {seed}: killing blow must be the last event"
                );
            }
        }
        let hp_reports_at_or_below_zero = driver
            .events
            .iter()
            .filter(|event| matches!(event, BattleEvent::PlayerStatus { health } if *health <= 0))
            .count();
        assert_eq!(hp_reports_at_or_below_zero, 0, "seed {seed}");
    }
}
