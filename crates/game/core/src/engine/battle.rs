//! Turn-based encounter resolution.
//!
//! A round is the player phase followed by the enemy phase:
//!
//! 1. The player applies the chosen skill to the chosen target `turns` times.
//!    A defeated target leaves the roster at once and absorbs no further hits.
//! 2. An empty roster ends the battle in victory before any enemy acts.
//! 3. Each surviving enemy, in roster order, attacks the player `turns` times.
//!    The first hit that drops the player to zero or below ends the battle.

use crate::combat::{AttackResult, CombatError, Skill};
use crate::engine::errors::{BattleError, RunError};
use crate::env::RngOracle;
use crate::state::{Combatant, EntityId};

/// Skill and target picked by the driver for one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleChoice {
    pub skill: Skill,
    pub target: EntityId,
}

impl BattleChoice {
    pub const fn new(skill: Skill, target: EntityId) -> Self {
        Self { skill, target }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// One narration event, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    Attack(AttackResult),
    EnemyDefeated { name: String },
    /// Player survived an enemy hit.
    PlayerStatus { health: i32 },
}

impl BattleEvent {
    /// Text for the presentation layer, with inline style tags.
    pub fn narration(&self) -> String {
        match self {
            BattleEvent::Attack(result) => result.narration.clone(),
            BattleEvent::EnemyDefeated { name } => format!("{name} has been defeated!"),
            BattleEvent::PlayerStatus { health } => format!("You have {health} HP left."),
        }
    }
}

/// Events of one round plus the outcome, if the round ended the battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundReport {
    pub events: Vec<BattleEvent>,
    pub outcome: Option<BattleOutcome>,
}

/// Supplies choices and consumes narration for [`run`].
pub trait BattleDriver {
    type Error;

    /// Picks the skill and target for the next round.
    fn choose(
        &mut self,
        player: &Combatant,
        roster: &[Combatant],
    ) -> Result<BattleChoice, Self::Error>;

    /// Presents one event. Called in order, one at a time.
    fn narrate(&mut self, event: &BattleEvent) -> Result<(), Self::Error>;
}

/// A single encounter between the player and a mutable enemy roster.
#[derive(Debug)]
pub struct Battle<'a> {
    player: &'a mut Combatant,
    roster: Vec<Combatant>,
    rounds: u32,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a mut Combatant, roster: Vec<Combatant>) -> Self {
        tracing::info!(
            enemies = roster.len(),
            player_health = player.health(),
            "battle started"
        );
        Self {
            player,
            roster,
            rounds: 0,
        }
    }

    pub fn player(&self) -> &Combatant {
        &*self.player
    }

    /// Enemies still standing, in attack order.
    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.player.is_defeated() {
            Some(BattleOutcome::Defeat)
        } else if self.roster.is_empty() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }

    /// Plays one full round with the given choice.
    ///
    /// The choice is validated before any hit lands, so a rejected choice
    /// leaves every combatant untouched.
    pub fn play_round(
        &mut self,
        choice: BattleChoice,
        rng: &mut dyn RngOracle,
    ) -> Result<RoundReport, BattleError> {
        if self.outcome().is_some() {
            return Err(BattleError::AlreadyResolved);
        }
        let target_index = self
            .roster
            .iter()
            .position(|enemy| enemy.id() == choice.target)
            .ok_or(BattleError::TargetNotInRoster {
                target: choice.target,
            })?;
        if !self.player.knows(choice.skill) {
            return Err(CombatError::SkillNotUnlocked {
                combatant: self.player.name().to_owned(),
                skill: choice.skill,
            }
            .into());
        }

        self.rounds += 1;
        let mut report = RoundReport::default();

        self.player_phase(choice.skill, target_index, rng, &mut report)?;
        if self.roster.is_empty() {
            tracing::info!(rounds = self.rounds, "battle won");
            report.outcome = Some(BattleOutcome::Victory);
            return Ok(report);
        }

        if self.enemy_phase(rng, &mut report)? {
            tracing::info!(rounds = self.rounds, "battle lost");
            report.outcome = Some(BattleOutcome::Defeat);
        }
        Ok(report)
    }

    fn player_phase(
        &mut self,
        skill: Skill,
        target_index: usize,
        rng: &mut dyn RngOracle,
        report: &mut RoundReport,
    ) -> Result<(), BattleError> {
        for _ in 0..self.player.turns() {
            let target = &mut self.roster[target_index];
            let hit = self.player.use_skill(skill, target, rng)?;
            report.events.push(BattleEvent::Attack(hit));

            if target.is_defeated() {
                let defeated = self.roster.remove(target_index);
                tracing::debug!(enemy = defeated.name(), "enemy removed from roster");
                report.events.push(BattleEvent::EnemyDefeated {
                    name: defeated.name().to_owned(),
                });
                break;
            }
        }
        Ok(())
    }

    /// Returns true if the player was defeated.
    fn enemy_phase(
        &mut self,
        rng: &mut dyn RngOracle,
        report: &mut RoundReport,
    ) -> Result<bool, BattleError> {
        for enemy in &self.roster {
            for _ in 0..enemy.turns() {
                let hit = enemy.strike(&mut *self.player, rng)?;
                report.events.push(BattleEvent::Attack(hit));

                if self.player.is_defeated() {
                    return Ok(true);
                }
                report.events.push(BattleEvent::PlayerStatus {
                    health: self.player.health(),
                });
            }
        }
        Ok(false)
    }
}

/// Runs an encounter to completion, forwarding every event to the driver.
pub fn run<D: BattleDriver>(
    battle: &mut Battle<'_>,
    driver: &mut D,
    rng: &mut dyn RngOracle,
) -> Result<BattleOutcome, RunError<D::Error>> {
    loop {
        if let Some(outcome) = battle.outcome() {
            return Ok(outcome);
        }

        let choice = driver
            .choose(battle.player(), battle.roster())
            .map_err(RunError::Driver)?;
        let report = battle.play_round(choice, rng)?;

        for event in &report.events {
            driver.narrate(event).map_err(RunError::Driver)?;
        }
        if let Some(outcome) = report.outcome {
            return Ok(outcome);
        }
    }
}

/// Builds `count` enemies of one kind, named `"{kind} 1"` through `"{kind} n"`.
pub fn build_roster(
    kind: &str,
    level: u32,
    count: u32,
    rng: &mut dyn RngOracle,
) -> Vec<Combatant> {
    (1..=count)
        .map(|num| Combatant::enemy(EntityId(num), format!("{kind} {num}"), level, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::stats::LevelStats;

    struct Constant(u32);

    impl RngOracle for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    fn enemy(id: u32, health: i32, attack: u32, turns: u32) -> Combatant {
        Combatant::with_stats(
            EntityId(id),
            format!("Slime {id}"),
            1,
            LevelStats {
                health,
                attack,
                turns,
            },
            Vec::new(),
        )
    }

    fn player(health: i32, attack: u32, turns: u32) -> Combatant {
        Combatant::with_stats(
            EntityId::PLAYER,
            Combatant::PLAYER_NAME,
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
    fn rejected_target_changes_nothing() {
        let mut hero = player(20, 5, 1);
        let mut battle = Battle::new(&mut hero, vec![enemy(1, 10, 2, 1)]);

        let err = battle
            .play_round(BattleChoice::new(Skill::Punch, EntityId(9)), &mut Constant(0))
            .unwrap_err();

        assert_eq!(err, BattleError::TargetNotInRoster { target: EntityId(9) });
        assert_eq!(battle.roster()[0].health(), 10);
        assert_eq!(battle.rounds(), 0);
    }

    #[test]
    fn locked_skill_is_rejected_before_any_hit() {
        let mut hero = player(20, 5, 1);
        let mut battle = Battle::new(&mut hero, vec![enemy(1, 10, 2, 1)]);

        let err = battle
            .play_round(
                BattleChoice::new(Skill::SwordStrike, EntityId(1)),
                &mut Constant(0),
            )
            .unwrap_err();

        assert!(matches!(err, BattleError::Combat(_)));
        assert_eq!(battle.roster()[0].health(), 10);
    }

    #[test]
    fn multi_turn_phase_stops_once_target_falls() {
        // 4 hits of 5 available, the first two are enough.
        let mut hero = player(20, 5, 4);
        let mut battle = Battle::new(&mut hero, vec![enemy(1, 10, 2, 1), enemy(2, 10, 2, 1)]);

        let report = battle
            .play_round(BattleChoice::new(Skill::Punch, EntityId(1)), &mut Constant(0))
            .unwrap();

        let player_hits = report
            .events
            .iter()
            .filter(|event| matches!(event, BattleEvent::Attack(hit) if hit.attacker == "you"))
            .count();
        assert_eq!(player_hits, 2);
        assert_eq!(
            report.events[2],
            BattleEvent::EnemyDefeated {
                name: "Slime 1".into()
            }
        );
        assert_eq!(battle.roster().len(), 1);
        assert_eq!(battle.roster()[0].health(), 10);
        assert_eq!(report.outcome, None);
    }

    #[test]
    fn each_enemy_swings_its_turn_count() {
        let mut hero = player(100, 1, 1);
        let mut battle = Battle::new(&mut hero, vec![enemy(1, 50, 4, 2), enemy(2, 50, 4, 3)]);

        let report = battle
            .play_round(BattleChoice::new(Skill::Punch, EntityId(1)), &mut Constant(0))
            .unwrap();

        let enemy_hits: Vec<_> = report
            .events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::Attack(hit) if hit.target_id.is_player() => Some(hit.attacker.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            enemy_hits,
            ["Slime 1", "Slime 1", "Slime 2", "Slime 2", "Slime 2"]
        );
        // Constant(0) rolls the low end: 4 / 2 = 2 per hit.
        assert_eq!(battle.player().health(), 100 - 5 * 2);
        assert_eq!(
            report.events.last(),
            Some(&BattleEvent::PlayerStatus { health: 90 })
        );
    }

    #[test]
    fn resolved_battle_rejects_more_rounds() {
        let mut hero = player(20, 100, 1);
        let mut battle = Battle::new(&mut hero, vec![enemy(1, 10, 2, 1)]);
        let choice = BattleChoice::new(Skill::Punch, EntityId(1));

        battle.play_round(choice, &mut Constant(0)).unwrap();

        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));
        assert_eq!(
            battle.play_round(choice, &mut Constant(0)),
            Err(BattleError::AlreadyResolved)
        );
    }

    #[test]
    fn empty_roster_is_an_immediate_victory() {
        let mut hero = player(20, 5, 1);
        let battle = Battle::new(&mut hero, Vec::new());
        assert_eq!(battle.outcome(), Some(BattleOutcome::Victory));
    }

    #[test]
    fn roster_names_are_numbered() {
        let mut rng = PcgRng::new(9);
        let roster = build_roster("Slime", 1, 3, &mut rng);

        let names: Vec<_> = roster.iter().map(Combatant::name).collect();
        assert_eq!(names, ["Slime 1", "Slime 2", "Slime 3"]);
        let ids: Vec<_> = roster.iter().map(Combatant::id).collect();
        assert_eq!(ids, [EntityId(1), EntityId(2), EntityId(3)]);
        assert!(roster.iter().all(|slime| slime.skills().is_empty()));
    }

    #[test]
    fn narration_templates() {
        assert_eq!(
            BattleEvent::EnemyDefeated {
                name: "Slime 2".into()
            }
            .narration(),
            "Slime 2 has been defeated!"
        );
        assert_eq!(
            BattleEvent::PlayerStatus { health: 7 }.narration(),
            "You have 7 HP left."
        );
    }
}
