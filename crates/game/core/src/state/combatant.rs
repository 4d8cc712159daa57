use crate::combat::{self, AttackResult, CombatError, Skill};
use crate::env::RngOracle;
use crate::state::EntityId;
use crate::stats::LevelStats;

/// Any battle participant, player or enemy.
///
/// Level, attack and turns are fixed at construction. Health only changes
/// through attack resolution in [`crate::combat`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    id: EntityId,
    name: String,
    health: i32,
    attack: u32,
    turns: u32,
    level: u32,
    skills: Vec<Skill>,
}

impl Combatant {
    /// Name the player is addressed by in narration.
    pub const PLAYER_NAME: &'static str = "you";

    /// Builds a combatant from explicit stats.
    pub fn with_stats(
        id: EntityId,
        name: impl Into<String>,
        level: u32,
        stats: LevelStats,
        skills: Vec<Skill>,
    ) -> Self {
        let mut unique = Vec::with_capacity(skills.len());
        for skill in skills {
            if !unique.contains(&skill) {
                unique.push(skill);
            }
        }
        Self {
            id,
            name: name.into(),
            health: stats.health,
            attack: stats.attack,
            turns: stats.turns.max(1),
            level: level.max(1),
            skills: unique,
        }
    }

    /// The player, with stats derived from `level`.
    pub fn player(level: u32, skills: Vec<Skill>) -> Self {
        Self::with_stats(
            EntityId::PLAYER,
            Self::PLAYER_NAME,
            level,
            LevelStats::for_player(level),
            skills,
        )
    }

    /// An enemy with randomly rolled level-derived stats and no skills.
    pub fn enemy(
        id: EntityId,
        name: impl Into<String>,
        level: u32,
        rng: &mut dyn RngOracle,
    ) -> Self {
        let stats = LevelStats::for_enemy(level, rng);
        Self::with_stats(id, name, level, stats, Vec::new())
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn knows(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Basic attack against `target`.
    pub fn strike(
        &self,
        target: &mut Combatant,
        rng: &mut dyn RngOracle,
    ) -> Result<AttackResult, CombatError> {
        combat::resolve_attack(self, target, rng)
    }

    /// Uses a named skill against `target`.
    pub fn use_skill(
        &self,
        skill: Skill,
        target: &mut Combatant,
        rng: &mut dyn RngOracle,
    ) -> Result<AttackResult, CombatError> {
        combat::resolve_skill(self, skill, target, rng)
    }

    /// Returns false if the skill was already known.
    pub(crate) fn learn(&mut self, skill: Skill) -> bool {
        if self.knows(skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub(crate) fn set_health(&mut self, health: i32) {
        self.health = health;
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Lvl {})", self.name, self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    /// Always returns the same raw value.
    struct Constant(u32);

    impl RngOracle for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    fn dummy(id: u32, health: i32, attack: u32) -> Combatant {
        Combatant::with_stats(
            EntityId(id),
            format!("Dummy {id}"),
            1,
            LevelStats {
                health,
                attack,
                turns: 1,
            },
            Vec::new(),
        )
    }

    #[test]
    fn basic_attack_only_touches_target() {
        let attacker = dummy(1, 30, 10);
        let mut target = dummy(2, 30, 4);
        let mut rng = PcgRng::new(5);

        let result = attacker.strike(&mut target, &mut rng).unwrap();

        assert!((5..=10).contains(&result.damage));
        assert_eq!(target.health(), 30 - result.damage as i32);
        assert_eq!(attacker.health(), 30);
        assert_eq!(
            result.narration,
            format!("Dummy 1 attacked Dummy 2 for `b{} `ndamage.", result.damage)
        );
    }

    #[test]
    fn punch_adds_bonus_to_attack() {
        let player = Combatant::player(2, vec![Skill::Punch]);
        let mut target = dummy(1, 50, 1);

        // 3 % 4 == 3, the top of U(0, 3)
        let result = player
            .use_skill(Skill::Punch, &mut target, &mut Constant(3))
            .unwrap();

        assert_eq!(result.damage, 6 + 3);
        assert_eq!(target.health(), 50 - 9);
        assert_eq!(result.narration, "You punched Dummy 1 for 9 damage.");
    }

    #[test]
    fn sword_strike_doubles_attack() {
        let player = Combatant::player(2, vec![Skill::Punch, Skill::SwordStrike]);
        let mut target = dummy(1, 50, 1);

        let result = player
            .use_skill(Skill::SwordStrike, &mut target, &mut Constant(0))
            .unwrap();

        assert_eq!(result.damage, 12);
        assert_eq!(
            result.narration,
            "You attacked Dummy 1 with your sword for `b12 `ndamage."
        );
    }

    #[test]
    fn locked_skill_is_refused_without_damage() {
        let player = Combatant::player(1, vec![Skill::Punch]);
        let mut target = dummy(1, 50, 1);

        let err = player
            .use_skill(Skill::SwordStrike, &mut target, &mut Constant(0))
            .unwrap_err();

        assert!(matches!(err, CombatError::SkillNotUnlocked { .. }));
        assert_eq!(target.health(), 50);
    }

    #[test]
    fn defeated_target_cannot_be_attacked() {
        let attacker = dummy(1, 10, 5);
        let mut target = dummy(2, 0, 5);

        let err = attacker.strike(&mut target, &mut Constant(0)).unwrap_err();

        assert_eq!(
            err,
            CombatError::TargetDefeated {
                target: "Dummy 2".into()
            }
        );
        assert_eq!(target.health(), 0);
    }

    #[test]
    fn duplicate_skills_collapse() {
        let player = Combatant::player(1, vec![Skill::Punch, Skill::Punch]);
        assert_eq!(player.skills(), &[Skill::Punch]);
    }

    #[test]
    fn display_shows_level() {
        let player = Combatant::player(3, vec![Skill::Punch]);
        assert_eq!(player.to_string(), "you (Lvl 3)");
    }
}
