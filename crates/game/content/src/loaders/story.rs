//! Story script loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::story::Story;

/// Loader for the RON story script.
pub struct StoryLoader;

impl StoryLoader {
    pub fn load(path: &Path) -> LoadResult<Story> {
        let content = read_file(path)?;
        let story = Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse story RON at {}: {}", path.display(), e)
        })?;
        tracing::debug!(scenes = story.scenes.len(), "story loaded");
        Ok(story)
    }

    pub fn parse(content: &str) -> LoadResult<Story> {
        Ok(ron::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Scene;
    use game_core::Skill;

    const SCRIPT: &str = r#"
        (
            scenes: [
                Narration(lines: ["You wake up."]),
                Explore(
                    map: "cave",
                    interaction: Some((
                        prompt: "A sword. Take it?",
                        accept: "Take it",
                        decline: "Leave it",
                        replace_map: Some("cave_no_sword"),
                        grant_skill: Some(SwordStrike),
                    )),
                ),
                Explore(map: "forest"),
                Battle(enemy: "Slime", level: 1, count: 3),
            ],
            ending: "To be continued...",
        )
    "#;

    #[test]
    fn parses_every_scene_kind() {
        let story = StoryLoader::parse(SCRIPT).unwrap();

        assert_eq!(story.scenes.len(), 4);
        let Some(Scene::Explore {
            interaction: Some(interaction),
            ..
        }) = story.scene(1)
        else {
            panic!("scene 1 should be an explore scene with an interaction");
        };
        assert_eq!(interaction.grant_skill, Some(Skill::SwordStrike));
        assert_eq!(interaction.reward, None);
        assert!(matches!(
            story.scene(2),
            Some(Scene::Explore {
                interaction: None,
                ..
            })
        ));
        assert_eq!(
            story.scene(3),
            Some(&Scene::Battle {
                enemy: "Slime".into(),
                level: 1,
                count: 3
            })
        );
        assert_eq!(story.scene(4), None);
        assert_eq!(story.map_names(), ["cave", "cave_no_sword", "forest"]);
    }

    #[test]
    fn bad_script_is_an_error() {
        assert!(StoryLoader::parse("(scenes: [Dance], ending: \"\")").is_err());
    }
}
