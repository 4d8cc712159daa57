//! Story script: the scene sequence gated by story progress.

use game_core::Skill;
use serde::{Deserialize, Serialize};

/// The whole scripted story, in presentation order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub scenes: Vec<Scene>,
    /// Shown once progress runs past the last scene.
    pub ending: String,
}

impl Story {
    /// Scene for a story progress marker, `None` once the story is over.
    pub fn scene(&self, progress: u32) -> Option<&Scene> {
        self.scenes.get(usize::try_from(progress).ok()?)
    }

    /// Names of every map the script refers to, in scene order.
    pub fn map_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for scene in &self.scenes {
            if let Scene::Explore { map, interaction } = scene {
                names.push(map.as_str());
                if let Some(replacement) = interaction
                    .as_ref()
                    .and_then(|interaction| interaction.replace_map.as_deref())
                {
                    names.push(replacement);
                }
            }
        }
        names
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// Lines shown one after another, with inline style tags.
    Narration { lines: Vec<String> },
    /// Free movement on a map until the player reaches an exit tile.
    Explore {
        map: String,
        #[serde(default)]
        interaction: Option<Interaction>,
    },
    /// `count` enemies of one kind, all at `level`.
    Battle {
        enemy: String,
        level: u32,
        count: u32,
    },
}

/// What stepping on a `%` tile offers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub prompt: String,
    pub accept: String,
    pub decline: String,
    /// Map swapped in once the offer is accepted.
    #[serde(default)]
    pub replace_map: Option<String>,
    #[serde(default)]
    pub grant_skill: Option<Skill>,
    #[serde(default)]
    pub reward: Option<Dialog>,
}

/// A menu shown for flavour; some options get a reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub prompt: String,
    pub options: Vec<String>,
    /// (option, reply) pairs.
    #[serde(default)]
    pub replies: Vec<(String, String)>,
}

impl Dialog {
    pub fn reply_to(&self, option: &str) -> Option<&str> {
        self.replies
            .iter()
            .find(|(choice, _)| choice == option)
            .map(|(_, reply)| reply.as_str())
    }
}
