use game_content::{ContentFactory, Scene};
use game_core::{Position, SemanticTile, Skill};

fn factory() -> ContentFactory {
    ContentFactory::new(ContentFactory::bundled_data_dir())
}

#[test]
fn bundled_story_and_maps_load() {
    let story = factory().load_validated_story().unwrap();

    assert_eq!(story.scenes.len(), 4);
    assert!(matches!(story.scene(0), Some(Scene::Narration { .. })));
    assert!(matches!(
        story.scene(3),
        Some(Scene::Battle {
            level: 1,
            count: 3,
            ..
        })
    ));
    assert!(story.scene(4).is_none());
}

#[test]
fn sword_pickup_swaps_in_a_map_without_the_sword() {
    let factory = factory();
    let story = factory.load_story().unwrap();
    let Some(Scene::Explore {
        map,
        interaction: Some(interaction),
    }) = story.scene(1)
    else {
        panic!("scene 1 should be the cave");
    };
    assert_eq!(interaction.grant_skill, Some(Skill::SwordStrike));
    let reward = interaction.reward.as_ref().unwrap();
    assert_eq!(reward.reply_to("idk that sounds pretty mid"), Some("Be Greatful"));
    assert_eq!(reward.reply_to("Great!"), None);

    let cave = factory.load_map(map).unwrap();
    let emptied = factory
        .load_map(interaction.replace_map.as_deref().unwrap())
        .unwrap();

    assert_eq!(cave.dimensions(), emptied.dimensions());
    assert_eq!(cave.starting_position(), emptied.starting_position());
    let specials = |map: &game_core::TileMap| {
        let dims = map.dimensions();
        (0..dims.rows)
            .flat_map(|row| (0..dims.cols).map(move |col| Position::new(row, col)))
            .filter(|pos| map.semantic_at(*pos) == Some(SemanticTile::Special))
            .count()
    };
    assert_eq!(specials(&cave), 1);
    assert_eq!(specials(&emptied), 0);
}
