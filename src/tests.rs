//! Scenario tests across the rule core.

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::game::GameConfig;
    use crate::game::entities::CreatureId;
    use crate::game::grid::GameMap;
    use crate::game::state::Game;
    use crate::game::types::{Direction, Position};
    use crate::game::view::ViewEvent;

    fn empty_game(width: i32, height: i32, ammonite_start: Position) -> Game {
        let mut config = GameConfig::empty(width, height);
        config.ammonite_start = ammonite_start;
        let mut game = Game::new(config).unwrap();
        game.start().unwrap();
        game.drain_events();
        game
    }

    #[test]
    fn test_three_moves_right_stop_at_east_edge() {
        let mut game = empty_game(5, 5, Position::new(2, 2));
        let ammonite = CreatureId::Wanderer(0);

        assert!(game.try_creature_move(ammonite, Direction::Right));
        assert!(game.try_creature_move(ammonite, Direction::Right));
        assert!(!game.try_creature_move(ammonite, Direction::Right));

        assert_eq!(game.creatures[0].cell, Some(Position::new(4, 2)));
    }

    #[test]
    fn test_wandering_never_leaves_the_map() {
        let mut game = empty_game(3, 3, Position::new(1, 1));
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..500 {
            game.wander_tick(0, &mut rng);
            let pos = game.creatures[0].cell.unwrap();
            assert!(!game.map.position_out_of_bounds(pos));
        }
    }

    #[test]
    fn test_wandering_never_crosses_water() {
        let mut config = GameConfig::empty(5, 5);
        config.player_start = Position::new(4, 4);
        config.ammonite_start = Position::new(0, 0);
        // wall of water along x = 2
        config.rivers.push(crate::config::game::RiverConfig {
            start: Position::new(2, -1),
            path: "rrrrr".to_string(),
        });
        let mut game = Game::new(config).unwrap();
        game.start().unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..500 {
            game.wander_tick(0, &mut rng);
            assert!(game.creatures[0].cell.unwrap().x < 2);
        }
    }

    #[test]
    fn test_event_stream_replays_board() {
        let mut game = empty_game(5, 5, Position::new(2, 2));
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            game.wander_tick(0, &mut rng);
        }

        // Replaying the move events on the ammonite class ends on its cell.
        let mut shown: Vec<Position> = vec![Position::new(2, 2)];
        for event in game.drain_events() {
            match event {
                ViewEvent::AddClass { position, class } if class == "ammonite" => shown.push(position),
                ViewEvent::RemoveClass { position, class } if class == "ammonite" => shown.retain(|p| *p != position),
                _ => {}
            }
        }
        assert_eq!(shown, vec![game.creatures[0].cell.unwrap()]);
    }

    #[test]
    fn test_get_matches_position_on_default_board() {
        let config = GameConfig::default();
        let map = GameMap::new(config.width, config.height);
        for cell in map.cells() {
            assert_eq!(map.get(cell.position()).map(|c| c.position()), Some(cell.position()));
        }
    }
}
