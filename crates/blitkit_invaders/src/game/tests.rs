use super::*;

fn quiet_config() -> GameConfig {
    GameConfig {
        bomb_chance: 0,
        ..GameConfig::default()
    }
}

fn small_game(rows: u32, cols: u32) -> Game {
    Game::with_config(GameConfig {
        rows,
        cols,
        bomb_chance: 0,
        lives: 3,
    })
}

#[test]
fn held_space_fires_exactly_once() {
    let mut game = Game::with_config(quiet_config());
    let mut input = InputTracker::new();

    input.press(Key::Space);
    game.tick(&mut input);
    assert_eq!(game.shots.len(), 1);

    // Still held: no second shot.
    game.tick(&mut input);
    assert_eq!(game.shots.len(), 1);

    input.release(Key::Space);
    input.press(Key::Space);
    game.tick(&mut input);
    assert_eq!(game.shots.len(), 2);
}

#[test]
fn ship_steers_and_clamps() {
    let mut game = Game::with_config(quiet_config());
    let mut input = InputTracker::new();
    let start = game.ship_x;

    input.press(Key::Left);
    game.tick(&mut input);
    game.tick(&mut input);
    assert_eq!(game.ship_x, start - 2 * SHIP_SPEED);

    input.release(Key::Left);
    input.press(Key::D);
    game.tick(&mut input);
    assert_eq!(game.ship_x, start - SHIP_SPEED);

    input.release(Key::D);
    input.press(Key::A);
    for _ in 0..200 {
        game.tick(&mut input);
    }
    assert_eq!(game.ship_x, 0);
}

#[test]
fn grid_advances_every_step_interval() {
    let mut game = small_game(1, 1);
    let mut input = InputTracker::new();
    let start_x = game.invaders[0].x;

    for _ in 0..GRID_STEP_TICKS - 1 {
        game.tick(&mut input);
    }
    assert_eq!(game.invaders[0].x, start_x);
    assert!(!game.frame);

    game.tick(&mut input);
    assert_eq!(game.invaders[0].x, start_x + GRID_STEP_X);
    assert!(game.frame);
}

#[test]
fn grid_reverses_and_drops_at_the_wall() {
    let mut game = small_game(1, 1);
    let mut input = InputTracker::new();
    let wall_x = SCREEN_WIDTH as i32 - SPRITE_SIZE - 2;
    game.invaders[0].x = wall_x;
    let start_y = game.invaders[0].y;

    for _ in 0..GRID_STEP_TICKS {
        game.tick(&mut input);
    }
    // One more step right would pass the wall: reverse and drop instead.
    assert_eq!(game.invaders[0].x, wall_x);
    assert_eq!(game.invaders[0].y, start_y + GRID_DROP);
    assert_eq!(game.dir, -1);

    for _ in 0..GRID_STEP_TICKS {
        game.tick(&mut input);
    }
    assert_eq!(game.invaders[0].x, wall_x - GRID_STEP_X);
}

#[test]
fn shot_kills_one_invader_and_scores() {
    let mut game = small_game(1, 2);
    let mut input = InputTracker::new();
    let target = game.invaders[0];
    game.shots.push(Shot {
        x: target.x + 3,
        y: target.y + SPRITE_SIZE + 2,
    });

    game.tick(&mut input);
    assert!(!game.invaders[0].alive);
    assert!(game.invaders[1].alive);
    assert_eq!(game.score(), INVADER_SCORE);
    assert!(game.shots.is_empty());
}

#[test]
fn clearing_the_wave_respawns_it_and_keeps_score() {
    let mut game = small_game(1, 1);
    let mut input = InputTracker::new();
    let target = game.invaders[0];
    game.shots.push(Shot {
        x: target.x + 3,
        y: target.y + SPRITE_SIZE + 2,
    });

    game.tick(&mut input);
    assert_eq!(game.score(), INVADER_SCORE);
    assert_eq!(game.invaders.len(), 1);
    assert!(game.invaders[0].alive);
    assert_eq!(game.invaders[0].x, GRID_ORIGIN_X);
    assert!(!game.game_over());
}

#[test]
fn bomb_hit_costs_a_life() {
    let mut game = Game::with_config(GameConfig {
        rows: 1,
        cols: 1,
        bomb_chance: 0,
        lives: 2,
    });
    let mut input = InputTracker::new();
    game.bombs.push(Shot {
        x: game.ship_x + 2,
        y: SHIP_Y - BOMB_HEIGHT - 1,
    });

    game.tick(&mut input);
    assert_eq!(game.lives(), 1);
    assert!(game.bombs.is_empty());
    assert!(!game.game_over());
}

#[test]
fn final_bomb_hit_ends_the_game() {
    let mut game = Game::with_config(GameConfig {
        rows: 1,
        cols: 1,
        bomb_chance: 0,
        lives: 1,
    });
    let mut input = InputTracker::new();
    game.bombs.push(Shot {
        x: game.ship_x + 2,
        y: SHIP_Y - BOMB_HEIGHT - 1,
    });

    game.tick(&mut input);
    assert_eq!(game.lives(), 0);
    assert!(game.game_over());
}

#[test]
fn invaders_reaching_the_ship_row_end_the_game() {
    let mut game = small_game(1, 1);
    let mut input = InputTracker::new();
    game.invaders[0].y = SHIP_Y - SPRITE_SIZE;

    for _ in 0..GRID_STEP_TICKS {
        game.tick(&mut input);
    }
    assert!(game.game_over());
}

#[test]
fn only_r_is_read_after_game_over() {
    let mut game = Game::with_config(quiet_config());
    let mut input = InputTracker::new();
    game.score = 70;
    game.game_over = true;

    input.press(Key::Space);
    game.tick(&mut input);
    assert!(game.shots.is_empty());
    assert!(game.game_over());

    input.press(Key::R);
    game.tick(&mut input);
    assert!(!game.game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), GameConfig::default().lives);
    assert_eq!(game.invaders.len(), 3 * 6);
}

#[test]
fn bomb_chance_controls_bombing() {
    let mut game = small_game(1, 1);
    for _ in 0..64 {
        game.drop_bomb();
    }
    assert!(game.bombs.is_empty());

    let mut game = Game::with_config(GameConfig {
        rows: 1,
        cols: 1,
        bomb_chance: u8::MAX,
        lives: 3,
    });
    for _ in 0..64 {
        game.drop_bomb();
    }
    assert!(!game.bombs.is_empty());

    // Bombs start just under their invader.
    let bomb = game.bombs[0];
    assert_eq!(bomb.x, game.invaders[0].x + (SPRITE_SIZE - BOMB_WIDTH) / 2);
    assert_eq!(bomb.y, game.invaders[0].y + SPRITE_SIZE);
}

#[test]
fn shots_and_bombs_leave_the_screen() {
    let mut game = Game::with_config(quiet_config());
    let mut input = InputTracker::new();
    game.shots.push(Shot { x: 0, y: 2 });
    game.bombs.push(Shot {
        x: 0,
        y: SCREEN_HEIGHT as i32 - 2,
    });

    game.tick(&mut input);
    assert_eq!(game.shots.len(), 1);
    assert!(game.bombs.is_empty());

    game.tick(&mut input);
    assert!(game.shots.is_empty());
}

#[test]
fn rendering_places_the_sprites() {
    let game = Game::with_config(quiet_config());
    let mut screen = Screen::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    game.render(&mut screen);

    // Head of the top-left invader.
    assert_eq!(
        screen.pixel(GRID_ORIGIN_X as u32 + 3, GRID_ORIGIN_Y as u32),
        Some(Color::GREEN)
    );
    // Tip of the ship cannon.
    assert_eq!(
        screen.pixel(game.ship_x as u32 + 3, SHIP_Y as u32),
        Some(Color::WHITE)
    );
    // First life icon along the bottom edge.
    assert_eq!(
        screen.pixel(5, SCREEN_HEIGHT - SPRITE_SIZE as u32 - 2),
        Some(Color::WHITE)
    );
    // Untouched background stays black.
    assert_eq!(screen.pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn projectile_rectangles_match_their_glyphs() {
    assert_eq!(sprites::shot().width(), SHOT_WIDTH as u32);
    assert_eq!(sprites::shot().height(), SHOT_HEIGHT as u32);
    assert_eq!(sprites::bomb().width(), BOMB_WIDTH as u32);
    assert_eq!(sprites::bomb().height(), BOMB_HEIGHT as u32);
    assert_eq!(sprites::ship().width(), SPRITE_SIZE as u32);
    assert_eq!(sprites::ship().height(), SPRITE_SIZE as u32);
}
