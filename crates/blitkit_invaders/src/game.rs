use rand::random;

use blitkit_common::{Color, Key};
use blitkit_core::{InputTracker, Screen};

use crate::sprites;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Pixels the ship moves per tick while a direction key is held.
const SHIP_SPEED: i32 = 2;
/// Pixels a player shot climbs per tick.
const SHOT_SPEED: i32 = 4;
/// Pixels a bomb falls per tick.
const BOMB_SPEED: i32 = 2;

/// Ticks between grid steps.
const GRID_STEP_TICKS: u32 = 12;
/// Horizontal pixels the grid shifts on each step.
const GRID_STEP_X: i32 = 4;
/// Pixels the grid drops when it reverses at a wall.
const GRID_DROP: i32 = 4;
/// Pixel spacing between invader origins in the grid.
const GRID_SPACING: i32 = 16;
/// Top-left origin of a freshly spawned grid. Sits below the pause
/// banner band so the top row is never hidden.
const GRID_ORIGIN_X: i32 = 8;
const GRID_ORIGIN_Y: i32 = 16;

/// Side length of the invader and ship sprites.
const SPRITE_SIZE: i32 = 8;
/// Rectangle the player shot occupies, matching its sheet glyph.
const SHOT_WIDTH: i32 = 2;
const SHOT_HEIGHT: i32 = 6;
/// Rectangle a bomb occupies, matching its sheet glyph.
const BOMB_WIDTH: i32 = 3;
const BOMB_HEIGHT: i32 = 6;

/// Row the ship sits on. Invaders reaching this row end the game.
const SHIP_Y: i32 = SCREEN_HEIGHT as i32 - 20;
/// Points per invader destroyed.
const INVADER_SCORE: u32 = 10;

/// Tunable parameters for a round.
///
/// - `rows` x `cols` is the size of each spawned wave.
/// - `bomb_chance` is the chance, out of 256, that a grid step drops a
///   bomb from a random surviving invader.
/// - `lives` is the number of bomb hits the player survives.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub rows: u32,
    pub cols: u32,
    pub bomb_chance: u8,
    pub lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 6,
            bomb_chance: 48,
            lives: 3,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Invader {
    x: i32,
    y: i32,
    alive: bool,
}

#[derive(Clone, Copy, Debug)]
struct Shot {
    x: i32,
    y: i32,
}

/// State of one invaders round.
///
/// The game owns no window and no clock. The caller ticks it once per
/// frame with the current input and asks it to render into a [`Screen`].
pub struct Game {
    config: GameConfig,
    ship_x: i32,
    invaders: Vec<Invader>,
    shots: Vec<Shot>,
    bombs: Vec<Shot>,
    dir: i32,
    step_timer: u32,
    frame: bool,
    score: u32,
    lives: u32,
    game_over: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut game = Self {
            config,
            ship_x: (SCREEN_WIDTH as i32 - SPRITE_SIZE) / 2,
            invaders: Vec::new(),
            shots: Vec::new(),
            bombs: Vec::new(),
            dir: 1,
            step_timer: 0,
            frame: false,
            score: 0,
            lives: config.lives,
            game_over: false,
        };
        game.spawn_wave();
        game
    }

    /// Start over with the same configuration.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance the round by one frame.
    ///
    /// Reads held keys for steering and edge-detected presses for firing,
    /// so holding space fires exactly one shot per press. After the round
    /// ends only `R` is read, to restart.
    pub fn tick(&mut self, input: &mut InputTracker) {
        if self.game_over {
            if input.is_pressed(Key::R) {
                log::info!("restarting after game over");
                self.reset();
            }
            return;
        }

        self.move_ship(input);
        if input.is_pressed(Key::Space) {
            self.fire();
        }

        self.advance_shots();
        self.step_grid();
        if self.game_over {
            return;
        }
        self.resolve_hits();

        if self.invaders.iter().all(|invader| !invader.alive) {
            log::info!("wave cleared at score {}", self.score);
            self.spawn_wave();
        }
    }

    /// Draw the round into `screen`, bottom layer first.
    pub fn render(&self, screen: &mut Screen) {
        screen.fill(Color::BLACK);

        let invader_sprite = if self.frame {
            sprites::invader_b()
        } else {
            sprites::invader_a()
        };
        for invader in self.invaders.iter().filter(|invader| invader.alive) {
            screen.draw_sprite(&invader_sprite, invader.x, invader.y);
        }

        let ship = sprites::ship();
        screen.draw_sprite(&ship, self.ship_x, SHIP_Y);

        let shot = sprites::shot();
        for s in &self.shots {
            screen.draw_sprite(&shot, s.x, s.y);
        }
        let bomb = sprites::bomb();
        for b in &self.bombs {
            screen.draw_sprite(&bomb, b.x, b.y);
        }

        // Remaining lives as small ships along the bottom edge.
        for i in 0..self.lives.min(8) {
            screen.draw_sprite(
                &ship,
                2 + i as i32 * (SPRITE_SIZE + 2),
                SCREEN_HEIGHT as i32 - SPRITE_SIZE - 2,
            );
        }
    }

    fn spawn_wave(&mut self) {
        self.invaders.clear();
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                self.invaders.push(Invader {
                    x: GRID_ORIGIN_X + col as i32 * GRID_SPACING,
                    y: GRID_ORIGIN_Y + row as i32 * GRID_SPACING,
                    alive: true,
                });
            }
        }
        self.dir = 1;
        self.step_timer = 0;
    }

    fn move_ship(&mut self, input: &InputTracker) {
        if input.is_down(Key::Left) || input.is_down(Key::A) {
            self.ship_x -= SHIP_SPEED;
        }
        if input.is_down(Key::Right) || input.is_down(Key::D) {
            self.ship_x += SHIP_SPEED;
        }
        self.ship_x = self.ship_x.clamp(0, SCREEN_WIDTH as i32 - SPRITE_SIZE);
    }

    fn fire(&mut self) {
        self.shots.push(Shot {
            x: self.ship_x + (SPRITE_SIZE - SHOT_WIDTH) / 2,
            y: SHIP_Y - SHOT_HEIGHT,
        });
    }

    fn advance_shots(&mut self) {
        for shot in &mut self.shots {
            shot.y -= SHOT_SPEED;
        }
        self.shots.retain(|shot| shot.y > -SHOT_HEIGHT);

        for bomb in &mut self.bombs {
            bomb.y += BOMB_SPEED;
        }
        self.bombs.retain(|bomb| bomb.y < SCREEN_HEIGHT as i32);
    }

    /// Every `GRID_STEP_TICKS` ticks: shift the grid, reversing and
    /// dropping a row at the walls, swap the leg animation frame, end the
    /// game if an invader reached the ship row, and maybe drop a bomb.
    fn step_grid(&mut self) {
        self.step_timer += 1;
        if self.step_timer < GRID_STEP_TICKS {
            return;
        }
        self.step_timer = 0;
        self.frame = !self.frame;

        let at_wall = self.invaders.iter().any(|invader| {
            let next = invader.x + GRID_STEP_X * self.dir;
            invader.alive && (next < 0 || next > SCREEN_WIDTH as i32 - SPRITE_SIZE)
        });

        if at_wall {
            self.dir = -self.dir;
            for invader in &mut self.invaders {
                invader.y += GRID_DROP;
            }
        } else {
            for invader in &mut self.invaders {
                invader.x += GRID_STEP_X * self.dir;
            }
        }

        if self
            .invaders
            .iter()
            .any(|invader| invader.alive && invader.y + SPRITE_SIZE >= SHIP_Y)
        {
            log::info!("invaders reached the ship row, game over");
            self.game_over = true;
            return;
        }

        self.drop_bomb();
    }

    fn drop_bomb(&mut self) {
        if random::<u8>() >= self.config.bomb_chance {
            return;
        }

        let alive: Vec<usize> = self
            .invaders
            .iter()
            .enumerate()
            .filter(|(_, invader)| invader.alive)
            .map(|(index, _)| index)
            .collect();
        if alive.is_empty() {
            return;
        }

        let invader = self.invaders[alive[random::<u32>() as usize % alive.len()]];
        self.bombs.push(Shot {
            x: invader.x + (SPRITE_SIZE - BOMB_WIDTH) / 2,
            y: invader.y + SPRITE_SIZE,
        });
    }

    fn resolve_hits(&mut self) {
        let invaders = &mut self.invaders;
        let mut scored = 0u32;
        self.shots.retain(|shot| {
            for invader in invaders.iter_mut() {
                if invader.alive
                    && overlaps(
                        shot.x, shot.y, SHOT_WIDTH, SHOT_HEIGHT, invader.x, invader.y,
                        SPRITE_SIZE, SPRITE_SIZE,
                    )
                {
                    invader.alive = false;
                    scored += INVADER_SCORE;
                    return false;
                }
            }
            true
        });
        if scored > 0 {
            self.score += scored;
            log::info!("invader down, score {}", self.score);
        }

        let ship_x = self.ship_x;
        let mut hits = 0u32;
        self.bombs.retain(|bomb| {
            if overlaps(
                bomb.x, bomb.y, BOMB_WIDTH, BOMB_HEIGHT, ship_x, SHIP_Y, SPRITE_SIZE,
                SPRITE_SIZE,
            ) {
                hits += 1;
                return false;
            }
            true
        });
        if hits > 0 {
            self.lives = self.lives.saturating_sub(hits);
            log::info!("ship hit, {} lives left", self.lives);
            if self.lives == 0 {
                log::info!("out of lives, final score {}", self.score);
                self.game_over = true;
            }
        }
    }
}

fn overlaps(ax: i32, ay: i32, aw: i32, ah: i32, bx: i32, by: i32, bw: i32, bh: i32) -> bool {
    ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
}

#[cfg(test)]
mod tests;
