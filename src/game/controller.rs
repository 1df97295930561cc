use crate::audio::SoundBoard;
use crate::config::GameRules;
use crate::game::input::{Direction, InputEvent, SpeechCommand, SpeechLabel};
use crate::game::level::Level;
use crate::game::model::{Coin, Cue, EndReason, Fighter, GameOver, Monster, Pose, Wall};
use crate::game::physics;
use crate::game::MinMax;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locomotion {
    Idle,
    Walking,
    Jumping,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Running,
    Ended(GameOver),
}

/// The whole game: fighter, level entities, camera and the input state the
/// handlers share. Every handler takes the sound board it may drive.
pub struct GameState {
    rules: GameRules,
    fighter: Fighter,
    coins: Vec<Coin>,
    monsters: Vec<Monster>,
    walls: Vec<Wall>,
    camera_x: f32,
    taps: u32,
    phase: Phase,
}

impl GameState {
    pub fn new(rules: GameRules, seed: &str) -> GameState {
        let Level { fighter, coins, monsters, walls, camera_x } = Level::new(&rules, seed);
        GameState { rules, fighter, coins, monsters, walls, camera_x, taps: 0, phase: Phase::Running }
    }

    pub fn start(&mut self, audio: &mut dyn SoundBoard) {
        audio.play_looped(Cue::Desert);
    }

    /// Current locomotion state, `None` once the game is over.
    pub fn locomotion(&self) -> Option<Locomotion> {
        if self.has_ended() {
            None
        } else if self.fighter.is_jumping {
            Some(Locomotion::Jumping)
        } else if self.fighter.dx != 0f32 {
            Some(Locomotion::Walking)
        } else {
            Some(Locomotion::Idle)
        }
    }

    pub fn has_ended(&self) -> bool {
        match self.phase {
            Phase::Ended(_) => true,
            Phase::Running => false,
        }
    }

    pub fn game_over(&self) -> Option<&GameOver> {
        match &self.phase {
            Phase::Ended(game_over) => Some(game_over),
            Phase::Running => None,
        }
    }

    /// Applies one input outside of the tick. Keys are ignored mid-jump, taps
    /// count only on the ground and speech always applies.
    pub fn handle(&mut self, event: InputEvent, audio: &mut dyn SoundBoard) {
        if self.has_ended() {
            return;
        }
        match event {
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {
                if !self.fighter.is_jumping {
                    self.apply_key(event, audio);
                }
            }
            InputEvent::TouchTap => self.tap(audio),
            InputEvent::Speech(command) => self.speech(command, audio),
        }
    }

    /// Advances the game by one frame. Returns true on the frame the game ends.
    pub fn tick(&mut self, keys: &[InputEvent], audio: &mut dyn SoundBoard) -> bool {
        if self.has_ended() {
            return false;
        }

        self.step_entities();
        self.collect_coins(audio);
        for coin in self.coins.iter_mut().filter(|coin| !coin.removed) {
            physics::bounce(coin, &self.walls);
        }

        if !self.fighter.is_jumping {
            for key in keys {
                self.apply_key(*key, audio);
            }
        } else {
            self.integrate_jump();
        }

        self.camera_x = physics::follow(
            self.camera_x,
            self.fighter.pos.x,
            self.rules.screen_width,
            self.rules.camera_follow_screens,
        );

        self.evaluate_end(audio)
    }

    fn step_entities(&mut self) {
        self.fighter.pos += self.fighter.velocity();
        for coin in self.coins.iter_mut().filter(|coin| !coin.removed) {
            coin.pos += coin.velocity;
        }
        for monster in self.monsters.iter_mut().filter(|monster| !monster.removed) {
            monster.pos += monster.velocity;
        }
    }

    fn collect_coins(&mut self, audio: &mut dyn SoundBoard) {
        let fighter = &mut self.fighter;
        for coin in self.coins.iter_mut().filter(|coin| !coin.removed) {
            if physics::overlaps(fighter.pos, fighter.radius, coin.pos, coin.radius) {
                audio.play(Cue::Coin);
                audio.stop(Cue::Walking);
                coin.removed = true;
                fighter.score += 1;
                log::debug!("coin collected, score {}", fighter.score);
            }
        }
    }

    fn apply_key(&mut self, event: InputEvent, audio: &mut dyn SoundBoard) {
        match event {
            InputEvent::KeyDown(Direction::Right) => self.walk(audio),
            InputEvent::KeyUp(Direction::Right) => {
                self.halt(audio);
                audio.stop(Cue::Jump);
            }
            InputEvent::KeyDown(Direction::Up) => self.jump(audio),
            _ => {}
        }
    }

    fn tap(&mut self, audio: &mut dyn SoundBoard) {
        if !self.on_ground() {
            return;
        }
        self.taps += 1;
        if self.taps == 2 {
            self.jump(audio);
            self.taps = 0;
        } else if self.taps == 1 {
            self.walk(audio);
        }
        if self.taps > 2 {
            self.taps = 0;
        }
    }

    fn speech(&mut self, command: SpeechCommand, audio: &mut dyn SoundBoard) {
        log::debug!("voice command {:?} ({:.2})", command.label, command.confidence);
        match command.label {
            SpeechLabel::Up => self.jump(audio),
            SpeechLabel::Right => {
                audio.stop(Cue::Jump);
                self.walk(audio);
            }
            SpeechLabel::Stop => self.halt(audio),
        }
    }

    fn walk(&mut self, audio: &mut dyn SoundBoard) {
        self.fighter.pose = Pose::Walking;
        self.fighter.dx = self.rules.fighter_dx;
        audio.play_looped(Cue::Walking);
    }

    fn halt(&mut self, audio: &mut dyn SoundBoard) {
        self.fighter.pose = Pose::Idling;
        self.fighter.dx = 0f32;
        audio.stop(Cue::Walking);
    }

    fn jump(&mut self, audio: &mut dyn SoundBoard) {
        // a jump already in flight keeps its vertical speed
        if !self.fighter.is_jumping {
            self.fighter.is_jumping = true;
            self.fighter.dy = self.rules.launch_dy;
            log::debug!("jump from x {:.1}", self.fighter.pos.x);
        }
        self.fighter.pose = Pose::Jumping;
        self.fighter.dx = 0f32;
        audio.stop(Cue::Walking);
        audio.play(Cue::Jump);
    }

    fn integrate_jump(&mut self) {
        self.fighter.dy += self.rules.gravity;
        let pos_y = self.fighter.pos.y + self.fighter.dy;
        self.fighter.pos.y = f32::min_max(pos_y, 0f32, self.rules.ground_y());

        if self.on_ground() {
            self.fighter.pos.y = self.rules.ground_y();
            self.fighter.is_jumping = false;
            self.fighter.dy = self.rules.launch_dy;
            self.fighter.pose = Pose::Idling;
            log::debug!("landed at x {:.1}", self.fighter.pos.x);
        }
    }

    fn on_ground(&self) -> bool {
        (self.fighter.pos.y - self.rules.ground_y()).abs() <= self.rules.ground_tolerance
    }

    fn evaluate_end(&mut self, audio: &mut dyn SoundBoard) -> bool {
        let ran_ahead = self.fighter.pos.x - self.camera_x > self.rules.lead_distance;
        let won = self.fighter.score >= self.rules.win_score;
        if ran_ahead || won {
            let reason = if won { EndReason::Won } else { EndReason::OutOfBounds };
            self.end(reason, audio);
            return true;
        }

        let fighter = &self.fighter;
        let bitten = self.monsters.iter()
            .filter(|monster| !monster.removed)
            .any(|monster| physics::overlaps(fighter.pos, fighter.radius, monster.pos, monster.radius));
        if bitten {
            audio.play(Cue::Monster);
            self.end(EndReason::Bitten, audio);
            return true;
        }
        false
    }

    fn end(&mut self, reason: EndReason, audio: &mut dyn SoundBoard) {
        self.fighter.removed = true;
        self.coins.iter_mut().for_each(|coin| coin.removed = true);
        self.monsters.iter_mut().for_each(|monster| monster.removed = true);

        audio.stop(Cue::Walking);
        audio.stop(Cue::Desert);
        audio.stop(Cue::Jump);
        audio.play(Cue::GameOver);

        let game_over = GameOver { reason, score: self.fighter.score };
        log::info!("game over ({:?}), {}", reason, game_over.score_line());
        self.phase = Phase::Ended(game_over);
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn fighter(&self) -> &Fighter {
        &self.fighter
    }

    pub fn coins(&self) -> impl Iterator<Item = &Coin> + '_ {
        self.coins.iter().filter(|coin| !coin.removed)
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> + '_ {
        self.monsters.iter().filter(|monster| !monster.removed)
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn score(&self) -> u32 {
        self.fighter.score
    }
}
