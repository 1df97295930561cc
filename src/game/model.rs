use quicksilver::geom::Vector;

/// Animation currently shown for the fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pose {
    Idling,
    Walking,
    Jumping,
}

impl Pose {
    pub fn name(&self) -> &'static str {
        match *self {
            Pose::Idling => "idling",
            Pose::Walking => "walking",
            Pose::Jumping => "jumping",
        }
    }
}

/// Sounds the controller can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Desert,
    Walking,
    Jump,
    Coin,
    Monster,
    GameOver,
}

impl Cue {
    pub const ALL: [Cue; 6] = [Cue::Desert, Cue::Walking, Cue::Jump, Cue::Coin, Cue::Monster, Cue::GameOver];

    pub fn file_stem(&self) -> &'static str {
        match *self {
            Cue::Desert => "desert",
            Cue::Walking => "walking",
            Cue::Jump => "jump",
            Cue::Coin => "coin",
            Cue::Monster => "monster",
            Cue::GameOver => "gameover",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fighter {
    pub pos: Vector,
    pub dx: f32,
    pub dy: f32,
    pub radius: f32,
    pub is_jumping: bool,
    pub score: u32,
    pub pose: Pose,
    pub removed: bool,
}

impl Fighter {
    pub fn new(pos: Vector, launch_dy: f32, radius: f32) -> Fighter {
        Fighter {
            pos,
            dx: 0f32,
            dy: launch_dy,
            radius,
            is_jumping: false,
            score: 0,
            pose: Pose::Idling,
            removed: false,
        }
    }

    pub fn velocity(&self) -> Vector {
        Vector::new(self.dx, 0f32)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub pos: Vector,
    pub velocity: Vector,
    pub radius: f32,
    pub removed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Monster {
    pub pos: Vector,
    pub velocity: Vector,
    pub radius: f32,
    pub removed: bool,
}

/// Immovable horizontal line the coins bounce between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub pos_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    Won,
    OutOfBounds,
    Bitten,
}

/// What the game-over screen shows once the game has ended.
#[derive(Clone, Debug, PartialEq)]
pub struct GameOver {
    pub reason: EndReason,
    pub score: u32,
}

impl GameOver {
    pub fn title(&self) -> &'static str {
        "GAME OVER!"
    }

    pub fn points(&self) -> u32 {
        self.score * 1000
    }

    pub fn score_line(&self) -> String {
        format!("YOUR SCORE: {}", self.points())
    }
}
