//! Movement domain: locomotion tuning and its validation.

use serde::{Deserialize, Serialize};

/// Gravity scale used while rising with jump held.
///
/// Must stay above 1.0 and strictly below any accepted `fall_multiplier`.
pub const HELD_ASCENT_GRAVITY_SCALE: f32 = 1.2;

/// Horizontal target speeds at or below this magnitude count as "no input".
pub const MOVE_DEAD_ZONE: f32 = 0.01;

/// How an unsatisfiable jump request is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum JumpBufferPolicy {
    /// Keep the request alive until `jump_buffer_time` has elapsed since the press.
    #[default]
    Windowed,
    /// Evaluate the request on the next step only, then drop it.
    NextStep,
}

/// Static tuning for one character's locomotion.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionConfig {
    pub move_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Multiplier on the horizontal rate while airborne (0.0-1.0).
    pub air_control_factor: f32,
    /// Vertical velocity set by every jump; also the ascent speed cap.
    pub jump_force: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Applied once to a rising velocity when jump is released (0.0-1.0).
    pub jump_cut_multiplier: f32,
    pub fall_multiplier: f32,
    /// Terminal velocity. Negative, it bounds downward speed.
    pub max_fall_speed: f32,
    pub ground_check_distance: f32,
    pub max_jump_count: u32,
    pub double_jump_unlocked: bool,
    /// Baseline downward acceleration magnitude.
    pub gravity: f32,
    pub body_mass: f32,
    /// Seconds after the first step during which jump presses are ignored.
    pub input_warmup: f32,
    pub jump_buffer: JumpBufferPolicy,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            acceleration: 15.0,
            deceleration: 10.0,
            air_control_factor: 0.5,
            jump_force: 22.0,
            coyote_time: 0.2,
            jump_buffer_time: 0.2,
            jump_cut_multiplier: 0.5,
            fall_multiplier: 3.0,
            max_fall_speed: -20.0,
            ground_check_distance: 0.1,
            max_jump_count: 2,
            double_jump_unlocked: true,
            gravity: 9.81,
            body_mass: 1.0,
            input_warmup: 0.1,
            jump_buffer: JumpBufferPolicy::Windowed,
        }
    }
}

impl MotionConfig {
    /// Builder: set horizontal speed and rates.
    pub fn with_movement(mut self, move_speed: f32, acceleration: f32, deceleration: f32) -> Self {
        self.move_speed = move_speed;
        self.acceleration = acceleration;
        self.deceleration = deceleration;
        self
    }

    /// Builder: set air control factor.
    pub fn with_air_control(mut self, factor: f32) -> Self {
        self.air_control_factor = factor;
        self
    }

    /// Builder: set jump force and coyote time.
    pub fn with_jump(mut self, jump_force: f32, coyote_time: f32) -> Self {
        self.jump_force = jump_force;
        self.coyote_time = coyote_time;
        self
    }

    /// Builder: set jump buffer window and policy.
    pub fn with_jump_buffer(mut self, time: f32, policy: JumpBufferPolicy) -> Self {
        self.jump_buffer_time = time;
        self.jump_buffer = policy;
        self
    }

    /// Builder: set jump charges.
    pub fn with_jumps(mut self, max_jump_count: u32, double_jump_unlocked: bool) -> Self {
        self.max_jump_count = max_jump_count;
        self.double_jump_unlocked = double_jump_unlocked;
        self
    }

    /// Builder: set fall shaping.
    pub fn with_fall(mut self, fall_multiplier: f32, max_fall_speed: f32) -> Self {
        self.fall_multiplier = fall_multiplier;
        self.max_fall_speed = max_fall_speed;
        self
    }

    /// Builder: set baseline gravity magnitude.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Builder: set input warm-up.
    pub fn with_input_warmup(mut self, seconds: f32) -> Self {
        self.input_warmup = seconds;
        self
    }

    /// Uniformly scale every length-based value (speeds, forces, distances, gravity).
    ///
    /// Rates, timings and multipliers are unit-free and stay as they are.
    pub fn scaled(mut self, units_per_meter: f32) -> Self {
        self.move_speed *= units_per_meter;
        self.jump_force *= units_per_meter;
        self.max_fall_speed *= units_per_meter;
        self.ground_check_distance *= units_per_meter;
        self.gravity *= units_per_meter;
        self
    }

    /// Apex height of a single held jump from rest.
    /// Uses h = v² / (2g) with the held-ascent gravity scale.
    pub fn single_jump_height(&self) -> f32 {
        let g = self.gravity * HELD_ASCENT_GRAVITY_SCALE;
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }

    /// Height reachable by chaining every available jump at its apex.
    pub fn max_reachable_height(&self) -> f32 {
        let jumps = if self.double_jump_unlocked {
            self.max_jump_count.max(1)
        } else {
            1
        };
        self.single_jump_height() * jumps as f32
    }

    /// Check every invariant the locomotion core relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("air_control_factor", self.air_control_factor),
            ("jump_force", self.jump_force),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("fall_multiplier", self.fall_multiplier),
            ("ground_check_distance", self.ground_check_distance),
            ("gravity", self.gravity),
            ("body_mass", self.body_mass),
            ("input_warmup", self.input_warmup),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if !self.max_fall_speed.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "max_fall_speed",
            });
        }
        if self.max_fall_speed >= 0.0 {
            return Err(ConfigError::MaxFallSpeedNotNegative(self.max_fall_speed));
        }

        for (field, value) in [
            ("move_speed", self.move_speed),
            ("body_mass", self.body_mass),
            ("ground_check_distance", self.ground_check_distance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("air_control_factor", self.air_control_factor),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
        ] {
            if value > 1.0 {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }

        if self.max_jump_count == 0 {
            return Err(ConfigError::ZeroMaxJumpCount);
        }

        if self.fall_multiplier <= HELD_ASCENT_GRAVITY_SCALE {
            return Err(ConfigError::FallMultiplierTooLow(self.fall_multiplier));
        }

        Ok(())
    }
}

/// Rejected locomotion configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str },
    Negative { field: &'static str, value: f32 },
    NotPositive { field: &'static str, value: f32 },
    MaxFallSpeedNotNegative(f32),
    ZeroMaxJumpCount,
    OutOfUnitRange { field: &'static str, value: f32 },
    FallMultiplierTooLow(f32),
    /// The collision shape cannot host a ground probe.
    DegenerateShape(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonFinite { field } => write!(f, "'{}' must be finite", field),
            ConfigError::Negative { field, value } => {
                write!(f, "'{}' must not be negative (got {})", field, value)
            }
            ConfigError::NotPositive { field, value } => {
                write!(f, "'{}' must be positive (got {})", field, value)
            }
            ConfigError::MaxFallSpeedNotNegative(value) => {
                write!(f, "'max_fall_speed' must be negative (got {})", value)
            }
            ConfigError::ZeroMaxJumpCount => write!(f, "'max_jump_count' must be at least 1"),
            ConfigError::OutOfUnitRange { field, value } => {
                write!(f, "'{}' must be within 0.0..=1.0 (got {})", field, value)
            }
            ConfigError::FallMultiplierTooLow(value) => write!(
                f,
                "'fall_multiplier' must be greater than {} (got {})",
                HELD_ASCENT_GRAVITY_SCALE, value
            ),
            ConfigError::DegenerateShape(reason) => {
                write!(f, "collision shape cannot be probed: {}", reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
