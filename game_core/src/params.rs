/// Game tuning parameters for hand-tracked Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Paddle
    pub const PADDLE_X: f32 = 4.0; // Left paddle sits at -PADDLE_X
    pub const PADDLE_HALF_WIDTH: f32 = 0.3;
    pub const PADDLE_HALF_HEIGHT: f32 = 0.6;
    pub const PADDLE_Y_LIMIT: f32 = 3.0;
    pub const PADDLE_RENDER_SIZE: [f32; 3] = [0.2, 1.0, 0.2];

    // Input mapping: world units per unit of normalized wrist travel
    pub const INPUT_GAIN: f32 = 6.0;

    // Play field
    pub const FIELD_HALF_HEIGHT: f32 = 1.8;
    pub const MISS_X: f32 = 6.0;

    // Ball (velocities are per tick)
    pub const BALL_RADIUS: f32 = 0.2; // Rendering only
    pub const BALL_OPENING_VEL: [f32; 2] = [0.05, 0.05];
    pub const PADDLE_HIT_MULTIPLIER: f32 = 1.1;
    pub const SERVE_SPEED_X: f32 = 0.05;
    pub const SERVE_SPREAD_Y: f32 = 0.03;

    // Perception -> input mapper channel
    pub const CONTROL_QUEUE_CAPACITY: usize = 8;
    pub const MAX_CONTROL_QUEUE_CAPACITY: usize = 1024; // sync_channel allocates every slot
}
