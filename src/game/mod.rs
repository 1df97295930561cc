pub mod controller;
pub mod input;
pub mod level;
pub mod model;
pub mod physics;

pub trait MinMax{
    type T;

    fn min_max(self, min: Self::T, max: Self::T) -> Self::T;
}

impl MinMax for f32{
    type T = f32;

    fn min_max(self, min: f32, max: f32) -> f32 {
        let value = f32::min(self, max);
        f32::max(value, min)
    }
}

#[cfg(test)]
mod tests {
    use super::MinMax;

    #[test]
    fn min_max_clamps_both_ends() {
        assert_eq!(f32::min_max(-3f32, 0f32, 538f32), 0f32);
        assert_eq!(f32::min_max(600f32, 0f32, 538f32), 538f32);
        assert_eq!(f32::min_max(120.5f32, 0f32, 538f32), 120.5f32);
    }
}
