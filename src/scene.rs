//! Coffee Scene Animation
//!
//! Frame-stepped state for the decorative hero scene: a swaying cup, six
//! bobbing beans and a column of rising steam. Units are scene units;
//! `project` maps them to pixels for CSS transforms.

pub const STEAM_PARTICLES: usize = 50;
pub const STEAM_RISE_PER_FRAME: f64 = 0.01;
pub const STEAM_CEILING: f64 = 3.0;

/// Distance from the camera to the scene origin
const CAMERA_DISTANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bean {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
}

pub const BEANS: [Bean; 6] = [
    Bean { x: -2.0, y: 1.0, z: -1.0, scale: 0.8 },
    Bean { x: 2.0, y: 0.5, z: -2.0, scale: 1.2 },
    Bean { x: -1.5, y: -0.5, z: 1.0, scale: 0.9 },
    Bean { x: 1.8, y: 1.5, z: 0.5, scale: 1.1 },
    Bean { x: -2.5, y: 0.0, z: 0.0, scale: 0.7 },
    Bean { x: 0.5, y: -1.0, z: -1.5, scale: 1.3 },
];

impl Bean {
    /// Height at time `t` (seconds); phase depends on x so beans drift apart
    pub fn bob_y(&self, t: f64) -> f64 {
        self.y + (t * 0.8 + self.x).sin() * 0.1
    }

    /// Tilt around the x axis, radians
    pub fn tilt(t: f64) -> f64 {
        (t * 0.5).sin() * 0.2
    }

    /// Spin around the y axis, radians (0.01 per 60fps frame)
    pub fn spin(t: f64) -> f64 {
        t * 0.6
    }
}

/// Cup (rotation around y in radians, vertical offset) at time `t`
pub fn cup_sway(t: f64) -> (f64, f64) {
    ((t * 0.3).sin() * 0.1, (t * 0.5).sin() * 0.05)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteamParticle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SteamField {
    particles: Vec<SteamParticle>,
}

impl SteamField {
    /// Scatter `count` particles; `random` yields values in [0, 1)
    pub fn new(count: usize, mut random: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| SteamParticle {
                x: (random() - 0.5) * 0.5,
                y: random() * STEAM_CEILING,
                z: (random() - 0.5) * 0.5,
            })
            .collect();
        Self { particles }
    }

    /// Advance one frame: every particle rises, wrapping to 0 above the ceiling
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.y += STEAM_RISE_PER_FRAME;
            if particle.y > STEAM_CEILING {
                particle.y = 0.0;
            }
        }
    }

    pub fn particles(&self) -> &[SteamParticle] {
        &self.particles
    }
}

/// Screen offset in px (x right, y down) and perspective scale
pub fn project(x: f64, y: f64, z: f64, px_per_unit: f64) -> (f64, f64, f64) {
    let depth = (CAMERA_DISTANCE / (CAMERA_DISTANCE - z).max(0.5)).min(10.0);
    (x * px_per_unit * depth, -y * px_per_unit * depth, depth)
}

/// Opacity fades out as steam approaches the ceiling
pub fn steam_opacity(y: f64) -> f64 {
    (0.6 * (1.0 - y / STEAM_CEILING)).clamp(0.0, 0.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_steam_field_scatter() {
        let field = SteamField::new(STEAM_PARTICLES, fixed(&[0.0, 0.5, 1.0]));
        assert_eq!(field.particles().len(), 50);
        let first = field.particles()[0];
        assert_eq!(first, SteamParticle { x: -0.25, y: 1.5, z: 0.25 });
    }

    #[test]
    fn test_steam_rises_and_wraps() {
        let mut field = SteamField::new(2, fixed(&[0.5, 0.999, 0.5, 0.5, 0.0, 0.5]));
        let before: Vec<f64> = field.particles().iter().map(|p| p.y).collect();
        field.step();
        assert!((field.particles()[1].y - (before[1] + 0.01)).abs() < 1e-9);
        // 0.999 * 3.0 = 2.997, above the ceiling after one frame
        assert!(before[0] > 2.99);
        assert_eq!(field.particles()[0].y, 0.0);
    }

    #[test]
    fn test_particles_never_exceed_ceiling() {
        let mut field = SteamField::new(10, fixed(&[0.1, 0.9, 0.3, 0.7]));
        for _ in 0..1000 {
            field.step();
            assert!(field.particles().iter().all(|p| (0.0..=STEAM_CEILING).contains(&p.y)));
        }
    }

    #[test]
    fn test_bean_bob() {
        let bean = BEANS[0];
        assert!((bean.bob_y(0.0) - (1.0 + (-2.0f64).sin() * 0.1)).abs() < 1e-12);
        for t in [0.0, 1.3, 7.7, 100.0] {
            assert!((bean.bob_y(t) - bean.y).abs() <= 0.1 + 1e-12);
        }
    }

    #[test]
    fn test_cup_sway_bounds() {
        assert_eq!(cup_sway(0.0), (0.0, 0.0));
        let (rot, offset) = cup_sway(12.3);
        assert!(rot.abs() <= 0.1 && offset.abs() <= 0.05);
    }

    #[test]
    fn test_project() {
        assert_eq!(project(1.0, 1.0, 0.0, 100.0), (100.0, -100.0, 1.0));
        let (_, _, near) = project(0.0, 0.0, 2.5, 100.0);
        let (_, _, far) = project(0.0, 0.0, -2.5, 100.0);
        assert!(near > 1.0 && far < 1.0);
    }

    #[test]
    fn test_steam_opacity() {
        assert_eq!(steam_opacity(0.0), 0.6);
        assert_eq!(steam_opacity(3.0), 0.0);
    }
}
