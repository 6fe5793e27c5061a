//! Drifting, twinkling background stars with the occasional shooting star.
//!
//! Coordinates are in cells of whatever surface the front-end draws on. The
//! field owns a seeded generator so a given seed always plays back the same.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

pub const DEFAULT_STAR_COUNT: usize = 100;
const SHOOTING_STAR_COUNT: usize = 3;
const SHOOTING_STAR_CHANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarTint {
    White,
    Gold,
    LightBlue,
}

impl StarTint {
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::White => (255, 255, 255),
            Self::Gold => (255, 223, 186),
            Self::LightBlue => (186, 223, 255),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub brightness: f64,
    pub tint: StarTint,
    pub twinkle_speed: f64,
    pub twinkle_phase: f64,
}

impl Star {
    /// Current twinkle in `0.0..=1.0`.
    pub fn twinkle(&self) -> f64 {
        self.twinkle_phase.sin().mul_add(0.5, 0.5)
    }

    /// Brightness after twinkling, in `0.0..=1.0`.
    pub fn alpha(&self) -> f64 {
        (self.brightness * self.twinkle().mul_add(0.3, 0.7)).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub speed: f64,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct StarField {
    width: f64,
    height: f64,
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
    rng: StdRng,
}

impl StarField {
    pub fn new(count: usize, width: u16, height: u16, seed: u64) -> Self {
        let mut field = Self {
            width: f64::from(width.max(1)),
            height: f64::from(height.max(1)),
            stars: Vec::with_capacity(count),
            shooting: Vec::with_capacity(SHOOTING_STAR_COUNT),
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate(count);
        field
    }

    fn populate(&mut self, count: usize) {
        self.stars = (0..count).map(|_| self.spawn_star()).collect();
        self.shooting = (0..SHOOTING_STAR_COUNT)
            .map(|_| ShootingStar {
                x: self.rng.random_range(0.0..self.width),
                y: 0.0,
                length: self.rng.random_range(4.0..12.0),
                speed: self.rng.random_range(1.0..2.5),
                active: false,
            })
            .collect();
    }

    fn spawn_star(&mut self) -> Star {
        let tint = if self.rng.random_bool(0.3) {
            if self.rng.random_bool(0.5) {
                StarTint::Gold
            } else {
                StarTint::LightBlue
            }
        } else {
            StarTint::White
        };

        Star {
            x: self.rng.random_range(0.0..self.width),
            y: self.rng.random_range(0.0..self.height),
            size: self.rng.random_range(1.0..3.0),
            speed: self.rng.random_range(0.01..0.06),
            brightness: self.rng.random_range(0.5..1.0),
            tint,
            twinkle_speed: self.rng.random_range(0.01..0.03),
            twinkle_phase: self.rng.random_range(0.0..TAU),
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    /// Re-lays the field over a new surface size, keeping the star count.
    pub fn resize(&mut self, width: u16, height: u16) {
        let (width, height) = (f64::from(width.max(1)), f64::from(height.max(1)));
        #[allow(clippy::float_cmp)]
        if width == self.width && height == self.height {
            return;
        }

        self.width = width;
        self.height = height;
        let count = self.stars.len();
        self.populate(count);
    }

    /// Moves the field forward by `delta_ms` milliseconds of animation.
    pub fn advance(&mut self, delta_ms: f64) {
        let (width, height) = (self.width, self.height);

        for index in 0..self.stars.len() {
            let respawn_x = self.rng.random_range(0.0..width);
            let star = &mut self.stars[index];
            star.twinkle_phase = (star.twinkle_phase + star.twinkle_speed).rem_euclid(TAU);
            star.y += star.speed * delta_ms * 0.01;
            if star.y > height {
                star.y = 0.0;
                star.x = respawn_x;
            }
        }

        for index in 0..self.shooting.len() {
            if self.shooting[index].active {
                let star = &mut self.shooting[index];
                star.x += star.speed;
                star.y += star.speed / 2.0;
                if star.x > width || star.y > height {
                    star.active = false;
                }
            } else if self.rng.random_bool(SHOOTING_STAR_CHANCE) {
                let x = self.rng.random_range(0.0..width);
                let star = &mut self.shooting[index];
                star.active = true;
                star.x = x;
                star.y = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populates_requested_count_inside_bounds() {
        let field = StarField::new(50, 80, 24, 7);
        assert_eq!(field.stars().len(), 50);
        assert_eq!(field.shooting_stars().len(), SHOOTING_STAR_COUNT);
        for star in field.stars() {
            assert!((0.0..80.0).contains(&star.x));
            assert!((0.0..24.0).contains(&star.y));
            assert!((0.0..=1.0).contains(&star.alpha()));
        }
    }

    #[test]
    fn same_seed_plays_back_identically() {
        let mut first = StarField::new(20, 40, 10, 99);
        let mut second = StarField::new(20, 40, 10, 99);
        for _ in 0..50 {
            first.advance(16.0);
            second.advance(16.0);
        }
        assert_eq!(first.stars(), second.stars());
    }

    #[test]
    fn stars_wrap_back_to_the_top() {
        let mut field = StarField::new(30, 20, 5, 3);
        for _ in 0..2_000 {
            field.advance(50.0);
            assert!(field.stars().iter().all(|star| star.y <= 5.0 + 1.0));
        }
    }

    #[test]
    fn resize_keeps_the_count() {
        let mut field = StarField::new(12, 20, 5, 1);
        field.resize(100, 40);
        assert_eq!(field.stars().len(), 12);
        assert!(field.stars().iter().all(|star| star.x < 100.0));
    }

    #[test]
    fn zero_sized_surface_is_clamped() {
        let field = StarField::new(3, 0, 0, 1);
        assert_eq!(field.stars().len(), 3);
    }
}
