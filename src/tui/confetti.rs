//! Terminal confetti: coloured glyphs thrown up from a point and pulled down.

use std::time::Duration;

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use tracing::{debug, instrument};

use crate::celebration::{Celebration, CelebrationParams};

const GLYPHS: [&str; 6] = ["*", "+", "•", "o", "~", "x"];
/// Downward acceleration in area-heights per second squared.
const GRAVITY: f32 = 1.1;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    glyph: &'static str,
}

/// Particle burst drawn over the whole frame.
///
/// Coordinates are fractions of the drawing area so the burst survives resizes.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    /// Creates an empty effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Particles still alive.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when nothing is left to draw.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Celebration for Confetti {
    #[instrument(skip(self, params), fields(count = params.count, spread = params.spread))]
    fn burst(&mut self, params: &CelebrationParams) {
        let mut rng = rand::rng();
        let colors: Vec<Color> = params
            .palette
            .iter()
            .filter_map(|hex| hex.parse::<Color>().ok())
            .collect();
        let half_spread = params.spread.to_radians() / 2.0;
        let (ox, oy) = params.origin;

        self.particles = (0..params.count)
            .map(|i| {
                // Angle measured from straight up.
                let angle = rng.random_range(-half_spread..=half_spread);
                let speed = rng.random_range(0.5..1.3_f32);
                Particle {
                    x: ox,
                    y: oy,
                    vx: speed * angle.sin(),
                    vy: -speed * angle.cos(),
                    color: colors
                        .get(usize::from(i) % colors.len().max(1))
                        .copied()
                        .unwrap_or(Color::Yellow),
                    glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                }
            })
            .collect();
        debug!(particles = self.particles.len(), "Confetti burst");
    }

    fn clear(&mut self) {
        self.particles.clear();
    }

    fn tick(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        for p in &mut self.particles {
            p.vy += GRAVITY * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
        }
        self.particles
            .retain(|p| p.y < 1.0 && (-0.1..1.1).contains(&p.x));
    }

    fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for p in &self.particles {
            if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * f32::from(area.width)) as u16;
            let y = area.y + (p.y * f32::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(p.glyph).set_fg(p.color);
            }
        }
    }
}
