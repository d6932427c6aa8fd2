//! Headless camera with eased pans

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Camera, Easing, Viewport};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PanTween {
    from: Vec2,
    to: Vec2,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl PanTween {
    fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        match self.easing {
            Easing::Linear => t,
            Easing::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlessCamera {
    center: Vec2,
    half_size: Vec2,
    scroll_x: f32,
    pan: Option<PanTween>,
}

impl HeadlessCamera {
    /// Camera of `width` x `height` looking at `center`
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_size: Vec2::new(width, height) / 2.0,
            scroll_x: 0.0,
            pan: None,
        }
    }

    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Advance any running pan
    pub fn tick(&mut self, delta: f32) {
        let Some(pan) = self.pan.as_mut() else {
            return;
        };
        pan.elapsed_ms += delta;
        let t = pan.progress();
        self.center = pan.from.lerp(pan.to, t);
        if t >= 1.0 {
            self.pan = None;
        }
    }
}

impl Camera for HeadlessCamera {
    fn pan(&mut self, target: Vec2, duration_ms: f32, easing: Easing) {
        self.pan = Some(PanTween {
            from: self.center,
            to: target,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        });
        if duration_ms <= 0.0 {
            self.tick(0.0);
        }
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            top: self.center.y - self.half_size.y,
            bottom: self.center.y + self.half_size.y,
            mid_x: self.center.x + self.scroll_x,
        }
    }

    fn center(&self) -> Vec2 {
        self.center
    }

    fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    fn set_scroll_x(&mut self, x: f32) {
        self.scroll_x = x;
    }
}
