//! Headless sprite animator: animations complete after their frame time

use std::collections::HashMap;

use crate::sim::Animator;

/// Frame count and rate for a named animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub frames: u32,
    pub frame_rate: f32,
}

impl AnimationSpec {
    pub fn duration_ms(&self) -> f32 {
        self.frames as f32 * 1000.0 / self.frame_rate
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessAnimator {
    specs: HashMap<String, AnimationSpec>,
    playing: Option<(String, f32)>,
    pub played: Vec<String>,
}

impl HeadlessAnimator {
    pub fn with_animation(mut self, name: &str, spec: AnimationSpec) -> Self {
        self.specs.insert(name.to_string(), spec);
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// Advance the current animation, returning its name when it finishes
    pub fn tick(&mut self, delta: f32) -> Option<String> {
        let (_, remaining) = self.playing.as_mut()?;
        *remaining -= delta;
        if *remaining > 0.0 {
            return None;
        }
        self.playing.take().map(|(name, _)| name)
    }
}

impl Animator for HeadlessAnimator {
    fn play(&mut self, name: &str, restart: bool) {
        self.played.push(name.to_string());
        if !restart && self.playing.as_ref().is_some_and(|(n, _)| n == name) {
            return;
        }
        let Some(spec) = self.specs.get(name) else {
            log::warn!("Unknown animation {}", name);
            return;
        };
        self.playing = Some((name.to_string(), spec.duration_ms()));
    }
}
