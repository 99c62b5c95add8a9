//! Built-in single-track clip player.
//!
//! Stands in for the skeletal runtime's animation state: it knows clip
//! durations, tracks the current entry's time and reports completion the
//! same way (track time reached the clip end; loops complete after their
//! first cycle too).

use std::collections::BTreeMap;

use client_core::AnimationPlayer;

#[derive(Clone, Debug, PartialEq)]
struct TrackEntry {
    name: String,
    looping: bool,
    time_scale: f32,
    track_time: f32,
    duration: f32,
    /// Remaining cross-fade from the previous entry.
    mix_left: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ClipPlayer {
    clips: BTreeMap<String, f32>,
    current: Option<TrackEntry>,
    default_mix: f32,
    entries_started: u64,
}

impl ClipPlayer {
    /// `clips`: name → duration in seconds.
    #[must_use]
    pub fn new<I, S>(clips: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        Self {
            clips: clips.into_iter().map(|(n, d)| (n.into(), d)).collect(),
            ..Default::default()
        }
    }

    /// Track time of the current entry, seconds.
    #[must_use]
    pub fn track_time(&self) -> Option<f32> {
        self.current.as_ref().map(|e| e.track_time)
    }

    #[must_use]
    pub fn is_mixing(&self) -> bool {
        self.current.as_ref().is_some_and(|e| e.mix_left > 0.0)
    }

    #[must_use]
    pub fn entries_started(&self) -> u64 {
        self.entries_started
    }

    #[must_use]
    pub fn default_mix(&self) -> f32 {
        self.default_mix
    }
}

impl AnimationPlayer for ClipPlayer {
    fn has_animation(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    fn set_animation(&mut self, name: &str, looping: bool) {
        let Some(&duration) = self.clips.get(name) else {
            log::warn!("unknown clip `{name}`; keeping current entry");
            return;
        };
        let mix_left = if self.current.is_some() {
            self.default_mix
        } else {
            0.0
        };
        self.current = Some(TrackEntry {
            name: name.to_string(),
            looping,
            time_scale: 1.0,
            track_time: 0.0,
            duration,
            mix_left,
        });
        self.entries_started += 1;
    }

    fn set_time_scale(&mut self, time_scale: f32) {
        if let Some(e) = self.current.as_mut() {
            e.time_scale = time_scale;
        }
    }

    fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|e| e.name.as_str())
    }

    fn is_complete(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|e| e.track_time >= e.duration)
    }

    fn set_default_mix(&mut self, seconds: f32) {
        self.default_mix = seconds.max(0.0);
    }

    fn update(&mut self, dt: f32) {
        if let Some(e) = self.current.as_mut() {
            e.track_time += dt * e.time_scale;
            e.mix_left = (e.mix_left - dt).max(0.0);
            // one-shots hold their last frame
            if !e.looping && e.track_time > e.duration {
                e.track_time = e.duration;
            }
        }
    }
}
