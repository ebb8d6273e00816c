/// Decoded audio held in memory as interleaved stereo f32 samples.
///
/// Clips always carry exactly two channels; mono sources are duplicated and
/// wider layouts downmixed at decode time.
#[derive(Debug, Clone)]
pub struct Clip {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Clip {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        debug_assert!(samples.len() % 2 == 0, "stereo samples come in pairs");
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of stereo frames (sample pairs).
    pub fn frames(&self) -> usize {
        self.samples.len() / 2
    }

    pub fn duration_seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Apply a linear gain ramp from silence to full volume over the first
    /// `seconds` of the clip. Zero seconds is a no-op.
    pub fn fade_in(&mut self, seconds: f64) {
        let fade_frames = self.envelope_frames(seconds);
        if fade_frames == 0 {
            return;
        }
        for frame in 0..fade_frames {
            let gain = frame as f32 / fade_frames as f32;
            self.samples[frame * 2] *= gain;
            self.samples[frame * 2 + 1] *= gain;
        }
    }

    /// Apply a linear gain ramp from full volume to silence over the last
    /// `seconds` of the clip. Zero seconds is a no-op.
    pub fn fade_out(&mut self, seconds: f64) {
        let fade_frames = self.envelope_frames(seconds);
        if fade_frames == 0 {
            return;
        }
        let total = self.frames();
        for frame in (total - fade_frames)..total {
            let gain = (total - frame) as f32 / fade_frames as f32;
            self.samples[frame * 2] *= gain;
            self.samples[frame * 2 + 1] *= gain;
        }
    }

    // Envelope length in frames, capped at the clip itself.
    fn envelope_frames(&self, seconds: f64) -> usize {
        if seconds <= 0.0 {
            return 0;
        }
        let frames = (seconds * self.sample_rate as f64).round() as usize;
        frames.min(self.frames())
    }
}
