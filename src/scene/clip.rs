use crate::bake::target::AnimationClip;
use crate::foundation::error::{VatError, VatResult};
use crate::scene::rig::Rig;
use crate::scene::transform::Transform;

/// One keyframe of a bone channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoneKey {
    /// Clip time in seconds.
    pub time: f64,
    /// Local bone transform at `time`.
    pub transform: Transform,
}

/// Keyframes driving one bone.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoneChannel {
    /// Name of the driven bone.
    pub bone: String,
    /// Keys sorted by time.
    pub keys: Vec<BoneKey>,
}

impl BoneChannel {
    /// Sample the channel at `time`, holding the first/last key outside the key range.
    pub fn sample(&self, time: f64) -> VatResult<Transform> {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => {
                return Err(VatError::animation(format!(
                    "channel for bone '{}' has no keys",
                    self.bone
                )));
            }
        };

        let idx = self.keys.partition_point(|k| k.time <= time);
        if idx == 0 {
            return Ok(first.transform);
        }
        if idx >= self.keys.len() {
            return Ok(last.transform);
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.time - a.time;
        if denom <= 0.0 {
            return Ok(a.transform);
        }
        let t = ((time - a.time) / denom) as f32;
        Ok(Transform::lerp(&a.transform, &b.transform, t))
    }
}

/// Keyframed bone animation.
///
/// Sampling resets the rig to its bind pose and then applies every channel, so bones without a
/// channel hold their bind transform and the result does not depend on the previous sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeClip {
    /// Clip name.
    pub name: String,
    /// Clip length in seconds.
    pub duration: f64,
    /// Per-bone channels.
    #[serde(default)]
    pub channels: Vec<BoneChannel>,
}

impl KeyframeClip {
    /// Check static invariants: positive duration, non-empty sorted channels.
    pub fn validate(&self) -> VatResult<()> {
        if self.name.trim().is_empty() {
            return Err(VatError::animation("clip name must be non-empty"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(VatError::animation(format!(
                "clip '{}' duration must be positive, got {}",
                self.name, self.duration
            )));
        }
        for ch in &self.channels {
            if ch.keys.is_empty() {
                return Err(VatError::animation(format!(
                    "clip '{}': channel '{}' has no keys",
                    self.name, ch.bone
                )));
            }
            if ch.keys.iter().any(|k| !k.time.is_finite()) {
                return Err(VatError::animation(format!(
                    "clip '{}': channel '{}' has a non-finite key time",
                    self.name, ch.bone
                )));
            }
            if !ch.keys.windows(2).all(|w| w[0].time <= w[1].time) {
                return Err(VatError::animation(format!(
                    "clip '{}': channel '{}' keys must be sorted by time",
                    self.name, ch.bone
                )));
            }
        }
        Ok(())
    }

    /// Check that every channel drives a bone that exists in `rig`.
    pub fn validate_against(&self, rig: &Rig) -> VatResult<()> {
        for ch in &self.channels {
            if rig.find_bone(&ch.bone).is_none() {
                return Err(VatError::animation(format!(
                    "clip '{}' drives unknown bone '{}'",
                    self.name, ch.bone
                )));
            }
        }
        Ok(())
    }
}

impl AnimationClip<Rig> for KeyframeClip {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration_secs(&self) -> f64 {
        self.duration
    }

    fn sample(&self, rig: &mut Rig, time_secs: f64) -> VatResult<()> {
        rig.reset_to_bind();
        for ch in &self.channels {
            let bone = rig.find_bone(&ch.bone).ok_or_else(|| {
                VatError::animation(format!(
                    "clip '{}' drives unknown bone '{}'",
                    self.name, ch.bone
                ))
            })?;
            rig.set_local(bone, ch.sample(time_secs)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/clip.rs"]
mod tests;
