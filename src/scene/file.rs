use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{VatError, VatResult};
use crate::scene::clip::KeyframeClip;
use crate::scene::rig::{Bone, Rig};
use crate::scene::skinned::SkinnedMesh;

/// JSON scene: a bone hierarchy, one skinned mesh bound to it, and named clips.
///
/// ```json
/// {
///   "bones": [{ "name": "root" }, { "name": "tip", "parent": 0,
///               "bind": { "translation": [0, 1, 0] } }],
///   "mesh": { "rest_positions": [[0, 2, 0]], "influences": [[{ "bone": 1, "weight": 1 }]] },
///   "clips": [{ "name": "wave", "duration": 1.0, "channels": [] }]
/// }
/// ```
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneFile {
    /// Bones, parents first.
    pub bones: Vec<Bone>,
    /// Skinned mesh.
    pub mesh: SkinnedMesh,
    /// Animation clips.
    #[serde(default)]
    pub clips: Vec<KeyframeClip>,
}

impl SceneFile {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> VatResult<Self> {
        serde_json::from_reader(r).map_err(|e| VatError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> VatResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            VatError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the rig, mesh binding, and every clip.
    pub fn validate(&self) -> VatResult<()> {
        let rig = self.rig()?;
        self.mesh.validate(rig.bone_count())?;
        for (i, clip) in self.clips.iter().enumerate() {
            clip.validate()?;
            clip.validate_against(&rig)?;
            if self.clips[..i].iter().any(|c| c.name == clip.name) {
                return Err(VatError::validation(format!(
                    "duplicate clip name '{}'",
                    clip.name
                )));
            }
        }
        Ok(())
    }

    /// Build a fresh rig in its bind pose.
    pub fn rig(&self) -> VatResult<Rig> {
        Rig::new(self.bones.clone())
    }

    /// Look up a clip by name.
    pub fn clip(&self, name: &str) -> VatResult<&KeyframeClip> {
        self.clips.iter().find(|c| c.name == name).ok_or_else(|| {
            let known: Vec<&str> = self.clips.iter().map(|c| c.name.as_str()).collect();
            VatError::validation(format!(
                "clip '{name}' not found (available: {})",
                known.join(", ")
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/file.rs"]
mod tests;
