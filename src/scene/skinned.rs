use crate::bake::target::MeshBaker;
use crate::foundation::core::{Mat4, Vec3};
use crate::foundation::error::{VatError, VatResult};
use crate::scene::rig::Rig;

/// Weight of one bone on one vertex.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VertexInfluence {
    /// Bone index in the rig.
    pub bone: usize,
    /// Non-negative weight; weights per vertex are normalized at bake time.
    pub weight: f32,
}

/// Linear-blend skinned mesh bound to a [`Rig`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SkinnedMesh {
    /// Mesh name.
    #[serde(default)]
    pub name: String,
    /// Model-space vertex positions in the rig's bind pose.
    pub rest_positions: Vec<Vec3>,
    /// Bone influences per vertex. A vertex with no influences stays at its rest position.
    pub influences: Vec<Vec<VertexInfluence>>,
    #[serde(skip)]
    skin_matrices: Vec<Mat4>,
}

impl SkinnedMesh {
    /// Build a mesh from rest positions and per-vertex influences.
    pub fn new(rest_positions: Vec<Vec3>, influences: Vec<Vec<VertexInfluence>>) -> Self {
        Self {
            name: String::new(),
            rest_positions,
            influences,
            skin_matrices: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.rest_positions.len()
    }

    /// Check the mesh against a rig with `bone_count` bones.
    pub fn validate(&self, bone_count: usize) -> VatResult<()> {
        if self.influences.len() != self.rest_positions.len() {
            return Err(VatError::validation(format!(
                "mesh has {} vertices but {} influence lists",
                self.rest_positions.len(),
                self.influences.len()
            )));
        }
        if let Some(i) = self.rest_positions.iter().position(|p| !p.is_finite()) {
            return Err(VatError::validation(format!(
                "vertex {i} has a non-finite rest position"
            )));
        }
        for (v, list) in self.influences.iter().enumerate() {
            for inf in list {
                if inf.bone >= bone_count {
                    return Err(VatError::validation(format!(
                        "vertex {v} references bone {} but the rig has {bone_count} bones",
                        inf.bone
                    )));
                }
                if !inf.weight.is_finite() || inf.weight < 0.0 {
                    return Err(VatError::validation(format!(
                        "vertex {v} has an invalid weight {}",
                        inf.weight
                    )));
                }
            }
        }
        Ok(())
    }

    fn update_skin_matrices(&mut self, rig: &Rig) {
        let globals = rig.global_matrices();
        let binds = rig.bind_global_matrices();
        self.skin_matrices.clear();
        self.skin_matrices.extend(
            globals
                .iter()
                .zip(&binds)
                .map(|(global, bind)| *global * bind.inverse()),
        );
    }

    fn skin_vertex(&self, v: usize, rest: Vec3) -> VatResult<Vec3> {
        let list = self.influences.get(v).map(Vec::as_slice).unwrap_or(&[]);
        let total: f32 = list.iter().map(|inf| inf.weight).sum();
        if total <= 0.0 {
            return Ok(rest);
        }

        let mut pos = Vec3::ZERO;
        for inf in list {
            let m = self.skin_matrices.get(inf.bone).ok_or_else(|| {
                VatError::evaluation(format!(
                    "vertex {v} references bone {} but the rig has {} bones",
                    inf.bone,
                    self.skin_matrices.len()
                ))
            })?;
            pos += m.transform_point3(rest) * (inf.weight / total);
        }
        Ok(pos)
    }
}

impl MeshBaker<Rig> for SkinnedMesh {
    fn rest_positions(&self) -> &[Vec3] {
        &self.rest_positions
    }

    fn bake_positions(&mut self, rig: &Rig, out: &mut Vec<Vec3>) -> VatResult<()> {
        self.update_skin_matrices(rig);
        out.clear();
        out.reserve(self.rest_positions.len());
        for (v, &rest) in self.rest_positions.iter().enumerate() {
            out.push(self.skin_vertex(v, rest)?);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/skinned.rs"]
mod tests;
