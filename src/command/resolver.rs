//! Reference resolution - maps the names a command uses onto scene objects

use crate::core::types::SceneObjectRef;

/// A matched scene object and why it matched
#[derive(Debug, Clone)]
pub struct ObjectMatch<'a> {
    pub object: &'a SceneObjectRef,
    pub match_reason: MatchReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    ExactId,
    /// First object with this type tag, e.g. "the cube"
    TypeTag,
}

/// Resolves command object names against a scene snapshot
pub struct ReferenceResolver<'a> {
    scene: &'a [SceneObjectRef],
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(scene: &'a [SceneObjectRef]) -> Self {
        Self { scene }
    }

    /// Exact id first, then a case-insensitive type tag
    pub fn resolve(&self, name: &str) -> Option<ObjectMatch<'a>> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Some(object) = self.scene.iter().find(|o| o.id.as_str() == name) {
            return Some(ObjectMatch {
                object,
                match_reason: MatchReason::ExactId,
            });
        }

        let name_lower = name.to_lowercase();
        let tag = name_lower.strip_prefix("the ").unwrap_or(&name_lower);
        self.scene
            .iter()
            .find(|o| o.object_type.to_lowercase() == tag)
            .map(|object| ObjectMatch {
                object,
                match_reason: MatchReason::TypeTag,
            })
    }
}
