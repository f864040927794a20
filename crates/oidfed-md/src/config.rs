//! Serializer configuration.

/// What to do when an extension parameter names a member the base metadata already has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// The extension value replaces the base value. A warning is logged.
    #[default]
    Overwrite,
    /// The merge fails with [`MetadataError::ExtensionCollision`](crate::MetadataError::ExtensionCollision).
    Reject,
}

/// Configuration for language-tagged JSON serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializerConfig {
    /// Emit indented JSON from `to_json`.
    pub pretty_printing: bool,
    /// Handling of extension parameters that collide with base members.
    pub collision_policy: CollisionPolicy,
}

impl SerializerConfig {
    /// Create a config producing indented JSON.
    #[must_use]
    pub fn pretty() -> Self {
        Self {
            pretty_printing: true,
            ..Default::default()
        }
    }

    /// Set pretty printing.
    #[must_use]
    pub fn pretty_printing(mut self, pretty: bool) -> Self {
        self.pretty_printing = pretty;
        self
    }

    /// Set the extension collision policy.
    #[must_use]
    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Reject extension parameters that collide with base members.
    #[must_use]
    pub fn reject_collisions(self) -> Self {
        self.collision_policy(CollisionPolicy::Reject)
    }
}
