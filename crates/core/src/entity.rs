//! Canonical entity references shared across crates.

/// The kinds of entities that can own stored files.
///
/// This is the closed set of values persisted in the file table's
/// `entity_type` column; using an enum here keeps invalid kind strings
/// unrepresentable at the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileOwnerKind {
    /// An inventory's representative image(s).
    Inventory,
    /// An object's photo gallery.
    Object,
    /// A user's profile picture.
    UserProfile,
}

impl FileOwnerKind {
    /// Wire/storage representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Object => "object",
            Self::UserProfile => "user_profile_pic",
        }
    }

    /// Whether this kind supports only a single displayed image.
    ///
    /// Single-image kinds are the ones the primary-file invariant applies to.
    pub fn single_image(&self) -> bool {
        matches!(self, Self::Inventory | Self::UserProfile)
    }
}

impl std::fmt::Display for FileOwnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference to the entity owning one or more stored files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileOwner {
    pub kind: FileOwnerKind,
    pub id: i64,
}

impl FileOwner {
    pub fn inventory(id: i64) -> Self {
        Self {
            kind: FileOwnerKind::Inventory,
            id,
        }
    }

    pub fn object(id: i64) -> Self {
        Self {
            kind: FileOwnerKind::Object,
            id,
        }
    }

    pub fn user_profile(id: i64) -> Self {
        Self {
            kind: FileOwnerKind::UserProfile,
            id,
        }
    }
}

impl std::fmt::Display for FileOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// Entity kinds with a recoverability window (soft delete + restore).
///
/// Shelves are not trashable: shelf deletion is immediate and cascading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashKind {
    Inventory,
    Object,
}

impl TrashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for TrashKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file accepted by the upload receiver.
///
/// The server filename is opaque and server-generated; it never contains
/// user-controlled path segments. The original client-side name is kept only
/// for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Server-assigned storage name inside the upload root.
    pub server_filename: String,
    /// Name the file had on the client, for display only.
    pub original_name: String,
}

impl StoredFile {
    pub fn new(server_filename: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            server_filename: server_filename.into(),
            original_name: original_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_kind_wire_strings_are_distinct() {
        let kinds = [
            FileOwnerKind::Inventory,
            FileOwnerKind::Object,
            FileOwnerKind::UserProfile,
        ];
        for a in &kinds {
            for b in &kinds {
                if a != b {
                    assert_ne!(a.as_str(), b.as_str());
                }
            }
        }
    }

    #[test]
    fn single_image_kinds() {
        assert!(FileOwnerKind::Inventory.single_image());
        assert!(FileOwnerKind::UserProfile.single_image());
        assert!(!FileOwnerKind::Object.single_image());
    }

    #[test]
    fn owner_display_includes_kind_and_id() {
        assert_eq!(FileOwner::inventory(7).to_string(), "inventory/7");
        assert_eq!(FileOwner::object(3).to_string(), "object/3");
    }
}
