//! The world state and its mutable draft.
//!
//! A [`WorldState`] is an insertion-ordered collection of objects keyed
//! by identity. It is built through a [`StateDraft`], which is the only
//! place objects can be added; [`StateDraft::finalize`] freezes the draft
//! into a state with a read-only API. A draft can start from an existing
//! state ([`StateDraft::extending`]) so a shared base layer is copied
//! into each candidate instead of aliased.

use indexmap::IndexMap;

use crate::error::StateError;
use crate::id::{ObjectId, ObjectKind};
use crate::object::{ObjectAttrs, RobotAttrs};

/// A finalized, read-only scene.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorldState {
    objects: IndexMap<ObjectId, ObjectAttrs>,
}

impl WorldState {
    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the state holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether an object with this identity exists.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Attribute record of `id`, if present.
    pub fn get(&self, id: &ObjectId) -> Option<&ObjectAttrs> {
        self.objects.get(id)
    }

    /// Attribute record of `id`, or [`StateError::MissingObject`].
    pub fn require(&self, id: &ObjectId) -> Result<&ObjectAttrs, StateError> {
        self.objects
            .get(id)
            .ok_or_else(|| StateError::MissingObject { id: id.clone() })
    }

    /// All objects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ObjectId, &ObjectAttrs)> {
        self.objects.iter()
    }

    /// All identities in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &ObjectId> {
        self.objects.keys()
    }

    /// Objects of one kind, in insertion order.
    pub fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = (&ObjectId, &ObjectAttrs)> {
        self.objects.iter().filter(move |(_, a)| a.kind() == kind)
    }

    /// Number of objects of one kind.
    pub fn count_kind(&self, kind: ObjectKind) -> usize {
        self.of_kind(kind).count()
    }

    /// The first object of `kind`, or [`StateError::MissingKind`].
    pub fn first_of_kind(&self, kind: ObjectKind) -> Result<(&ObjectId, &ObjectAttrs), StateError> {
        self.of_kind(kind)
            .next()
            .ok_or(StateError::MissingKind { kind })
    }

    /// The robot's identity and record.
    pub fn robot(&self) -> Result<(&ObjectId, &RobotAttrs), StateError> {
        let (id, attrs) = self.first_of_kind(ObjectKind::Robot)?;
        let robot = attrs.as_robot().ok_or_else(|| StateError::WrongKind {
            id: id.clone(),
            expected: ObjectKind::Robot,
            found: attrs.kind(),
        })?;
        Ok((id, robot))
    }
}

/// A world state under construction.
#[derive(Clone, Debug, Default)]
pub struct StateDraft {
    objects: IndexMap<ObjectId, ObjectAttrs>,
}

impl StateDraft {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft that starts with a copy of every object in `base`.
    pub fn extending(base: &WorldState) -> Self {
        Self {
            objects: base.objects.clone(),
        }
    }

    /// Insert an object.
    ///
    /// Identities are unique within a scene; inserting an existing one
    /// returns [`StateError::DuplicateObject`] and leaves the draft
    /// unchanged.
    pub fn insert(&mut self, id: ObjectId, attrs: ObjectAttrs) -> Result<&mut Self, StateError> {
        if self.objects.contains_key(&id) {
            return Err(StateError::DuplicateObject { id });
        }
        self.objects.insert(id, attrs);
        Ok(self)
    }

    /// Number of objects inserted so far.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Freeze the draft.
    pub fn finalize(self) -> WorldState {
        WorldState {
            objects: self.objects,
        }
    }
}
