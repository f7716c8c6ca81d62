use std::any::Any;

use tracing::{debug, trace};

use crate::entity::Entity;

/// Sparse slots allocated up front so the first inserts never resize.
const INITIAL_SPARSE_LEN: usize = 64;

/// Extra slots added past a new id when the sparse map has to grow.
const SPARSE_GROWTH_CHUNK: usize = 64;

/// Type-erased capability interface shared by every pool.
///
/// A registry stores heterogeneous pools as `Box<dyn Pool>` keyed by
/// component type and performs type-blind cleanup ("remove entity e from
/// every pool") through this trait. `as_any`/`as_any_mut` let it recover
/// the concrete [`ComponentPool<T>`] for the typed operations.
pub trait Pool: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Remove the entity's component if present. Absent entities are a
    /// silent no-op.
    fn remove(&mut self, entity: Entity);

    /// Whether the entity has a component in this pool.
    fn has(&self, entity: Entity) -> bool;

    /// Drop every component, retaining allocated capacity.
    fn clear(&mut self);
}

/// Sparse-set storage for a single component type.
///
/// Three parallel structures: the packed component values (`dense`), the
/// owning entity of each dense slot (`entities`), and a sparse map from
/// entity id to dense index (`None` = no component). Insert, lookup, and
/// removal are O(1); removal swap-pops the last element into the vacated
/// slot, so dense order does not survive a removal and any external
/// iteration is invalidated by `add`/`remove`/`clear`.
///
/// The pool never allocates entity ids or checks their uniqueness beyond
/// indexing with them; that is the registry's job.
pub struct ComponentPool<T> {
    dense: Vec<T>,
    entities: Vec<Entity>,
    sparse: Vec<Option<usize>>,
}

impl<T: 'static> ComponentPool<T> {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_SPARSE_LEN)
    }

    /// Pre-size the pool for roughly `capacity` entities.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dense: Vec::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
            sparse: vec![None; capacity],
        }
    }

    /// Insert a component for `entity`. If one is already stored it is
    /// overwritten in place: no reordering, no length change.
    ///
    /// Ids past the end of the sparse map are not an error; the map
    /// grows in chunks to cover them.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is the null handle.
    pub fn add(&mut self, entity: Entity, value: T) {
        assert!(
            entity.is_valid(),
            "cannot add a component for the null entity"
        );
        let idx = entity.id() as usize;
        if let Some(&Some(dense_idx)) = self.sparse.get(idx) {
            self.dense[dense_idx] = value;
            return;
        }
        if idx >= self.sparse.len() {
            let grown = idx + SPARSE_GROWTH_CHUNK;
            trace!(
                "sparse map grown from {} to {} slots",
                self.sparse.len(),
                grown
            );
            self.sparse.resize(grown, None);
        }
        self.sparse[idx] = Some(self.dense.len());
        self.dense.push(value);
        self.entities.push(entity);
    }

    /// The component stored for `entity`, or `None` if it has none here.
    pub fn try_get(&self, entity: Entity) -> Option<&T> {
        let dense_idx = (*self.sparse.get(entity.id() as usize)?)?;
        Some(&self.dense[dense_idx])
    }

    /// Mutable variant of [`try_get`](Self::try_get).
    pub fn try_get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let dense_idx = (*self.sparse.get(entity.id() as usize)?)?;
        Some(&mut self.dense[dense_idx])
    }

    /// Iterate over all `(entity, &component)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.dense.iter())
    }

    /// Iterate over all `(entity, &mut component)` pairs in dense order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.dense.iter_mut())
    }

    /// The owning entity of every dense slot, in dense order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of components stored.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }
}

impl<T: 'static> Default for ComponentPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Pool for ComponentPool<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn remove(&mut self, entity: Entity) {
        let idx = entity.id() as usize;
        let Some(&Some(dense_idx)) = self.sparse.get(idx) else {
            return;
        };
        let last = self.dense.len() - 1;
        if dense_idx != last {
            // Swap the last element into the vacated slot and repoint
            // its sparse entry.
            self.dense.swap(dense_idx, last);
            self.entities.swap(dense_idx, last);
            let moved = self.entities[dense_idx];
            self.sparse[moved.id() as usize] = Some(dense_idx);
        }
        self.sparse[idx] = None;
        self.dense.pop();
        self.entities.pop();
    }

    fn has(&self, entity: Entity) -> bool {
        matches!(self.sparse.get(entity.id() as usize), Some(Some(_)))
    }

    fn clear(&mut self) {
        debug!("component pool cleared, {} components dropped", self.dense.len());
        self.dense.clear();
        self.entities.clear();
        self.sparse.fill(None);
    }
}
