use crate::scene::{Scene, SceneId, SceneStore};

/// The active scene. Always refers to a scene present in its store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    store: SceneStore,
    active: SceneId,
}

impl Selection {
    /// Starts on the first scene of `store`.
    pub fn new(store: SceneStore) -> Self {
        Self {
            store,
            active: store.first().id,
        }
    }

    pub fn store(&self) -> SceneStore {
        self.store
    }

    pub fn active_id(&self) -> SceneId {
        self.active
    }

    pub fn active_index(&self) -> usize {
        self.store.index_of(self.active).unwrap_or(0)
    }

    pub fn current(&self) -> &'static Scene {
        self.store.get(self.active).unwrap_or_else(|| self.store.first())
    }

    /// Returns true when the active scene changed. Unknown ids are ignored.
    pub fn select(&mut self, id: SceneId) -> bool {
        if !self.store.contains(id) || self.active == id {
            return false;
        }
        self.active = id;
        true
    }

    pub fn select_next(&mut self) -> bool {
        let next = self.active_index().saturating_add(1);
        match self.store.all().get(next) {
            Some(scene) => self.select(scene.id),
            None => false,
        }
    }

    pub fn select_previous(&mut self) -> bool {
        let Some(prev) = self.active_index().checked_sub(1) else {
            return false;
        };
        let id = self.store.all()[prev].id;
        self.select(id)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(SceneStore::builtin())
    }
}
