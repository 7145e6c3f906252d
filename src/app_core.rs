use std::cell::RefCell;
use std::rc::Rc;

use roaring_flame_core::{Scene, SceneId, SceneStore, Selection};

pub(crate) type AppSubscriber = Rc<dyn Fn()>;

/// Owner of the selection. Views read through it and subscribe for refreshes.
pub(crate) struct AppCore {
    selection: RefCell<Selection>,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl AppCore {
    pub(crate) fn new(store: SceneStore) -> Rc<Self> {
        Rc::new(Self {
            selection: RefCell::new(Selection::new(store)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub(crate) fn subscribe(&self, subscriber: AppSubscriber) -> AppSubscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        AppSubscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(crate) fn store(&self) -> SceneStore {
        self.selection.borrow().store()
    }

    pub(crate) fn active_id(&self) -> SceneId {
        self.selection.borrow().active_id()
    }

    pub(crate) fn current(&self) -> &'static Scene {
        self.selection.borrow().current()
    }

    pub(crate) fn select(&self, id: SceneId) -> bool {
        self.apply(|selection| selection.select(id))
    }

    pub(crate) fn select_next(&self) -> bool {
        self.apply(Selection::select_next)
    }

    pub(crate) fn select_previous(&self) -> bool {
        self.apply(Selection::select_previous)
    }

    fn apply<F>(&self, action: F) -> bool
    where
        F: FnOnce(&mut Selection) -> bool,
    {
        let changed = action(&mut self.selection.borrow_mut());
        if changed {
            let scene = self.current();
            gloo::console::log!("scene selected", scene.id.get(), scene.title);
            self.notify_subscribers();
        }
        changed
    }

    fn notify_subscribers(&self) {
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)();
        }
    }
}

pub(crate) struct AppSubscription {
    subscriber: AppSubscriber,
    subscribers: Rc<RefCell<Vec<AppSubscriber>>>,
}

impl Drop for AppSubscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn counter(core: &AppCore) -> (Rc<Cell<u32>>, AppSubscription) {
        let count = Rc::new(Cell::new(0));
        let count_for_hook = count.clone();
        let subscription = core.subscribe(Rc::new(move || {
            count_for_hook.set(count_for_hook.get() + 1);
        }));
        (count, subscription)
    }

    #[wasm_bindgen_test]
    fn select_notifies_once_per_change() {
        let core = AppCore::new(SceneStore::builtin());
        let (count, _subscription) = counter(&core);
        assert!(core.select(SceneId::new(3)));
        assert_eq!(count.get(), 1);
        assert!(!core.select(SceneId::new(3)));
        assert_eq!(count.get(), 1);
        assert_eq!(core.current().title, "The Exile");
    }

    #[wasm_bindgen_test]
    fn invalid_select_is_silent() {
        let core = AppCore::new(SceneStore::builtin());
        let (count, _subscription) = counter(&core);
        assert!(!core.select(SceneId::new(99)));
        assert_eq!(count.get(), 0);
        assert_eq!(core.active_id(), SceneId::new(1));
    }

    #[wasm_bindgen_test]
    fn dropped_subscription_stops_notifications() {
        let core = AppCore::new(SceneStore::builtin());
        let (count, subscription) = counter(&core);
        core.select_next();
        drop(subscription);
        core.select_next();
        assert_eq!(count.get(), 1);
        assert_eq!(core.active_id(), SceneId::new(3));
    }
}
