use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::atomic::{AtomicUsize, Ordering},
};

use lazy_static::lazy_static;
use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Document, Element, HashChangeEvent, MouseEvent, Window};

use crate::{
    document::apply_route,
    helper::{parents_attribute, strip_hash, TargetCast, ACTION_ATTRIBUTE},
    util::ElementEvent,
    ActiveForm, Result, RouteError,
};

type SharedRouterType = Rc<RefCell<Router>>;
pub type RouteEvent = Rc<RefCell<dyn Fn(ActiveForm)>>;

lazy_static! {
    static ref INCREMENT: AtomicUsize = AtomicUsize::new(1);
}

thread_local! {
    static ROUTERS: RefCell<Vec<SharedRouterType>> = RefCell::new(Vec::new());
}

/// Which DOM events drive the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteListener {
    All,
    /// Clicks on (or inside) elements with a `data-form-action` attribute.
    Clicks,
    /// `hashchange` on the window.
    Hash,
    /// Only [`RouterHandle::route`].
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouterId(usize);

impl RouterId {
    pub fn unset() -> Self {
        Self(0)
    }

    pub fn is_registered(&self) -> bool {
        self.try_get().is_some()
    }

    fn try_get(&self) -> Option<SharedRouterType> {
        ROUTERS.with(|routers| {
            routers
                .borrow()
                .iter()
                .find(|item| &item.borrow().router_id == self)
                .cloned()
        })
    }
}

pub struct RouterOptions {
    pub listener: RouteListener,
    /// Defaults to the window's document.
    pub document: Option<Document>,
    /// Called after every applied route.
    pub on_route: Option<RouteEvent>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            listener: RouteListener::All,
            document: None,
            on_route: None,
        }
    }
}

pub struct Router {
    pub router_id: RouterId,

    pub document: Document,
    pub current: ActiveForm,

    on_route: RouteEvent,
    functions: Vec<ElementEvent>,
}

/// Keeps the router listening until we're dropped.
pub struct RouterHandle(RouterId);

impl RouterHandle {
    pub fn unset() -> Self {
        Self(RouterId::unset())
    }

    pub fn id(&self) -> RouterId {
        self.0
    }

    /// The last form this router applied.
    pub fn current(&self) -> ActiveForm {
        self.0
            .try_get()
            .map(|router| router.borrow().current)
            .unwrap_or_default()
    }

    /// Fails with [`RouteError::RouterGone`] on an unset handle.
    pub fn route(&self, tag: &str) -> Result<ActiveForm> {
        let form = ActiveForm::from_tag(tag);

        let router = self.0.try_get().ok_or(RouteError::RouterGone(self.0))?;

        route_to(&Rc::downgrade(&router), form)?;

        Ok(form)
    }
}

impl Default for RouterHandle {
    fn default() -> Self {
        Self::unset()
    }
}

impl Drop for RouterHandle {
    fn drop(&mut self) {
        let removed = ROUTERS.with(|routers| {
            let mut routers = routers.borrow_mut();

            let index = routers
                .iter()
                .position(|v| v.borrow().router_id == self.0)?;

            Some(routers.remove(index))
        });

        if removed.is_some() {
            log::debug!("Dropping Handle {:?}", self.0);
        }
    }
}

/// Should be called AFTER the four forms are in the document.
pub fn register(options: RouterOptions) -> Result<RouterHandle> {
    let RouterOptions {
        listener,
        document,
        on_route,
    } = options;

    let router_id = RouterId(INCREMENT.fetch_add(1, Ordering::Relaxed));

    let on_route = match on_route {
        Some(v) => v,
        None => Rc::new(RefCell::new(|_| {})) as RouteEvent,
    };

    let router_rc = Rc::new(RefCell::new(Router {
        router_id,
        document: document.unwrap_or_else(gloo_utils::document),
        current: ActiveForm::None,
        on_route,
        functions: Vec::new(),
    }));

    if matches!(listener, RouteListener::All | RouteListener::Clicks) {
        register_click_event(&router_rc);
    }

    if matches!(listener, RouteListener::All | RouteListener::Hash) {
        register_hash_event(&router_rc);

        let window = window_of(&router_rc.borrow().document);
        route_to(&Rc::downgrade(&router_rc), hash_form(&window)?)?;
    }

    ROUTERS.with(|routers| routers.borrow_mut().push(router_rc));

    log::debug!("Registered Router {router_id:?} ({listener:?})");

    Ok(RouterHandle(router_id))
}

fn register_click_event(router_rc: &SharedRouterType) {
    let document = router_rc.borrow().document.clone();
    let router = Rc::downgrade(router_rc);

    let function: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |event: MouseEvent| {
        let Some(target) = event.target_dyn_into::<Element>() else {
            return;
        };

        let Some(tag) = parents_attribute(target, ACTION_ATTRIBUTE) else {
            return;
        };

        if let Err(e) = route_to(&router, ActiveForm::from_tag(&tag)) {
            log::error!("Unable to route to {tag:?}: {e}");
        }
    });

    router_rc.borrow_mut().functions.push(ElementEvent::listen(
        document.unchecked_into(),
        "click",
        function,
    ));
}

fn register_hash_event(router_rc: &SharedRouterType) {
    let window = window_of(&router_rc.borrow().document);
    let router = Rc::downgrade(router_rc);

    let window2 = window.clone();
    let function: Closure<dyn FnMut(HashChangeEvent)> =
        Closure::new(move |_event: HashChangeEvent| {
            let result = hash_form(&window2).and_then(|form| route_to(&router, form));

            if let Err(e) = result {
                log::error!("Unable to route from hash: {e}");
            }
        });

    router_rc.borrow_mut().functions.push(ElementEvent::listen(
        window.unchecked_into(),
        "hashchange",
        function,
    ));
}

fn window_of(document: &Document) -> Window {
    document.default_view().unwrap_or_else(gloo_utils::window)
}

fn hash_form(window: &Window) -> Result<ActiveForm> {
    let hash = window.location().hash()?;

    Ok(ActiveForm::from_tag(strip_hash(&hash)))
}

fn route_to(router: &Weak<RefCell<Router>>, form: ActiveForm) -> Result<()> {
    let Some(router) = router.upgrade() else {
        log::debug!("Router was dropped before routing to {form}");
        return Ok(());
    };

    let on_route = {
        let mut router = router.borrow_mut();

        apply_route(&router.document, form)?;
        router.current = form;

        router.on_route.clone()
    };

    (on_route.borrow())(form);

    Ok(())
}
