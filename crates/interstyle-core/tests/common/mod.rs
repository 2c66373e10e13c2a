//! Recording test doubles for the engine and host capabilities

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use interstyle_core::{
    ActorHandle, CallbackId, CallbackInvoker, DefaultBehavior, DevicePosition, EngineEvent,
    EventKind, ImageInteractorStyle, Interactor, PickedProp, PickingService, PropHandle,
    RendererHandle, StyleConfig, TrackballActorStyle,
};

/// Engine interactor whose event data the test controls
pub struct FakeInteractor {
    pub position: Cell<DevicePosition>,
    pub key: RefCell<Option<String>>,
    pub renderer: Cell<Option<RendererHandle>>,
    pub renders: Cell<usize>,
}

impl FakeInteractor {
    pub fn new() -> Self {
        Self {
            position: Cell::new(DevicePosition::default()),
            key: RefCell::new(None),
            renderer: Cell::new(RendererHandle::from_raw(0x1000)),
            renders: Cell::new(0),
        }
    }

    pub fn at(&self, x: i32, y: i32) {
        self.position.set(DevicePosition::new(x, y));
    }

    pub fn press_key(&self, key: &str) {
        *self.key.borrow_mut() = Some(key.to_string());
    }
}

impl Interactor for FakeInteractor {
    fn event_position(&self) -> DevicePosition {
        self.position.get()
    }

    fn key_sym(&self) -> Option<String> {
        self.key.borrow().clone()
    }

    fn render(&self) {
        self.renders.set(self.renders.get() + 1);
    }

    fn first_renderer(&self) -> Option<RendererHandle> {
        self.renderer.get()
    }
}

/// Records every fallback to the engine's stock behavior
#[derive(Default)]
pub struct RecordingDefaults {
    pub events: RefCell<Vec<EngineEvent>>,
}

impl RecordingDefaults {
    pub fn count(&self, event: EngineEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn total(&self) -> usize {
        self.events.borrow().len()
    }
}

impl DefaultBehavior for RecordingDefaults {
    fn perform(&self, event: EngineEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A trampoline call as seen by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Position {
        kind: EventKind,
        id: CallbackId,
        position: DevicePosition,
    },
    Actor {
        kind: EventKind,
        id: CallbackId,
        position: DevicePosition,
        actor: Option<ActorHandle>,
    },
    Key {
        id: CallbackId,
        key: String,
    },
}

/// Host invoker that records calls and answers keys with `consume_keys`
#[derive(Default)]
pub struct RecordingInvoker {
    pub calls: RefCell<Vec<Call>>,
    pub consume_keys: Cell<bool>,
}

impl RecordingInvoker {
    pub fn consuming() -> Self {
        let invoker = Self::default();
        invoker.consume_keys.set(true);
        invoker
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl CallbackInvoker for RecordingInvoker {
    fn invoke_position(&self, kind: EventKind, id: CallbackId, position: DevicePosition) {
        self.calls
            .borrow_mut()
            .push(Call::Position { kind, id, position });
    }

    fn invoke_with_actor(
        &self,
        kind: EventKind,
        id: CallbackId,
        position: DevicePosition,
        actor: Option<ActorHandle>,
    ) {
        self.calls.borrow_mut().push(Call::Actor {
            kind,
            id,
            position,
            actor,
        });
    }

    fn invoke_key(&self, id: CallbackId, key: &str) -> bool {
        self.calls.borrow_mut().push(Call::Key {
            id,
            key: key.to_string(),
        });
        self.consume_keys.get()
    }
}

/// Scene with props at fixed device positions
#[derive(Default)]
pub struct FakeScene {
    pub props: RefCell<HashMap<(i32, i32), PickedProp>>,
    pub picks: Cell<usize>,
}

impl FakeScene {
    pub fn place_actor(&self, x: i32, y: i32, raw: usize) -> ActorHandle {
        let actor = ActorHandle::from_raw(raw).expect("non-zero actor address");
        self.props
            .borrow_mut()
            .insert((x, y), PickedProp::Actor(actor));
        actor
    }

    pub fn place_prop(&self, x: i32, y: i32, raw: usize) {
        let prop = PropHandle::from_raw(raw).expect("non-zero prop address");
        self.props
            .borrow_mut()
            .insert((x, y), PickedProp::Other(prop));
    }
}

impl PickingService for FakeScene {
    fn pick(&self, position: DevicePosition, _renderer: RendererHandle) -> Option<PickedProp> {
        self.picks.set(self.picks.get() + 1);
        self.props.borrow().get(&(position.x, position.y)).copied()
    }
}

/// Image style wired to recording doubles and attached to a fake interactor
pub struct ImageHarness {
    pub style: Rc<ImageInteractorStyle>,
    pub interactor: Rc<FakeInteractor>,
    pub defaults: Rc<RecordingDefaults>,
    pub invoker: Rc<RecordingInvoker>,
}

impl ImageHarness {
    pub fn new() -> Self {
        Self::with(RecordingInvoker::default(), StyleConfig::default())
    }

    pub fn with(invoker: RecordingInvoker, config: StyleConfig) -> Self {
        let interactor = Rc::new(FakeInteractor::new());
        let defaults = Rc::new(RecordingDefaults::default());
        let invoker = Rc::new(invoker);
        let style = Rc::new(ImageInteractorStyle::with_config(
            invoker.clone(),
            defaults.clone(),
            &config,
        ));
        style.set_interactor(Some(interactor.clone()));
        Self {
            style,
            interactor,
            defaults,
            invoker,
        }
    }
}

/// Trackball-actor style wired to recording doubles and a fake scene
pub struct TrackballHarness {
    pub style: Rc<TrackballActorStyle>,
    pub interactor: Rc<FakeInteractor>,
    pub defaults: Rc<RecordingDefaults>,
    pub invoker: Rc<RecordingInvoker>,
    pub scene: Rc<FakeScene>,
}

impl TrackballHarness {
    pub fn new() -> Self {
        Self::with_config(StyleConfig::default())
    }

    pub fn with_config(config: StyleConfig) -> Self {
        let interactor = Rc::new(FakeInteractor::new());
        let defaults = Rc::new(RecordingDefaults::default());
        let invoker = Rc::new(RecordingInvoker::default());
        let scene = Rc::new(FakeScene::default());
        let style = Rc::new(TrackballActorStyle::with_config(
            invoker.clone(),
            defaults.clone(),
            scene.clone(),
            &config,
        ));
        style.set_interactor(Some(interactor.clone()));
        Self {
            style,
            interactor,
            defaults,
            invoker,
            scene,
        }
    }
}
