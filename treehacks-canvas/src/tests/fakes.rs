//! Recording fakes of the video SDK.

use std::cell::RefCell;
use std::rc::Rc;

use crate::policy::{AspectMode, Resolution};
use crate::sdk::{
    Canvas, CanvasId, CanvasKind, Participant, ParticipantId, SdkError, Session, ShareAction,
};
use crate::session::{SessionContext, SessionSlot};
use crate::surface::{Surface, SurfaceId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkCall {
    Subscribe {
        canvas: String,
        surface: SurfaceId,
        aspect_mode: AspectMode,
        resolution: Resolution,
    },
    Unsubscribe {
        canvas: String,
        surface: SurfaceId,
    },
}

pub type CallLog = Rc<RefCell<Vec<SdkCall>>>;

#[derive(Debug)]
pub struct FakeCanvas {
    id: String,
    kind: CanvasKind,
    log: CallLog,
    reject: RefCell<Option<SdkError>>,
}

impl FakeCanvas {
    pub fn reject_with(&self, err: SdkError) {
        *self.reject.borrow_mut() = Some(err);
    }

    pub fn accept(&self) {
        *self.reject.borrow_mut() = None;
    }
}

impl Canvas for FakeCanvas {
    fn id(&self) -> CanvasId {
        CanvasId::new(self.id.clone())
    }

    fn kind(&self) -> CanvasKind {
        self.kind
    }

    fn subscribe(
        &self,
        surface: &Surface,
        aspect_mode: AspectMode,
        resolution: Resolution,
    ) -> Result<(), SdkError> {
        self.log.borrow_mut().push(SdkCall::Subscribe {
            canvas: self.id.clone(),
            surface: surface.id(),
            aspect_mode,
            resolution,
        });
        match self.reject.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn unsubscribe(&self, surface: &Surface) -> Result<(), SdkError> {
        self.log.borrow_mut().push(SdkCall::Unsubscribe {
            canvas: self.id.clone(),
            surface: surface.id(),
        });
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeShare {
    canvas: Option<Rc<FakeCanvas>>,
}

impl FakeShare {
    pub fn new(canvas: Option<Rc<FakeCanvas>>) -> Rc<Self> {
        Rc::new(Self { canvas })
    }
}

impl ShareAction for FakeShare {
    fn share_canvas(&self) -> Option<Rc<dyn Canvas>> {
        self.canvas.clone().map(|c| c as Rc<dyn Canvas>)
    }
}

#[derive(Debug)]
pub struct FakeParticipant {
    id: String,
    name: Option<String>,
    video: Option<Rc<FakeCanvas>>,
    shares: Vec<Rc<FakeShare>>,
}

impl FakeParticipant {
    pub fn new(id: &str, video: Option<Rc<FakeCanvas>>) -> Rc<Self> {
        Rc::new(Self {
            id: id.to_string(),
            name: None,
            video,
            shares: Vec::new(),
        })
    }

    pub fn named(id: &str, name: &str, video: Option<Rc<FakeCanvas>>) -> Rc<Self> {
        Rc::new(Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            video,
            shares: Vec::new(),
        })
    }

    pub fn sharing(id: &str, shares: Vec<Rc<FakeShare>>) -> Rc<Self> {
        Rc::new(Self {
            id: id.to_string(),
            name: None,
            video: None,
            shares,
        })
    }
}

impl Participant for FakeParticipant {
    fn id(&self) -> ParticipantId {
        ParticipantId::new(self.id.clone())
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn video_canvas(&self) -> Option<Rc<dyn Canvas>> {
        self.video.clone().map(|c| c as Rc<dyn Canvas>)
    }

    fn share_actions(&self) -> Vec<Rc<dyn ShareAction>> {
        self.shares
            .iter()
            .map(|s| s.clone() as Rc<dyn ShareAction>)
            .collect()
    }
}

#[derive(Debug)]
pub struct FakeSession {
    me: Option<Rc<FakeParticipant>>,
}

impl Session for FakeSession {
    fn local_participant(&self) -> Option<Rc<dyn Participant>> {
        self.me.clone().map(|p| p as Rc<dyn Participant>)
    }
}

/// Owns the call log and the session slot shared by every binding in a test.
pub struct Harness {
    log: CallLog,
    slot: Rc<SessionSlot>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            slot: Rc::new(SessionSlot::new()),
        }
    }

    pub fn context(&self) -> Rc<dyn SessionContext> {
        self.slot.clone()
    }

    pub fn start_session(&self, me: Option<Rc<FakeParticipant>>) {
        self.slot.join(Rc::new(FakeSession { me }));
    }

    pub fn end_session(&self) {
        self.slot.leave();
    }

    pub fn video_canvas(&self, id: &str) -> Rc<FakeCanvas> {
        self.canvas(id, CanvasKind::Video)
    }

    pub fn share_canvas(&self, id: &str) -> Rc<FakeCanvas> {
        self.canvas(id, CanvasKind::Share)
    }

    fn canvas(&self, id: &str, kind: CanvasKind) -> Rc<FakeCanvas> {
        Rc::new(FakeCanvas {
            id: id.to_string(),
            kind,
            log: self.log.clone(),
            reject: RefCell::new(None),
        })
    }

    pub fn calls(&self) -> Vec<SdkCall> {
        self.log.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn subscribes(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|c| matches!(c, SdkCall::Subscribe { .. }))
            .count()
    }

    pub fn unsubscribes(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|c| matches!(c, SdkCall::Unsubscribe { .. }))
            .count()
    }
}
