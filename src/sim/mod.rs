//! Gameplay core
//!
//! All round, charge and boat logic lives here. This module must stay
//! single-threaded and synchronous:
//! - State changes only inside tick/input callbacks
//! - Delayed work is a cancellable token, never an ambient timer
//! - Items are addressed by stable [`ItemId`], liveness checked before use
//! - No rendering or platform dependencies

pub mod boat;
pub mod charge;
pub mod collab;
pub mod item;
pub mod item_type;
pub mod lifecycle;
pub mod queue;
pub mod round;
pub mod session;
pub mod timers;

#[cfg(test)]
pub(crate) mod testing;

pub use boat::{Boat, BoatChoreographer, BoatPhase, SweepOutcome};
pub use charge::{ChargeController, Throw};
pub use collab::{Animator, BodyHandle, Camera, Easing, PhysicsWorld, Viewport};
pub use item::{Health, Item, ItemArena, ItemId};
pub use item_type::{BodyShape, DroppableItemType, ItemTypeMeta, ShapeTable};
pub use lifecycle::{ItemLifecycle, LifecycleReport};
pub use queue::ItemQueue;
pub use round::{PanRequest, RoundOutcome, RoundPhase, RoundState};
pub use session::{GameEvent, RoundSession, SessionSnapshot};
pub use timers::{TimerKind, TimerToken, Timers};
