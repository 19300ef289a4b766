//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.
//!
//! The variants map to standard CRUD operations plus two extensions: `Action` for
//! resource-specific logic that does not fit the CRUD model, and `List` for
//! whole-store reads (range queries and threshold sweeps filter the result on the
//! client side).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Generic over `T: ActorEntity`: the associated types (`Create`, `Update`,
/// `Action`) make it impossible to send one resource's payload to another
/// resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every entity in the store, in unspecified order.
    List { respond_to: Response<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
